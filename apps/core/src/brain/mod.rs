//! # Brain Module
//!
//! Deterministic, non-LLM reply selection for the theory tutor.
//!
//! ## Components
//! - `keywords`: keyword groups in English, Dutch and Arabic
//! - `rules`: ordered first-match rule table and score tiers
//! - `templates`: per-language reply tables
//! - `language`: language tags and detection
//! - `relevance`: topical gate for generated text

pub mod keywords;
pub mod language;
pub mod relevance;
pub mod rules;
pub mod templates;

pub use language::Language;
pub use rules::{select, RuleId, ScoreTier, Selection};
pub use templates::{Template, TemplateId};
