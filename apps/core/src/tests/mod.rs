//! Test Module
//!
//! Cross-module test suite for the TheoryCoach core.
//!
//! ## Test Categories
//! - `tutor_tests`: rule precedence, score tiers, localisation and history through `Tutor::respond`
//! - `question_bank_tests`: built-in bank invariants, JSON loading, grading and progress
//! - `config_tests`: environment and `.env` loading
//! - `chaos_test`: failing, slow and off-topic generators, concurrent callers
//! - `integration_tests`: tutor wired to a mocked hosted inference service

pub mod chaos_test;
pub mod config_tests;
pub mod tutor_tests;
