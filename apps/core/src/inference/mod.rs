//! Optional text generation against a hosted inference service.

pub mod hosted;
pub mod traits;

pub use hosted::{GenerationParams, HostedInference};
pub use traits::TextGenerator;
