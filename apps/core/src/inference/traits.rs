use async_trait::async_trait;

use crate::error::AppError;

/// A backend able to turn a prompt into text.
///
/// Implementations may fail in any way; the tutor treats every error as
/// "no result" and carries on with its templates.
#[async_trait]
pub trait TextGenerator: Send + Sync + 'static {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}
