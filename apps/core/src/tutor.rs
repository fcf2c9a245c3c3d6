//! # Tutor
//!
//! Entry point for chat messages. A [`Tutor`] owns the rolling history of one
//! session and, optionally, a text generator for best-effort completions.
//!
//! ## Processing a message
//! 1. The message is appended to the history.
//! 2. If a generator is configured, a bounded completion is requested and
//!    passed through the relevance gate. The gated text is logged only.
//! 3. The rule table picks a template from the lower-cased message and the
//!    caller's average score.
//! 4. The template is rendered in the reply language and the reply is
//!    appended to the history.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::brain::{self, relevance, templates, Language};
use crate::config::TutorConfig;
use crate::error::AppError;
use crate::history::ConversationHistory;
use crate::inference::{HostedInference, TextGenerator};
use crate::models::{ConversationEntry, HistoryStats, Role, TutorContext, TutorResponse};

/// Turns of history included in a generation prompt.
const PROMPT_HISTORY_TURNS: usize = 4;

pub struct Tutor {
    session_id: Uuid,
    history: Mutex<ConversationHistory>,
    generator: Option<Arc<dyn TextGenerator>>,
    language: Language,
    /// Bound on the whole external step, both endpoint attempts included.
    external_timeout: Duration,
}

impl Default for Tutor {
    fn default() -> Self {
        Self::new(&TutorConfig::default())
    }
}

impl Tutor {
    /// Template-only tutor; no generator is attached.
    pub fn new(config: &TutorConfig) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            history: Mutex::new(ConversationHistory::with_capacity(config.history_capacity)),
            generator: None,
            language: config.language,
            external_timeout: config.timeout() * 2,
        }
    }

    /// Attaches a [`HostedInference`] client when the config names a primary endpoint.
    pub fn from_config(config: &TutorConfig) -> Result<Self, AppError> {
        let tutor = Self::new(config);
        Ok(match HostedInference::from_config(config)? {
            Some(client) => tutor.with_generator(Arc::new(client)),
            None => tutor,
        })
    }

    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Answers a chat message. Never fails; external trouble only shows up in logs.
    #[instrument(skip(self, message, context), fields(session = %self.session_id, page = %context.page))]
    pub async fn respond(&self, message: &str, context: &TutorContext) -> TutorResponse {
        let prompt = {
            let mut history = self.lock_history();
            history.push(Role::User, message);
            self.generator
                .as_ref()
                .map(|_| build_prompt(history.iter(), context))
        };

        if let Some(prompt) = prompt {
            if let Some(generated) = self.try_external(&prompt).await {
                match relevance::gate(&generated) {
                    Some(text) => {
                        debug!(chars = text.len(), "Generated text passed the relevance gate")
                    }
                    None => debug!("Generated text discarded as off-topic"),
                }
            }
        }

        let score = context.progress.effective_score();
        let selection = brain::select(&message.to_lowercase(), score);
        let language = context
            .language
            .or_else(|| Language::detect(message))
            .unwrap_or(self.language);

        info!(
            rule = ?selection.rule,
            term = selection.term.unwrap_or("-"),
            template = ?selection.template,
            %language,
            score,
            "Tutor reply selected"
        );

        let response = templates::table(language)(selection.template).render(score);
        self.lock_history().push(Role::Assistant, response.message.clone());
        response
    }

    /// `None` on any failure or when the bound elapses.
    async fn try_external(&self, prompt: &str) -> Option<String> {
        let generator = self.generator.as_ref()?;
        match timeout(self.external_timeout, generator.generate(prompt)).await {
            Ok(Ok(text)) => Some(text),
            Ok(Err(e)) => {
                warn!(error = %e, "External generation failed");
                None
            }
            Err(_) => {
                warn!(bound = ?self.external_timeout, "External generation timed out");
                None
            }
        }
    }

    pub fn clear_history(&self) {
        self.lock_history().clear();
        info!(session = %self.session_id, "Conversation history cleared");
    }

    pub fn history_stats(&self) -> HistoryStats {
        self.lock_history().stats()
    }

    /// Copy of the current history, oldest first.
    pub fn history(&self) -> Vec<ConversationEntry> {
        self.lock_history().iter().cloned().collect()
    }

    fn lock_history(&self) -> MutexGuard<'_, ConversationHistory> {
        // Poisoning is ignored: every mutation completes before its guard drops.
        self.history.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "User",
        Role::Assistant => "Tutor",
    }
}

/// Recent turns and the learner's context, followed by the newest message.
fn build_prompt<'a>(
    entries: impl DoubleEndedIterator<Item = &'a ConversationEntry>,
    context: &TutorContext,
) -> String {
    let mut turns: Vec<&ConversationEntry> = entries.rev().take(PROMPT_HISTORY_TURNS + 1).collect();
    turns.reverse();
    let current = turns.pop();

    let mut parts = Vec::new();
    if !turns.is_empty() {
        let history = turns
            .iter()
            .map(|e| format!("{}: {}", role_label(e.role), e.message))
            .collect::<Vec<_>>()
            .join("\n");
        parts.push(format!("Conversation History:\n{}", history));
    }

    let mut learner = format!("Average score: {:.0}%", context.progress.effective_score());
    if !context.page.is_empty() {
        learner.push_str(&format!("\nPage: {}", context.page));
    }
    if !context.progress.current_test.is_empty() {
        learner.push_str(&format!("\nCurrent test: {}", context.progress.current_test));
    }
    parts.push(format!("Learner:\n{}", learner));

    if let Some(entry) = current {
        parts.push(format!("User Request: {}", entry.message));
    }
    parts.join("\n\n")
}
