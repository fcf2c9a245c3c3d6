use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::brain::Language;
use crate::error::AppError;

/// Category a quiz item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    HazardPerception,
    Parking,
    Roundabouts,
    TrafficLights,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::HazardPerception,
        Subject::Parking,
        Subject::Roundabouts,
        Subject::TrafficLights,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Subject::HazardPerception => "hazard_perception",
            Subject::Parking => "parking",
            Subject::Roundabouts => "roundabouts",
            Subject::TrafficLights => "traffic_lights",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
}

/// A multiple-choice quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub text: String,
    /// Ordered answers; at least two.
    #[validate(length(min = 2))]
    pub options: Vec<AnswerOption>,
    /// Must equal the id of exactly one entry in `options`.
    pub correct_answer_id: String,
    pub explanation: String,
    pub subject: Subject,
}

impl Question {
    /// Verifies the structural invariants: non-empty fields, two or more
    /// options with unique ids, and an answer key that names one of them.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;

        let mut seen = std::collections::HashSet::new();
        for option in &self.options {
            if !seen.insert(option.id.as_str()) {
                return Err(AppError::Validation(format!(
                    "question '{}' has duplicate option id '{}'",
                    self.id, option.id
                )));
            }
        }

        if !seen.contains(self.correct_answer_id.as_str()) {
            return Err(AppError::Validation(format!(
                "question '{}' answer key '{}' matches no option",
                self.id, self.correct_answer_id
            )));
        }

        Ok(())
    }

    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_answer_id == option_id
    }

    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single turn held in the rolling history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub role: Role,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Register a tutor reply is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Encouraging,
    Motivational,
    Analytical,
    Supportive,
}

/// The payload handed back for every chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorResponse {
    pub message: String,
    pub tone: Tone,
    pub action_items: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Caller-computed progress. Not validated here; callers clamp to [0, 100].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProgressSnapshot {
    pub average_score: f64,
    pub current_test: String,
}

impl UserProgressSnapshot {
    pub fn new(average_score: f64) -> Self {
        Self {
            average_score,
            current_test: String::new(),
        }
    }

    /// The score used for tiering. Non-finite input counts as 0.
    pub fn effective_score(&self) -> f64 {
        if self.average_score.is_finite() {
            self.average_score
        } else {
            0.0
        }
    }
}

/// Per-request context supplied next to the chat message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorContext {
    pub page: String,
    pub progress: UserProgressSnapshot,
    /// Explicit reply language; detected from the message when absent.
    pub language: Option<Language>,
}

impl TutorContext {
    pub fn with_score(average_score: f64) -> Self {
        Self {
            progress: UserProgressSnapshot::new(average_score),
            ..Self::default()
        }
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

/// Summary returned by `Tutor::history_stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub count: usize,
    pub last_timestamp: Option<DateTime<Utc>>,
}
