// TheoryCoach Core
// Driving-theory question banks and the rule-based exam tutor

pub mod brain;
pub mod config;
pub mod error;
pub mod history;
pub mod inference;
pub mod models;
pub mod question_bank;
pub mod quiz;
pub mod telemetry;
pub mod tutor;

#[cfg(test)]
mod tests;

pub use config::{LogFormat, TutorConfig};
pub use error::AppError;
pub use models::{
    AnswerOption, ConversationEntry, HistoryStats, Question, Role, Subject, Tone, TutorContext,
    TutorResponse, UserProgressSnapshot,
};
pub use question_bank::QuestionBank;
pub use tutor::Tutor;
