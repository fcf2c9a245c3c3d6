//! Quiz grading and progress aggregation.
//!
//! Grades a submitted answer sheet against a [`QuestionBank`] and keeps a
//! running record of results, from which the [`UserProgressSnapshot`] handed
//! to the tutor is derived.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::{Subject, UserProgressSnapshot};
use crate::question_bank::QuestionBank;

/// Verdict on a single answered question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub question_id: String,
    pub selected: String,
    pub correct: bool,
    pub explanation: String,
}

/// Result of one graded quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub subject: Subject,
    pub total: usize,
    pub correct: usize,
    /// Percentage in [0, 100], one decimal.
    pub score: f64,
    pub answers: Vec<AnswerOutcome>,
    pub completed_at: DateTime<Utc>,
}

impl QuizResult {
    pub fn passed(&self, pass_mark: f64) -> bool {
        self.score >= pass_mark
    }
}

/// Grades `(question_id, option_id)` pairs for one subject.
///
/// Every question must exist in the bank and belong to `subject`. An option id
/// that the question does not offer is graded as wrong, not rejected.
pub fn grade(
    bank: &QuestionBank,
    subject: Subject,
    answers: &[(&str, &str)],
) -> Result<QuizResult, AppError> {
    if answers.is_empty() {
        return Err(AppError::Validation("answer sheet is empty".to_string()));
    }

    let mut outcomes = Vec::with_capacity(answers.len());
    for (question_id, selected) in answers {
        let question = bank.get(question_id).ok_or_else(|| {
            AppError::Validation(format!("unknown question id '{}'", question_id))
        })?;
        if question.subject != subject {
            return Err(AppError::Validation(format!(
                "question '{}' belongs to {}, not {}",
                question_id, question.subject, subject
            )));
        }
        outcomes.push(AnswerOutcome {
            question_id: question.id.clone(),
            selected: selected.to_string(),
            correct: question.is_correct(selected),
            explanation: question.explanation.clone(),
        });
    }

    let correct = outcomes.iter().filter(|o| o.correct).count();
    let total = outcomes.len();
    let score = round1(correct as f64 / total as f64 * 100.0);

    debug!(%subject, correct, total, score, "Graded quiz");

    Ok(QuizResult {
        subject,
        total,
        correct,
        score,
        answers: outcomes,
        completed_at: Utc::now(),
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Accumulates quiz results for one learner.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    results: Vec<QuizResult>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: QuizResult) {
        info!(subject = %result.subject, score = result.score, "Recorded quiz result");
        self.results.push(result);
    }

    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    /// Mean of recorded scores, clamped to [0, 100]; 0 with no results.
    pub fn average_score(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.results.iter().map(|r| r.score).sum();
        round1(sum / self.results.len() as f64).clamp(0.0, 100.0)
    }

    /// Subject with the lowest average score, if any result was recorded.
    pub fn weakest_subject(&self) -> Option<Subject> {
        let mut per_subject: BTreeMap<Subject, (f64, usize)> = BTreeMap::new();
        for result in &self.results {
            let entry = per_subject.entry(result.subject).or_insert((0.0, 0));
            entry.0 += result.score;
            entry.1 += 1;
        }
        per_subject
            .into_iter()
            .map(|(subject, (sum, n))| (subject, sum / n as f64))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(subject, _)| subject)
    }

    /// Snapshot passed to the tutor as `context.progress`.
    pub fn snapshot(&self, current_test: impl Into<String>) -> UserProgressSnapshot {
        UserProgressSnapshot {
            average_score: self.average_score(),
            current_test: current_test.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_counts_correct_answers() {
        let bank = QuestionBank::builtin();
        let result = grade(
            bank,
            Subject::TrafficLights,
            &[("lights-1", "b"), ("lights-2", "a"), ("lights-3", "a")],
        )
        .unwrap();

        assert_eq!(result.total, 3);
        assert_eq!(result.correct, 2);
        assert_eq!(result.score, 66.7);
        assert!(!result.answers[2].correct);
        assert!(!result.answers[2].explanation.is_empty());
    }

    #[test]
    fn test_grade_rejects_unknown_and_foreign_questions() {
        let bank = QuestionBank::builtin();
        assert!(grade(bank, Subject::Parking, &[("nope", "a")]).is_err());
        assert!(grade(bank, Subject::Parking, &[("lights-1", "b")]).is_err());
        assert!(grade(bank, Subject::Parking, &[]).is_err());
    }

    #[test]
    fn test_unknown_option_is_wrong_not_error() {
        let bank = QuestionBank::builtin();
        let result = grade(bank, Subject::Parking, &[("parking-1", "zz")]).unwrap();
        assert_eq!(result.correct, 0);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_tracker_average_and_weakest_subject() {
        let bank = QuestionBank::builtin();
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.average_score(), 0.0);
        assert!(tracker.weakest_subject().is_none());

        tracker.record(grade(bank, Subject::Parking, &[("parking-1", "b"), ("parking-2", "c")]).unwrap());
        tracker.record(grade(bank, Subject::Roundabouts, &[("roundabout-1", "a"), ("roundabout-2", "c")]).unwrap());

        assert_eq!(tracker.average_score(), 75.0);
        assert_eq!(tracker.weakest_subject(), Some(Subject::Roundabouts));

        let snapshot = tracker.snapshot("mock-1");
        assert_eq!(snapshot.average_score, 75.0);
        assert_eq!(snapshot.current_test, "mock-1");
    }
}
