//! # Question Bank
//!
//! Immutable multiple-choice catalogs grouped by subject.
//!
//! The built-in bank is assembled once from static tables on first access and
//! lives for the rest of the process. Extra banks can be loaded from JSON; those
//! go through [`Question::check`] before they are accepted.

mod hazard;
mod parking;
mod roundabouts;
mod traffic_lights;

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::info;

use crate::error::AppError;
use crate::models::{AnswerOption, Question, Subject};

/// Static definition of one quiz item, turned into a [`Question`] at startup.
pub(crate) struct QuestionDef {
    id: &'static str,
    text: &'static str,
    options: &'static [(&'static str, &'static str)],
    answer: &'static str,
    explanation: &'static str,
}

impl QuestionDef {
    fn build(&self, subject: Subject) -> Question {
        Question {
            id: self.id.to_string(),
            text: self.text.to_string(),
            options: self
                .options
                .iter()
                .map(|(id, text)| AnswerOption {
                    id: id.to_string(),
                    text: text.to_string(),
                })
                .collect(),
            correct_answer_id: self.answer.to_string(),
            explanation: self.explanation.to_string(),
            subject,
        }
    }
}

fn defs_for(subject: Subject) -> &'static [QuestionDef] {
    match subject {
        Subject::HazardPerception => hazard::QUESTIONS,
        Subject::Parking => parking::QUESTIONS,
        Subject::Roundabouts => roundabouts::QUESTIONS,
        Subject::TrafficLights => traffic_lights::QUESTIONS,
    }
}

static BUILTIN: LazyLock<QuestionBank> = LazyLock::new(|| {
    let questions: Vec<Question> = Subject::ALL
        .into_iter()
        .flat_map(|subject| defs_for(subject).iter().map(move |def| def.build(subject)))
        .collect();
    info!("Loaded built-in question bank ({} questions)", questions.len());
    QuestionBank::index(questions)
});

/// Read-only catalog of questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    by_id: HashMap<String, usize>,
}

impl QuestionBank {
    /// The bank shipped with the crate.
    pub fn builtin() -> &'static QuestionBank {
        &BUILTIN
    }

    /// Builds a bank from arbitrary questions, rejecting any that break the
    /// answer-key invariants or reuse an id.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, AppError> {
        let mut seen = std::collections::HashSet::new();
        for question in &questions {
            question.check()?;
            if !seen.insert(question.id.as_str()) {
                return Err(AppError::Validation(format!(
                    "duplicate question id '{}'",
                    question.id
                )));
            }
        }
        Ok(Self::index(questions))
    }

    /// Parses a JSON array of questions (camelCase keys) into a validated bank.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::from_questions(questions)
    }

    fn index(questions: Vec<Question>) -> Self {
        let by_id = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();
        Self { questions, by_id }
    }

    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.by_id.get(id).map(|&i| &self.questions[i])
    }

    /// Questions of one subject, in definition order.
    pub fn by_subject(&self, subject: Subject) -> impl Iterator<Item = &Question> + '_ {
        self.questions.iter().filter(move |q| q.subject == subject)
    }

    /// Subjects that have at least one question, in canonical order.
    pub fn subjects(&self) -> Vec<Subject> {
        Subject::ALL
            .into_iter()
            .filter(|s| self.questions.iter().any(|q| q.subject == *s))
            .collect()
    }

    /// Draws up to `count` distinct questions of a subject in random order.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        subject: Subject,
        count: usize,
        rng: &mut R,
    ) -> Vec<&Question> {
        let mut pool: Vec<&Question> = self.by_subject(subject).collect();
        pool.shuffle(rng);
        pool.truncate(count);
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_covers_every_subject() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.subjects(), Subject::ALL.to_vec());
        for subject in Subject::ALL {
            assert!(bank.by_subject(subject).count() >= 5, "{} is thin", subject);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let bank = QuestionBank::builtin();
        let q = bank.get("roundabout-2").expect("known id");
        assert_eq!(q.subject, Subject::Roundabouts);
        assert!(bank.get("missing").is_none());
    }

    #[test]
    fn test_sample_is_bounded_and_distinct() {
        let bank = QuestionBank::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        let picked = bank.sample(Subject::Parking, 3, &mut rng);
        assert_eq!(picked.len(), 3);
        let mut ids: Vec<&str> = picked.iter().map(|q| q.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert!(picked.iter().all(|q| q.subject == Subject::Parking));

        let all = bank.sample(Subject::Parking, 100, &mut rng);
        assert_eq!(all.len(), bank.by_subject(Subject::Parking).count());
    }

    #[test]
    fn test_from_json_rejects_bad_answer_key() {
        let json = r#"[{
            "id": "x1", "text": "?", "explanation": "-", "subject": "parking",
            "options": [{"id": "a", "text": "A"}, {"id": "b", "text": "B"}],
            "correctAnswerId": "c"
        }]"#;
        assert!(matches!(
            QuestionBank::from_json(json),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_from_questions_rejects_duplicate_ids() {
        let q = QuestionBank::builtin().all()[0].clone();
        let err = QuestionBank::from_questions(vec![q.clone(), q]).unwrap_err();
        assert!(err.to_string().contains("duplicate question id"));
    }
}
