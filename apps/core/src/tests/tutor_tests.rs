//! Tutor Tests
//!
//! Behaviour of `Tutor::respond` without any external generator.

use crate::brain::Language;
use crate::config::TutorConfig;
use crate::models::{Role, Tone, TutorContext};
use crate::tutor::Tutor;

fn english(score: f64) -> TutorContext {
    TutorContext::with_score(score).language(Language::En)
}

#[cfg(test)]
mod selection_tests {
    use super::*;

    #[tokio::test]
    async fn test_cost_question_mentions_fee_and_booking() {
        let tutor = Tutor::default();
        let response = tutor
            .respond("How much does the CBR exam cost?", &TutorContext::default())
            .await;

        assert!(response.message.contains("€37.50"), "got: {}", response.message);
        assert!(
            response
                .action_items
                .iter()
                .any(|item| item.to_lowercase().contains("book")),
            "Expected a booking action item, got {:?}",
            response.action_items
        );
        assert_eq!(response.tone, Tone::Analytical);
    }

    #[tokio::test]
    async fn test_dutch_price_question_naming_the_exam_gets_cost_reply() {
        let tutor = Tutor::default();
        let response = tutor
            .respond("Hoeveel kost het theorie-examen?", &TutorContext::default())
            .await;
        assert!(response.message.contains("€37,50"), "got: {}", response.message);
    }

    #[tokio::test]
    async fn test_cost_wins_over_priority() {
        let tutor = Tutor::default();
        let response = tutor
            .respond("What is the price, and how does voorrang work?", &english(50.0))
            .await;
        assert!(response.message.contains("€37.50"));
    }

    #[tokio::test]
    async fn test_dutch_roundabout_keyword_gets_roundabout_rules() {
        let tutor = Tutor::default();
        let response = tutor.respond("rotonde regels", &TutorContext::default()).await;

        let text = response.message.to_lowercase();
        assert!(text.contains("give way"), "got: {}", response.message);
        assert!(text.contains("signal"), "got: {}", response.message);
    }

    #[tokio::test]
    async fn test_focus_is_tiered_by_score() {
        let tutor = Tutor::default();

        let beginner = tutor.respond("Where should I focus?", &english(20.0)).await;
        assert!(beginner.message.contains("20%"));
        assert_eq!(beginner.tone, Tone::Supportive);

        let developing = tutor.respond("Where should I focus?", &english(50.0)).await;
        assert!(developing.message.contains("50%"));
        assert!(developing.message.contains("20 points"));
        assert_eq!(developing.tone, Tone::Encouraging);

        let advanced = tutor.respond("Where should I focus?", &english(85.0)).await;
        assert!(advanced.message.contains("85%"));
        assert_eq!(advanced.tone, Tone::Motivational);
    }

    #[tokio::test]
    async fn test_ready_learner_is_sent_to_a_mock_exam() {
        let tutor = Tutor::default();

        let ready = tutor.respond("What should I focus on next?", &english(85.0)).await;
        assert!(ready.message.contains("mock exam"), "got: {}", ready.message);

        let not_ready = tutor.respond("What should I focus on next?", &english(60.0)).await;
        assert!(!not_ready.message.contains("mock exam"));
        assert!(not_ready.message.contains("60%"));
    }

    #[tokio::test]
    async fn test_unmatched_message_gets_overview() {
        let tutor = Tutor::default();
        let response = tutor.respond("zzz", &english(0.0)).await;
        assert!(response.message.starts_with("I can help you prepare"));
        assert!(!response.action_items.is_empty());
        assert!(!response.next_steps.is_empty());
    }

    #[tokio::test]
    async fn test_greeting_needs_a_whole_word() {
        let tutor = Tutor::default();
        let greeting = tutor.respond("Hi there", &english(0.0)).await;
        assert!(greeting.message.starts_with("Hello!"));

        let not_greeting = tutor.respond("this", &english(0.0)).await;
        assert!(!not_greeting.message.starts_with("Hello!"));
    }

    #[tokio::test]
    async fn test_empty_and_huge_input_do_not_panic() {
        let tutor = Tutor::default();

        let empty = tutor.respond("", &TutorContext::default()).await;
        assert!(!empty.message.is_empty());

        let huge = "x".repeat(100_000);
        let response = tutor.respond(&huge, &TutorContext::default()).await;
        assert!(!response.message.is_empty());
    }

    #[tokio::test]
    async fn test_non_finite_score_is_treated_as_zero() {
        let tutor = Tutor::default();
        let response = tutor.respond("Where should I focus?", &english(f64::NAN)).await;
        assert!(response.message.contains("0%"));
        assert_eq!(response.tone, Tone::Supportive);
    }
}

#[cfg(test)]
mod language_tests {
    use super::*;

    #[tokio::test]
    async fn test_arabic_message_gets_arabic_reply() {
        let tutor = Tutor::default();
        let response = tutor.respond("كم يكلف الامتحان؟", &TutorContext::default()).await;

        assert!(response.message.contains("€37.50"));
        assert!(response.message.contains("CBR"));
        assert!(response.message.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c)));
    }

    #[tokio::test]
    async fn test_explicit_language_overrides_detection() {
        let tutor = Tutor::default();
        let context = TutorContext::default().language(Language::Nl);
        let response = tutor.respond("How much does the exam cost?", &context).await;
        assert!(response.message.contains("€37,50"), "got: {}", response.message);
    }

    #[tokio::test]
    async fn test_dutch_sentence_is_detected() {
        let tutor = Tutor::default();
        let response = tutor
            .respond("Hoeveel kost het examen voor mijn rijbewijs?", &TutorContext::default())
            .await;
        assert!(response.message.contains("€37,50"), "got: {}", response.message);
    }

    #[tokio::test]
    async fn test_configured_language_is_the_fallback() {
        let config = TutorConfig {
            language: Language::Nl,
            ..TutorConfig::default()
        };
        let tutor = Tutor::new(&config);
        let response = tutor.respond("price", &TutorContext::default()).await;
        assert!(response.message.contains("€37,50"));
    }
}

#[cfg(test)]
mod history_tests {
    use super::*;

    #[tokio::test]
    async fn test_each_tutor_is_its_own_session() {
        let first = Tutor::default();
        let second = Tutor::default();
        assert_ne!(first.session_id(), second.session_id());

        first.respond("hello", &TutorContext::default()).await;
        assert_eq!(first.history_stats().count, 2);
        assert_eq!(second.history_stats().count, 0);
    }

    #[tokio::test]
    async fn test_each_reply_records_two_turns() {
        let tutor = Tutor::default();
        tutor.respond("hello", &TutorContext::default()).await;

        let history = tutor.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].message, "hello");
        assert_eq!(history[1].role, Role::Assistant);
        assert!(history[1].message.starts_with("Hello!"));
    }

    #[tokio::test]
    async fn test_history_is_capped_and_evicts_oldest() {
        let tutor = Tutor::default();
        for i in 0..11 {
            tutor.respond(&format!("question {}", i), &TutorContext::default()).await;
        }

        let history = tutor.history();
        assert_eq!(history.len(), 10);
        assert_eq!(tutor.history_stats().count, 10);
        assert!(history.iter().all(|e| e.message != "question 0"));
        assert_eq!(history[0].message, "question 6");
        assert_eq!(history[0].role, Role::User);
    }

    #[tokio::test]
    async fn test_configured_capacity_is_used() {
        let config = TutorConfig {
            history_capacity: 3,
            ..TutorConfig::default()
        };
        let tutor = Tutor::new(&config);
        tutor.respond("one", &TutorContext::default()).await;
        tutor.respond("two", &TutorContext::default()).await;
        assert_eq!(tutor.history_stats().count, 3);
    }

    #[tokio::test]
    async fn test_stats_are_idempotent_and_clear_resets() {
        let tutor = Tutor::default();
        let empty = tutor.history_stats();
        assert_eq!(empty.count, 0);
        assert!(empty.last_timestamp.is_none());

        tutor.respond("thanks!", &TutorContext::default()).await;
        let first = tutor.history_stats();
        let second = tutor.history_stats();
        assert_eq!(first, second);
        assert_eq!(first.count, 2);
        assert!(first.last_timestamp.is_some());

        tutor.clear_history();
        assert_eq!(tutor.history_stats().count, 0);
        assert!(tutor.history().is_empty());
    }
}
