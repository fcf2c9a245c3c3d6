use crate::config::TutorConfig;
use crate::error::AppError;
use crate::inference::TextGenerator;
use crate::models::TutorContext;
use crate::tutor::Tutor;
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Instant;
use tokio::time::{sleep, Duration};

// --- Mock Components ---

enum Behaviour {
    Fail,
    Hang,
    Reply(&'static str),
}

struct MockGenerator {
    behaviour: Behaviour,
    request_count: Arc<AtomicUsize>,
}

impl MockGenerator {
    fn new(behaviour: Behaviour) -> (Arc<Self>, Arc<AtomicUsize>) {
        let request_count = Arc::new(AtomicUsize::new(0));
        let generator = Arc::new(Self {
            behaviour,
            request_count: request_count.clone(),
        });
        (generator, request_count)
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        assert!(prompt.contains("User Request:"));
        match self.behaviour {
            Behaviour::Fail => Err(AppError::UpstreamStatus {
                status: 503,
                body: "Service Unavailable".to_string(),
            }),
            Behaviour::Hang => {
                sleep(Duration::from_secs(60)).await;
                Ok("road signs, eventually".to_string())
            }
            Behaviour::Reply(text) => Ok(text.to_string()),
        }
    }
}

fn short_timeout() -> TutorConfig {
    TutorConfig {
        timeout_secs: 1,
        ..TutorConfig::default()
    }
}

#[tokio::test]
async fn test_failing_generator_still_yields_template_reply() {
    let (generator, count) = MockGenerator::new(Behaviour::Fail);
    let tutor = Tutor::default().with_generator(generator);

    let response = tutor.respond("How much does the exam cost?", &TutorContext::default()).await;

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(response.message.contains("€37.50"));
    assert_eq!(tutor.history_stats().count, 2);
}

#[tokio::test]
async fn test_hanging_generator_is_cut_off() {
    let (generator, count) = MockGenerator::new(Behaviour::Hang);
    let tutor = Tutor::new(&short_timeout()).with_generator(generator);

    let start = Instant::now();
    let response = tutor.respond("rotonde", &TutorContext::default()).await;
    let elapsed = start.elapsed();

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(elapsed < Duration::from_secs(5), "respond took {:?}", elapsed);
    assert!(response.message.starts_with("Roundabout rules"));
}

#[tokio::test]
async fn test_generated_text_never_replaces_the_template() {
    let baseline = Tutor::default()
        .respond("Where should I focus?", &TutorContext::with_score(40.0))
        .await;

    for text in ["I like pancakes.", "Always check the road signs twice."] {
        let (generator, _) = MockGenerator::new(Behaviour::Reply(text));
        let tutor = Tutor::default().with_generator(generator);
        let response = tutor
            .respond("Where should I focus?", &TutorContext::with_score(40.0))
            .await;
        assert_eq!(response, baseline);
    }
}

#[tokio::test]
async fn test_concurrent_callers_share_a_bounded_history() {
    let (generator, count) = MockGenerator::new(Behaviour::Reply("Traffic rules matter."));
    let tutor = Arc::new(Tutor::default().with_generator(generator));

    let mut handles = Vec::new();
    for i in 0..20 {
        let tutor = tutor.clone();
        handles.push(tokio::spawn(async move {
            tutor
                .respond(&format!("help {}", i), &TutorContext::with_score(i as f64 * 5.0))
                .await
        }));
    }

    for handle in handles {
        let response = handle.await.expect("respond task panicked");
        assert!(!response.message.is_empty());
    }

    assert_eq!(count.load(Ordering::SeqCst), 20);
    assert_eq!(tutor.history().len(), 10);
}
