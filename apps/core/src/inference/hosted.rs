use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use url::Url;

use super::traits::TextGenerator;
use crate::config::TutorConfig;
use crate::error::AppError;

// --- Constants ---
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub temperature: f32,
    pub do_sample: bool,
    pub top_p: f32,
    pub repetition_penalty: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 200,
            temperature: 0.7,
            do_sample: true,
            top_p: 0.9,
            repetition_penalty: 1.2,
        }
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
}

/// Client for a hosted text-generation service with one fallback endpoint.
///
/// Each endpoint attempt is bounded by `timeout`. The fallback is tried once,
/// and only after the primary has definitively failed.
pub struct HostedInference {
    client: Client,
    primary: Url,
    fallback: Option<Url>,
    auth_token: Option<String>,
    timeout: Duration,
    params: GenerationParams,
}

impl HostedInference {
    pub fn new(
        primary: Url,
        fallback: Option<Url>,
        auth_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            primary,
            fallback,
            auth_token,
            timeout,
            params: GenerationParams::default(),
        })
    }

    /// `Ok(None)` when the config has no primary endpoint.
    pub fn from_config(config: &TutorConfig) -> Result<Option<Self>, AppError> {
        let Some(primary) = config.primary_endpoint.clone() else {
            return Ok(None);
        };
        info!(
            primary = %primary,
            fallback = ?config.fallback_endpoint.as_ref().map(Url::as_str),
            "Hosted inference enabled"
        );
        Self::new(
            primary,
            config.fallback_endpoint.clone(),
            config.api_token.clone(),
            config.timeout(),
        )
        .map(Some)
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    fn build_request(&self, endpoint: &Url, payload: &InferenceRequest<'_>) -> RequestBuilder {
        let request = self.client.post(endpoint.clone()).json(payload);
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn attempt(&self, endpoint: &Url, prompt: &str) -> Result<String, AppError> {
        let payload = InferenceRequest {
            inputs: prompt,
            parameters: &self.params,
        };

        let exchange = async {
            let res = self.build_request(endpoint, &payload).send().await?;
            let status = res.status();
            let body = res.text().await?;
            Ok::<_, AppError>((status, body))
        };

        let (status, body) = timeout(self.timeout, exchange).await??;
        debug!(endpoint = %endpoint, %status, "Inference response received");
        parse_response(status, &body, prompt)
    }
}

#[async_trait]
impl TextGenerator for HostedInference {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let err = match self.attempt(&self.primary, prompt).await {
            Ok(text) => return Ok(text),
            Err(err) => err,
        };
        warn!(endpoint = %self.primary, error = %err, "Primary inference endpoint failed");

        match &self.fallback {
            Some(fallback) if err.is_fallback_worthy() => {
                let result = self.attempt(fallback, prompt).await;
                if let Err(e) = &result {
                    warn!(endpoint = %fallback, error = %e, "Fallback inference endpoint failed");
                }
                result
            }
            _ => Err(err),
        }
    }
}

fn parse_response(status: StatusCode, body: &str, prompt: &str) -> Result<String, AppError> {
    if status == StatusCode::SERVICE_UNAVAILABLE && body.to_lowercase().contains("loading") {
        return Err(AppError::ModelLoading(truncate(body)));
    }
    if !status.is_success() {
        return Err(AppError::UpstreamStatus {
            status: status.as_u16(),
            body: truncate(body),
        });
    }

    let json: Value = serde_json::from_str(body)?;

    if let Some(error) = json.get("error").and_then(Value::as_str) {
        return Err(if error.to_lowercase().contains("loading") {
            AppError::ModelLoading(truncate(error))
        } else {
            AppError::Validation(format!("upstream error: {}", truncate(error)))
        });
    }

    let text = extract_generated_text(&json)
        .ok_or_else(|| AppError::Validation("response carries no generated text".to_string()))?;

    // Some deployments echo the prompt in front of the completion.
    let text = text.strip_prefix(prompt).unwrap_or(text).trim();
    if text.is_empty() {
        return Err(AppError::Validation("empty generation".to_string()));
    }
    Ok(text.to_string())
}

/// Accepts `[{"generated_text": ..}]`, `{"generated_text": ..}` or `{"text": ..}`.
fn extract_generated_text(json: &Value) -> Option<&str> {
    match json {
        Value::Array(items) => items
            .first()
            .and_then(|item| item.get("generated_text"))
            .and_then(Value::as_str),
        Value::Object(map) => map
            .get("generated_text")
            .or_else(|| map.get("text"))
            .and_then(Value::as_str),
        _ => None,
    }
}

fn truncate(text: &str) -> String {
    text.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn endpoint(server: &MockServer, name: &str) -> Url {
        Url::parse(&format!("{}/{}", server.uri(), name)).unwrap()
    }

    fn client(server: &MockServer, with_fallback: bool, timeout: Duration) -> HostedInference {
        let fallback = with_fallback.then(|| endpoint(server, "fallback"));
        HostedInference::new(endpoint(server, "primary"), fallback, None, timeout).unwrap()
    }

    #[test]
    fn test_extract_generated_text_shapes() {
        assert_eq!(extract_generated_text(&json!([{"generated_text": "a"}])), Some("a"));
        assert_eq!(extract_generated_text(&json!({"generated_text": "b"})), Some("b"));
        assert_eq!(extract_generated_text(&json!({"text": "c"})), Some("c"));
        assert_eq!(extract_generated_text(&json!({"other": "d"})), None);
        assert_eq!(extract_generated_text(&json!([])), None);
    }

    #[test]
    fn test_parse_response_strips_echoed_prompt() {
        let body = json!([{"generated_text": "Q: rules? A: Give way at the roundabout."}]).to_string();
        let text = parse_response(StatusCode::OK, &body, "Q: rules?").unwrap();
        assert_eq!(text, "A: Give way at the roundabout.");
    }

    #[test]
    fn test_parse_response_detects_warm_up() {
        let body = json!({"error": "Model gpt2 is currently loading", "estimated_time": 20.0}).to_string();
        assert!(matches!(
            parse_response(StatusCode::SERVICE_UNAVAILABLE, &body, "p"),
            Err(AppError::ModelLoading(_))
        ));
        assert!(matches!(
            parse_response(StatusCode::OK, &body, "p"),
            Err(AppError::ModelLoading(_))
        ));
    }

    #[tokio::test]
    async fn test_primary_success_sends_expected_body() {
        // 1. Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/primary"))
            .and(header("authorization", "Bearer secret"))
            .and(body_partial_json(json!({
                "inputs": "Explain priority",
                "parameters": {"do_sample": true, "max_length": 200}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"generated_text": "Traffic from the right goes first."}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let inference = HostedInference::new(
            endpoint(&server, "primary"),
            None,
            Some("secret".to_string()),
            Duration::from_secs(2),
        )
        .unwrap();

        // 2. Act
        let result = inference.generate("Explain priority").await;

        // 3. Assert
        assert_eq!(result.unwrap(), "Traffic from the right goes first.");
    }

    #[tokio::test]
    async fn test_custom_params_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/primary"))
            .and(body_partial_json(json!({
                "parameters": {"max_length": 64, "do_sample": false}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "Keep right."})))
            .expect(1)
            .mount(&server)
            .await;

        let inference = client(&server, false, Duration::from_secs(2)).with_params(GenerationParams {
            max_length: 64,
            do_sample: false,
            ..GenerationParams::default()
        });

        assert_eq!(inference.generate("lanes?").await.unwrap(), "Keep right.");
    }

    #[tokio::test]
    async fn test_warming_up_primary_uses_fallback_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/primary"))
            .respond_with(
                ResponseTemplate::new(503)
                    .set_body_json(json!({"error": "Model is currently loading"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/fallback"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "Check the road signs."})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server, true, Duration::from_secs(2)).generate("hi").await;
        assert_eq!(result.unwrap(), "Check the road signs.");
    }

    #[tokio::test]
    async fn test_server_error_without_fallback_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/primary"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let result = client(&server, false, Duration::from_secs(2)).generate("hi").await;
        match result {
            Err(AppError::UpstreamStatus { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("Internal Server Error"));
            }
            other => panic!("Expected UpstreamStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_slow_primary_times_out_then_fallback_fails_too() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/primary"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(5))
                    .set_body_json(json!({"text": "too late"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/fallback"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let started = std::time::Instant::now();
        let result = client(&server, true, Duration::from_millis(200)).generate("hi").await;

        assert!(matches!(result, Err(AppError::UpstreamStatus { status: 503, .. })));
        assert!(started.elapsed() < Duration::from_secs(3));
    }
}
