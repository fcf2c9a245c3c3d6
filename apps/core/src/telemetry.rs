//! Tracing subscriber setup.

use tracing::{info, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::LogFormat;
use crate::error::AppError;

const APP_NAME: &str = "theorycoach";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Builds a subscriber that writes `format` lines to `writer`.
pub fn build_subscriber<W>(
    format: LogFormat,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let registry = Registry::default().with(filter);
    match format {
        LogFormat::Pretty => {
            Box::new(registry.with(fmt::layer().with_target(false).with_writer(writer)))
        }
        LogFormat::Json => Box::new(
            registry
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(APP_NAME.to_string(), writer)),
        ),
    }
}

/// Installs the global subscriber on stdout. `RUST_LOG` overrides the default
/// `info` level.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(format: LogFormat) -> Result<(), AppError> {
    build_subscriber(format, env_filter(), std::io::stdout)
        .try_init()
        .map_err(|e| AppError::Config(format!("tracing already initialised: {}", e)))?;
    info!(%format, "Tracing initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture(format: LogFormat) -> String {
        let sink = Capture::default();
        let writer = sink.clone();
        let subscriber = build_subscriber(format, EnvFilter::new("info"), move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            info!(lesson = "roundabouts", "Captured event");
            tracing::debug!("Filtered out");
        });
        sink.text()
    }

    #[test]
    fn test_json_lines_are_bunyan_records() {
        let output = capture(LogFormat::Json);
        let record: serde_json::Value = output
            .lines()
            .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
            .find(|v| v["msg"] == "Captured event")
            .expect("event was written");

        assert_eq!(record["name"], APP_NAME);
        assert_eq!(record["lesson"], "roundabouts");
        assert!(!output.contains("Filtered out"));
    }

    #[test]
    fn test_pretty_output_respects_filter() {
        let output = capture(LogFormat::Pretty);
        assert!(output.contains("Captured event"));
        assert!(!output.contains("Filtered out"));
    }
}
