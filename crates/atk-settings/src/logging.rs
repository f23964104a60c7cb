//! Subscriber setup driven by the `logging` section of the filter settings
//!
//! Console output is pretty-printed; the optional JSON file is rotated daily
//! through `tracing-appender`. `RUST_LOG` overrides the configured filter.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::settings::{FilterSettings, LoggingSettings};

const DEFAULT_FILTER: &str =
    "info,atk_core=debug,atk_table_filters=debug,atk_action_sheets=debug,atk_settings=debug";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory for the JSON log files
    pub log_dir: PathBuf,
    pub json_logs: bool,
    pub console_logs: bool,
    pub filter: String,
}

impl LoggingConfig {
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        Self {
            log_dir: log_directory(),
            json_logs: settings.json_logs,
            console_logs: settings.console_logs,
            filter: settings
                .default_filter
                .clone()
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
        }
    }

    /// Console only, everything at debug
    pub fn testing() -> Self {
        Self {
            log_dir: std::env::temp_dir().join("atk-tests"),
            json_logs: false,
            console_logs: true,
            filter: "debug".to_string(),
        }
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the JSON file writer when dropped; hold it for
/// the life of the process. Fails when a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let mut layers = Vec::new();
    let mut guard = None;

    if config.console_logs {
        layers.push(
            fmt::layer()
                .with_target(true)
                .pretty()
                .with_filter(env_filter.clone())
                .boxed(),
        );
    }

    if config.json_logs {
        std::fs::create_dir_all(&config.log_dir)
            .with_context(|| format!("Failed to create log directory: {:?}", config.log_dir))?;
        let appender = tracing_appender::rolling::daily(&config.log_dir, "atk.log");
        let (writer, worker_guard) = tracing_appender::non_blocking(appender);
        guard = Some(worker_guard);

        layers.push(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(env_filter)
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("Logging was already initialized")?;

    tracing::info!(
        log_dir = %config.log_dir.display(),
        json = config.json_logs,
        console = config.console_logs,
        "Logging initialized"
    );
    Ok(guard)
}

/// Initialize logging from the `logging` section of loaded settings
pub fn init_from_settings(settings: &FilterSettings) -> anyhow::Result<Option<WorkerGuard>> {
    init(&LoggingConfig::from_settings(&settings.logging))
}

pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("atk")
        .join("logs")
}
