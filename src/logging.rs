use error_stack::{Result, ResultExt};
use thiserror::Error;
use tracing::{level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer, Registry};

use crate::config::{Logging, LoggingStyle};

#[derive(Debug, Error)]
#[error("Failed to initialize tracing")]
pub struct TracingInitError;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

pub fn init(config: &Logging) -> Result<(), TracingInitError> {
    let targets = if config.targets.is_empty() {
        std::env::var("RUST_LOG").unwrap_or_default()
    } else {
        config.targets.clone()
    };

    let registry = Registry::default()
        .with(fmt_layer(config.style).with_filter(make_env_filter(&targets)))
        .with(tracing_error::ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)
        .change_context(TracingInitError)
        .attach_printable("already initialized tracing")?;

    if std::env::var("RUST_LOG").is_ok() && !config.targets.is_empty() {
        warn!("Both `RUST_LOG` and `QUILL_LOGGING_TARGETS` are set, using `QUILL_LOGGING_TARGETS`");
    }

    Ok(())
}

fn fmt_layer(style: LoggingStyle) -> BoxedLayer {
    let layer = tracing_subscriber::fmt::layer();
    match style {
        LoggingStyle::Compact => layer.compact().boxed(),
        LoggingStyle::Full => layer.boxed(),
        LoggingStyle::Pretty => layer.pretty().boxed(),
        LoggingStyle::JSON => layer.json().boxed(),
    }
}

fn make_env_filter(targets: &str) -> EnvFilter {
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(targets)
}
