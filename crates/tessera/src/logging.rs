//! Tracing subscriber setup for the binary.

use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// How log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogOptions {
    /// Default to `debug` instead of `info` when `RUST_LOG` is unset
    pub verbose: bool,
    /// One JSON object per line
    pub json: bool,
}

impl LogOptions {
    /// Filter directive used when `RUST_LOG` is unset.
    pub fn default_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// `RUST_LOG` if set, otherwise [`Self::default_directive`].
    pub(crate) fn env_filter(&self) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(self.default_directive()))
    }

    /// Plain or JSON fmt layer for any registry-backed subscriber.
    pub(crate) fn fmt_layer<S>(&self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        if self.json {
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer().with_target(false).boxed()
        }
    }
}

/// Install a global fmt subscriber. `RUST_LOG` wins over `options.verbose`.
pub fn init_logging(options: LogOptions) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(options.env_filter()?)
        .with(options.fmt_layer())
        .try_init()?;
    Ok(())
}
