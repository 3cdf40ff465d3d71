//! Span export to stdout through OpenTelemetry, layered over the usual log output.

use crate::logging::LogOptions;
use opentelemetry::{KeyValue, global, trace::TracerProvider};
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
use opentelemetry_stdout::SpanExporter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Resource attributes and log options for the tracer.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Reported as `service.name`
    pub service_name: String,
    /// Reported as `service.version`
    pub service_version: String,
    /// Log filter and format
    pub log: LogOptions,
}

impl ObservabilityConfig {
    /// Configuration for `service_name` at this crate's version.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log: LogOptions::default(),
        }
    }

    /// Set log options.
    pub fn with_log(mut self, log: LogOptions) -> Self {
        self.log = log;
        self
    }

    fn resource(&self) -> Resource {
        Resource::builder()
            .with_service_name(self.service_name.clone())
            .with_attribute(KeyValue::new(
                "service.version",
                self.service_version.clone(),
            ))
            .build()
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Install the log subscriber with an extra layer that exports every span to stdout.
///
/// Send and delete spans (`#[instrument]` in the notify and admin crates)
/// show up with their delays as span durations.
pub fn init_observability(config: ObservabilityConfig) -> Result<(), Box<dyn std::error::Error>> {
    let provider = SdkTracerProvider::builder()
        .with_simple_exporter(SpanExporter::default())
        .with_resource(config.resource())
        .build();
    global::set_tracer_provider(provider.clone());

    let tracer = provider.tracer(config.service_name.clone());

    tracing_subscriber::registry()
        .with(config.log.env_filter()?)
        .with(config.log.fmt_layer())
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .try_init()?;
    Ok(())
}
