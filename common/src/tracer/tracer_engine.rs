use tracing_subscriber::{EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt};

pub struct TracerOptions {
    /// Level used when `RUST_LOG` is not set.
    pub default_level: LevelFilter,
    /// Emit ANSI colour codes.
    pub ansi: bool,
}

impl Default for TracerOptions {
    fn default() -> Self {
        Self {
            default_level: LevelFilter::INFO,
            ansi: true,
        }
    }
}

/// This object initialises the stderr tracer, given a TracerOptions struct.
pub struct TracerEngine {
    service_name: String,
}

impl TracerEngine {
    /// Initialises the stderr tracer for the crate
    /// #Arguments
    /// * `options` - The caller-specified instance of TracerOptions.
    /// * `service_name` - The name of the binary, recorded in the startup event.
    /// #Returns
    /// An instance of TracerEngine
    pub fn new(options: TracerOptions, service_name: &str) -> Self {
        let stderr_tracer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(options.ansi);

        // This filter is applied to the stderr tracer
        let log_filter = EnvFilter::builder()
            .with_default_directive(options.default_level.into())
            .from_env_lossy();

        let subscriber =
            tracing_subscriber::Registry::default().with(stderr_tracer.with_filter(log_filter));

        // A second call only happens in tests, where keeping the first subscriber is fine.
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            tracing::warn!("{e}");
        }

        Self {
            service_name: service_name.to_owned(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialisation_does_not_panic() {
        let first = TracerEngine::new(TracerOptions::default(), "first");
        let second = TracerEngine::new(
            TracerOptions {
                default_level: LevelFilter::DEBUG,
                ansi: false,
            },
            "second",
        );
        assert_eq!(first.service_name(), "first");
        assert_eq!(second.service_name(), "second");
    }
}
