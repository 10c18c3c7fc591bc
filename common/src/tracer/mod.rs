mod tracer_engine;

pub use tracer_engine::{TracerEngine, TracerOptions};

/// Should be called at the start of each binary.
/// Installs the stderr tracer and emits a debug event from the caller's module
/// so the binary name and module path of the component appear in the log.
#[macro_export]
macro_rules! init_tracer {
    ($options:expr) => {{
        let tracer = $crate::tracer::TracerEngine::new($options, env!("CARGO_BIN_NAME"));
        tracing::debug!(
            service = tracer.service_name(),
            module = module_path!(),
            "Tracer initialised"
        );
        tracer
    }};
}
