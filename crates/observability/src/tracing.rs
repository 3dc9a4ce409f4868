//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset: dependencies at `info`,
/// the operation and store layers at `debug` so denials and cascade
/// deletes are visible during development.
const DEFAULT_DIRECTIVES: &str = "info,forgehr_service=debug,forgehr_store=debug";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    // JSON lines with flattened fields so actor/tenant ids land as
    // top-level keys for log pipelines.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn repeated_init_is_a_no_op() {
        super::init();
        super::init();
    }
}
