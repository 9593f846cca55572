//! Telemetry helpers for hosts embedding `chart-compose-rs`.
//!
//! Composers emit `tracing` events (`debug` per composed chart, `trace` per
//! builder decision, `warn` on rejected input). Nothing is printed unless the
//! host installs a subscriber, either its own or the one below.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter is read from `RUST_LOG` and falls back to `default_directive`.
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_tracing_with_default(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directive;
        false
    }
}

/// Same as [`init_tracing_with_default`] with an `info` fallback filter.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default("info")
}
