//! Opt-in tracing setup.
//!
//! The crate emits `tracing` events (degenerate-input warnings,
//! alignment diagnostics) but never installs a subscriber on its own;
//! host applications wire their own, or enable the `telemetry` feature
//! and call [`init_default_tracing`] from binaries and demos.

/// Installs a compact stderr subscriber honoring `RUST_LOG`, at `info`
/// level by default.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
