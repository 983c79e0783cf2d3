//! Opt-in log output for hosts without their own subscriber.
//!
//! The registry only emits `tracing` events under the `alias_registry`
//! target: `debug` for metadata scans and rejected types, `trace` for cache
//! hits. Nothing is printed unless a subscriber is installed, either by the
//! host or by [`init_tracing`].

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Crate-scoped filter directives, e.g. `debug` or `alias_registry=trace`.
/// Takes precedence over `RUST_LOG`.
pub const LOG_ENV: &str = "ALIAS_REGISTRY_LOG";

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber if logging was requested.
///
/// Reads [`LOG_ENV`] first, then `RUST_LOG`; with neither set this is a
/// no-op. Repeated calls do nothing, and a subscriber the host already
/// installed is left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*};

        let Some(filter) = filter_from_env() else {
            return;
        };
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
    });
}

fn filter_from_env() -> Option<EnvFilter> {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        return scoped_filter(&directives);
    }
    std::env::var("RUST_LOG")
        .is_ok()
        .then(EnvFilter::from_default_env)
}

/// Build a filter from [`LOG_ENV`] directives.
///
/// A bare level applies to this crate only; anything else is passed through.
fn scoped_filter(directives: &str) -> Option<EnvFilter> {
    let directives = directives.trim();
    if directives.is_empty() {
        return None;
    }
    let is_bare_level = matches!(
        directives.to_ascii_lowercase().as_str(),
        "error" | "warn" | "info" | "debug" | "trace"
    );
    let scoped = if is_bare_level {
        format!("{}={directives}", env!("CARGO_CRATE_NAME"))
    } else {
        directives.to_owned()
    };
    EnvFilter::try_new(scoped).ok()
}
