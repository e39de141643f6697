//! Tracing setup for hosts and tests.
//!
//! Resolution emits `debug` events per outcome and `trace` events per
//! inspected node under the `lode_refactor` target. Hosts call
//! [`init_tracing`] once; tests install [`log_subscriber`] scoped to a
//! closure.

use std::sync::Once;

use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

/// Environment variable read for filter directives before `RUST_LOG`.
pub const LOG_ENV: &str = "LODE_LOG";

static TRACING_INIT: Once = Once::new();

/// Plain-text subscriber filtered by `filter`, writing through `writer`.
pub fn log_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    Registry::default().with(filter).with(
        fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_ansi(false)
            .with_writer(writer),
    )
}

/// Install a global stderr subscriber.
///
/// Safe to call multiple times. Does nothing unless `LODE_LOG` or
/// `RUST_LOG` is set, e.g. `LODE_LOG=lode_refactor=trace`. A subscriber
/// the host already installed is left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if let Some(filter) = filter_from_env() {
            let installed =
                tracing::subscriber::set_global_default(log_subscriber(filter, std::io::stderr));
            if installed.is_err() {
                tracing::debug!("global subscriber already set");
            }
        }
    });
}

/// `LODE_LOG` wins over `RUST_LOG`; `None` when neither is set.
fn filter_from_env() -> Option<EnvFilter> {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        return Some(EnvFilter::builder().parse_lossy(directives));
    }
    std::env::var("RUST_LOG")
        .is_ok()
        .then(EnvFilter::from_default_env)
}
