//! Tracing initialization utilities.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the given default filter.
///
/// The filter can be overridden by the `RUST_LOG` environment variable.
/// Output goes to stderr so binaries can keep stdout for their results.
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one stays in place.
///
/// # Example
///
/// ```rust
/// use zego_token::init_tracing;
///
/// // Debug for the token service, info for everything else
/// init_tracing("zego_token=debug,info");
/// ```
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        // Other tests may have raced us to the first install; only the
        // second call's outcome is deterministic.
        init_tracing("info");
        assert!(!init_tracing("debug"));
    }
}
