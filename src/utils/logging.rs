// ============================================================================
// Logging Bootstrap
// Installs a tracing subscriber for binaries embedding the library
// ============================================================================

use tracing::Level;

/// Install a global `fmt` subscriber printing events at DEBUG and above.
///
/// The library itself never installs a subscriber; call this from a binary
/// or demo to see rejected operations. Returns `false` if a global
/// subscriber was already set, in which case nothing changes.
#[must_use]
pub fn init_logging() -> bool {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        assert!(init_logging());
        assert!(!init_logging());
    }
}
