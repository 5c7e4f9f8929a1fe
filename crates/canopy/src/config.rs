//! Store configuration

/// Configuration for a [`Store`](crate::Store).
///
/// Controls how deeply listeners may re-enter the store with writes of
/// their own. By default there is no limit, so any cascade of writes runs
/// to completion (bounded only by the thread's stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreConfig {
    /// Maximum number of dispatches that may be in progress at once, or
    /// `None` for no limit.
    ///
    /// A top-level `set` runs at depth 1; a `set` issued from one of its
    /// listeners runs at depth 2, and so on. A configured limit is always
    /// at least 1 so top-level writes are never refused.
    pub max_dispatch_depth: Option<usize>,
}

impl StoreConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with a dispatch depth limit.
    ///
    /// A limit of 0 is raised to 1.
    pub fn with_max_dispatch_depth(max_depth: usize) -> Self {
        Self {
            max_dispatch_depth: Some(max_depth.max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(StoreConfig::new().max_dispatch_depth, None);
    }

    #[test]
    fn test_custom_depth() {
        assert_eq!(
            StoreConfig::with_max_dispatch_depth(3).max_dispatch_depth,
            Some(3)
        );
    }

    #[test]
    fn test_zero_depth_clamped_to_one() {
        assert_eq!(
            StoreConfig::with_max_dispatch_depth(0).max_dispatch_depth,
            Some(1)
        );
    }
}
