//! Pool configuration options

use std::time::Duration;

/// Configuration for typed pool retention behavior
///
/// # Examples
///
/// ```
/// use typedpool::PoolConfig;
/// use std::time::Duration;
///
/// let config = PoolConfig::new()
///     .with_max_idle(32)
///     .with_idle_timeout(Duration::from_secs(60))
///     .with_warmup(8);
///
/// assert_eq!(config.max_idle, 32);
/// assert_eq!(config.warmup_size, Some(8));
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum number of idle items retained; returns beyond this are dropped.
    /// A value of 0 is treated as 1: the pool always keeps room for a single
    /// idle item.
    pub max_idle: usize,

    /// How long an item may sit idle before it is dropped instead of reused
    pub idle_timeout: Option<Duration>,

    /// Number of items to pre-construct when the pool is created
    pub warmup_size: Option<usize>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle: 64,
            idle_timeout: None,
            warmup_size: None,
        }
    }
}

impl PoolConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the idle set capacity
    ///
    /// A capacity of 0 is treated as 1; a pool that retains nothing is
    /// better expressed by not pooling.
    ///
    /// # Examples
    ///
    /// ```
    /// use typedpool::PoolConfig;
    ///
    /// let config = PoolConfig::new().with_max_idle(16);
    /// assert_eq!(config.max_idle, 16);
    /// ```
    pub fn with_max_idle(mut self, max_idle: usize) -> Self {
        self.max_idle = max_idle;
        self
    }

    /// Set the idle timeout after which unused items are dropped
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }

    /// Set the warm-up size applied at pool construction
    pub fn with_warmup(mut self, size: usize) -> Self {
        self.warmup_size = Some(size);
        self
    }
}
