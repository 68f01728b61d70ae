//! Idle-item expiry for bounded pool retention

use std::time::{Duration, Instant};

/// Expiry policy applied to idle pool items
///
/// Rust has no tracing collector to reclaim idle items behind the pool's
/// back, so retention is bounded explicitly: the idle set has a fixed
/// capacity, and this policy can additionally expire items that sit unused
/// too long.
///
/// # Examples
///
/// ```
/// use typedpool::{PoolConfig, TypedPool};
/// use std::time::Duration;
///
/// let config = PoolConfig::new().with_idle_timeout(Duration::from_secs(60));
/// let pool = TypedPool::with_config(|| Vec::<u8>::new(), config);
/// // idle buffers older than a minute are dropped on get() or trim()
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub enum ExpiryPolicy {
    /// Idle items never expire; only the capacity cap bounds retention
    #[default]
    None,

    /// Items expire after sitting idle for the given duration
    IdleTimeout(Duration),
}

impl ExpiryPolicy {
    pub(crate) fn is_expired(&self, returned_at: Instant) -> bool {
        match self {
            ExpiryPolicy::None => false,
            ExpiryPolicy::IdleTimeout(timeout) => returned_at.elapsed() > *timeout,
        }
    }
}

/// An idle item together with the moment it entered the idle set
pub(crate) struct IdleEntry<T> {
    pub value: T,
    pub returned_at: Instant,
}

impl<T> IdleEntry<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            returned_at: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_policy_never_expires() {
        let entry = IdleEntry::new(1u8);
        assert!(!ExpiryPolicy::None.is_expired(entry.returned_at));
    }

    #[test]
    fn idle_timeout_expires_after_elapsed() {
        let policy = ExpiryPolicy::IdleTimeout(Duration::from_millis(5));
        let entry = IdleEntry::new(1u8);

        assert!(!policy.is_expired(entry.returned_at));
        std::thread::sleep(Duration::from_millis(20));
        assert!(policy.is_expired(entry.returned_at));
    }
}
