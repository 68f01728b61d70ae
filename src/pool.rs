//! Core typed pool implementation

use crate::config::PoolConfig;
use crate::errors::{PoolError, PoolResult};
use crate::expiry::{ExpiryPolicy, IdleEntry};
use crate::stats::{PoolStats, StatsExporter, StatsTracker};

use crossbeam::queue::ArrayQueue;
use std::collections::HashMap;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::Ordering;

/// A pooled item that automatically returns to its pool when dropped
pub struct PooledItem<'a, T: Send> {
    value: Option<T>,
    pool: &'a TypedPool<T>,
}

impl<'a, T: Send> PooledItem<'a, T> {
    fn new(value: T, pool: &'a TypedPool<T>) -> Self {
        Self {
            value: Some(value),
            pool,
        }
    }

    /// Take ownership of the inner value without returning it to the pool.
    ///
    /// The item leaves pool circulation; a later [`TypedPool::put`] can hand
    /// it back.
    pub fn detach(mut self) -> T {
        self.pool.stats.detached.fetch_add(1, Ordering::Relaxed);
        self.value.take().expect("value already detached")
    }
}

impl<T: Send> Deref for PooledItem<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value.as_ref().expect("value already detached")
    }
}

impl<T: Send> DerefMut for PooledItem<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value.as_mut().expect("value already detached")
    }
}

impl<T: Send> Drop for PooledItem<'_, T> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            self.pool.release(value);
        }
    }
}

impl<T: Send + fmt::Debug> fmt::Debug for PooledItem<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PooledItem").field(&self.value).finish()
    }
}

/// Thread-safe, type-parameterized object pool that constructs on demand.
///
/// The pool hands out a previously-returned item when it has one, and invokes
/// the constructor when it does not. Reused items keep whatever state their
/// last holder left in them; clearing before reuse is the caller's job.
/// Idle retention is bounded: items returned to a full idle set are dropped,
/// and an optional idle timeout expires items that sit unused too long, so
/// callers must never rely on a returned item surviving.
///
/// # Examples
///
/// ```
/// use typedpool::TypedPool;
///
/// let pool = TypedPool::new(|| Vec::<u8>::with_capacity(1024));
///
/// {
///     let mut buf = pool.get();
///     buf.clear();
///     buf.extend_from_slice(b"hello");
/// } // returned to the pool here
///
/// assert_eq!(pool.idle_count(), 1);
/// ```
pub struct TypedPool<T: Send> {
    idle: ArrayQueue<IdleEntry<T>>,
    constructor: Box<dyn Fn() -> T + Send + Sync>,
    policy: ExpiryPolicy,
    stats: StatsTracker,
}

impl<T: Send> TypedPool<T> {
    /// Create a pool with the default configuration.
    ///
    /// The constructor must produce a valid `T` every time it is called and
    /// must be safe to invoke from multiple threads at once; a panicking
    /// constructor propagates to the caller of [`get`](Self::get).
    pub fn new<F>(constructor: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::with_config(constructor, PoolConfig::default())
    }

    /// Create a pool with an explicit configuration.
    ///
    /// Pre-populates the idle set when `warmup_size` is configured.
    pub fn with_config<F>(constructor: F, config: PoolConfig) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let policy = match config.idle_timeout {
            Some(timeout) => ExpiryPolicy::IdleTimeout(timeout),
            None => ExpiryPolicy::None,
        };

        // ArrayQueue rejects a zero capacity
        let pool = Self {
            idle: ArrayQueue::new(config.max_idle.max(1)),
            constructor: Box::new(constructor),
            policy,
            stats: StatsTracker::new(),
        };

        if let Some(count) = config.warmup_size {
            pool.warmup(count);
        }

        pool
    }

    /// Get an item, reusing an idle one or constructing a fresh one.
    ///
    /// No ordering among idle items is guaranteed. The item stays out of the
    /// idle set for as long as the guard is held; dropping the guard returns
    /// it.
    pub fn get(&self) -> PooledItem<'_, T> {
        self.stats.retrieved.fetch_add(1, Ordering::Relaxed);

        loop {
            match self.idle.pop() {
                Some(entry) => {
                    if self.policy.is_expired(entry.returned_at) {
                        self.stats.expired.fetch_add(1, Ordering::Relaxed);
                        continue;
                    }
                    return PooledItem::new(entry.value, self);
                }
                None => {
                    let value = (self.constructor)();
                    self.stats.created.fetch_add(1, Ordering::Relaxed);
                    return PooledItem::new(value, self);
                }
            }
        }
    }

    /// Get an idle item without constructing; `None` when the idle set is empty.
    pub fn try_get(&self) -> Option<PooledItem<'_, T>> {
        loop {
            let entry = self.idle.pop()?;
            if self.policy.is_expired(entry.returned_at) {
                self.stats.expired.fetch_add(1, Ordering::Relaxed);
                continue;
            }
            self.stats.retrieved.fetch_add(1, Ordering::Relaxed);
            return Some(PooledItem::new(entry.value, self));
        }
    }

    /// Return an item to the idle set.
    ///
    /// The item's content is taken as-is; the pool never clears it, so the
    /// next holder sees whatever state was left behind. When the idle set is
    /// at capacity the item is dropped instead of retained.
    pub fn put(&self, value: T) {
        // an explicit put re-inserts an item the flight accounting already
        // settled at detach time, unlike a guard drop
        self.stats.reinserted.fetch_add(1, Ordering::Relaxed);
        self.release(value);
    }

    /// Pre-populate the idle set with up to `count` freshly constructed items.
    ///
    /// Stops early when the idle set reaches capacity.
    pub fn warmup(&self, count: usize) {
        for _ in 0..count {
            let value = (self.constructor)();
            self.stats.created.fetch_add(1, Ordering::Relaxed);
            if self.idle.push(IdleEntry::new(value)).is_err() {
                break;
            }
        }
    }

    /// Pre-populate from a fallible source, such as a connection factory.
    ///
    /// The first construction failure aborts the warmup and surfaces as
    /// [`PoolError::ConstructorFailure`]; items constructed before the
    /// failure stay in the idle set.
    pub fn warmup_with<F, E>(&self, count: usize, mut constructor: F) -> PoolResult<()>
    where
        F: FnMut() -> Result<T, E>,
        E: fmt::Display,
    {
        for _ in 0..count {
            let value =
                constructor().map_err(|e| PoolError::ConstructorFailure(e.to_string()))?;
            self.stats.created.fetch_add(1, Ordering::Relaxed);
            if self.idle.push(IdleEntry::new(value)).is_err() {
                break;
            }
        }
        Ok(())
    }

    /// Drop idle items that have outlived the configured idle timeout.
    ///
    /// A no-op for pools without an idle timeout. Intended for owners that
    /// want eager reclamation on a schedule; expired items are otherwise
    /// dropped lazily on [`get`](Self::get).
    pub fn trim(&self) {
        let mut keep = Vec::new();

        while let Some(entry) = self.idle.pop() {
            if self.policy.is_expired(entry.returned_at) {
                self.stats.expired.fetch_add(1, Ordering::Relaxed);
            } else {
                keep.push(entry);
            }
        }

        for entry in keep {
            if self.idle.push(entry).is_err() {
                // a concurrent put refilled the queue; the surplus item is dropped
                self.stats.discarded.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Number of items currently idle.
    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }

    /// Snapshot of the pool's counters.
    pub fn stats(&self) -> PoolStats {
        self.stats.snapshot(self.idle.len())
    }

    /// Export the stats snapshot as key/value strings.
    pub fn export_stats(&self) -> HashMap<String, String> {
        self.stats().export()
    }

    /// Export the stats snapshot in Prometheus exposition format.
    pub fn export_stats_prometheus(
        &self,
        pool_name: &str,
        tags: Option<&HashMap<String, String>>,
    ) -> String {
        StatsExporter::export_prometheus(&self.stats(), pool_name, tags)
    }

    fn release(&self, value: T) {
        match self.idle.push(IdleEntry::new(value)) {
            Ok(()) => {
                self.stats.returned.fetch_add(1, Ordering::Relaxed);
            }
            Err(_entry) => {
                // idle set at capacity; the item is dropped here
                self.stats.discarded.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

impl<T: Send + fmt::Debug> fmt::Debug for TypedPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedPool")
            .field("idle", &self.idle.len())
            .field("capacity", &self.idle.capacity())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
