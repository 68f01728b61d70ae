//! Counter collection and export for typed pools

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Snapshot of a pool's counters
///
/// # Examples
///
/// ```
/// use typedpool::TypedPool;
///
/// let pool = TypedPool::new(|| Vec::<u8>::with_capacity(64));
///
/// drop(pool.get());
/// let stats = pool.stats();
/// assert_eq!(stats.created, 1);
/// assert_eq!(stats.retrieved, 1);
/// assert_eq!(stats.returned, 1);
/// assert_eq!(stats.idle_items, 1);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PoolStats {
    /// Constructor invocations (fresh items)
    pub created: usize,

    /// Items handed out, fresh or reused
    pub retrieved: usize,

    /// Items returned and retained in the idle set
    pub returned: usize,

    /// Items returned but dropped because the idle set was full
    pub discarded: usize,

    /// Idle items dropped by the expiry policy
    pub expired: usize,

    /// Items taken out of pool circulation via detach
    pub detached: usize,

    /// Items handed back through an explicit put rather than a guard drop
    pub reinserted: usize,

    /// Current idle set size
    pub idle_items: usize,

    /// Items currently held by callers
    pub in_flight: usize,
}

impl PoolStats {
    /// Export the snapshot as a HashMap
    pub fn export(&self) -> HashMap<String, String> {
        let mut stats = HashMap::new();
        stats.insert("created".to_string(), self.created.to_string());
        stats.insert("retrieved".to_string(), self.retrieved.to_string());
        stats.insert("returned".to_string(), self.returned.to_string());
        stats.insert("discarded".to_string(), self.discarded.to_string());
        stats.insert("expired".to_string(), self.expired.to_string());
        stats.insert("detached".to_string(), self.detached.to_string());
        stats.insert("reinserted".to_string(), self.reinserted.to_string());
        stats.insert("idle_items".to_string(), self.idle_items.to_string());
        stats.insert("in_flight".to_string(), self.in_flight.to_string());
        stats
    }
}

/// Stats exporter for Prometheus format
pub struct StatsExporter;

impl StatsExporter {
    /// Export a stats snapshot in Prometheus exposition format
    ///
    /// # Examples
    ///
    /// ```
    /// use typedpool::TypedPool;
    /// use std::collections::HashMap;
    ///
    /// let pool = TypedPool::new(|| Vec::<u8>::new());
    ///
    /// let mut tags = HashMap::new();
    /// tags.insert("service".to_string(), "logger".to_string());
    ///
    /// let output = pool.export_stats_prometheus("log_buffers", Some(&tags));
    /// assert!(output.contains("typedpool_items_idle"));
    /// assert!(output.contains("service=\"logger\""));
    /// ```
    pub fn export_prometheus(
        stats: &PoolStats,
        pool_name: &str,
        tags: Option<&HashMap<String, String>>,
    ) -> String {
        let mut output = String::new();
        let labels = Self::format_labels(pool_name, tags);

        // Gauge metrics
        output.push_str("# HELP typedpool_items_idle Current idle items\n");
        output.push_str("# TYPE typedpool_items_idle gauge\n");
        output.push_str(&format!("typedpool_items_idle{{{}}} {}\n", labels, stats.idle_items));

        output.push_str("# HELP typedpool_items_in_flight Items currently held by callers\n");
        output.push_str("# TYPE typedpool_items_in_flight gauge\n");
        output.push_str(&format!("typedpool_items_in_flight{{{}}} {}\n", labels, stats.in_flight));

        // Counter metrics
        output.push_str("# HELP typedpool_items_created_total Constructor invocations\n");
        output.push_str("# TYPE typedpool_items_created_total counter\n");
        output.push_str(&format!("typedpool_items_created_total{{{}}} {}\n", labels, stats.created));

        output.push_str("# HELP typedpool_items_retrieved_total Items handed out\n");
        output.push_str("# TYPE typedpool_items_retrieved_total counter\n");
        output.push_str(&format!("typedpool_items_retrieved_total{{{}}} {}\n", labels, stats.retrieved));

        output.push_str("# HELP typedpool_items_returned_total Items returned and retained\n");
        output.push_str("# TYPE typedpool_items_returned_total counter\n");
        output.push_str(&format!("typedpool_items_returned_total{{{}}} {}\n", labels, stats.returned));

        output.push_str("# HELP typedpool_items_discarded_total Returns dropped at capacity\n");
        output.push_str("# TYPE typedpool_items_discarded_total counter\n");
        output.push_str(&format!("typedpool_items_discarded_total{{{}}} {}\n", labels, stats.discarded));

        output.push_str("# HELP typedpool_items_expired_total Idle items dropped by expiry\n");
        output.push_str("# TYPE typedpool_items_expired_total counter\n");
        output.push_str(&format!("typedpool_items_expired_total{{{}}} {}\n", labels, stats.expired));

        output
    }

    fn format_labels(pool_name: &str, tags: Option<&HashMap<String, String>>) -> String {
        let mut labels = vec![format!("pool=\"{}\"", pool_name)];

        if let Some(tags) = tags {
            for (key, value) in tags {
                labels.push(format!("{}=\"{}\"", key, value));
            }
        }

        labels.join(",")
    }
}

/// Internal counter tracker
pub(crate) struct StatsTracker {
    pub created: AtomicUsize,
    pub retrieved: AtomicUsize,
    pub returned: AtomicUsize,
    pub discarded: AtomicUsize,
    pub expired: AtomicUsize,
    pub detached: AtomicUsize,
    pub reinserted: AtomicUsize,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            created: AtomicUsize::new(0),
            retrieved: AtomicUsize::new(0),
            returned: AtomicUsize::new(0),
            discarded: AtomicUsize::new(0),
            expired: AtomicUsize::new(0),
            detached: AtomicUsize::new(0),
            reinserted: AtomicUsize::new(0),
        }
    }

    pub fn snapshot(&self, idle_items: usize) -> PoolStats {
        let retrieved = self.retrieved.load(Ordering::Relaxed);
        let returned = self.returned.load(Ordering::Relaxed);
        let discarded = self.discarded.load(Ordering::Relaxed);
        let detached = self.detached.load(Ordering::Relaxed);
        let reinserted = self.reinserted.load(Ordering::Relaxed);

        // every explicit put shows up once in returned-or-discarded and once
        // in reinserted, so only guard-drop returns count against the flight
        let guard_returns = (returned + discarded).saturating_sub(reinserted);

        PoolStats {
            created: self.created.load(Ordering::Relaxed),
            retrieved,
            returned,
            discarded,
            expired: self.expired.load(Ordering::Relaxed),
            detached,
            reinserted,
            idle_items,
            in_flight: retrieved.saturating_sub(guard_returns + detached),
        }
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PoolStats {
        PoolStats {
            created: 3,
            retrieved: 10,
            returned: 7,
            discarded: 1,
            expired: 2,
            detached: 0,
            reinserted: 0,
            idle_items: 4,
            in_flight: 2,
        }
    }

    #[test]
    fn export_contains_every_counter() {
        let map = sample().export();
        assert_eq!(map.get("created").map(String::as_str), Some("3"));
        assert_eq!(map.get("retrieved").map(String::as_str), Some("10"));
        assert_eq!(map.get("in_flight").map(String::as_str), Some("2"));
        assert_eq!(map.len(), 9);
    }

    #[test]
    fn prometheus_export_has_labels_and_series() {
        let mut tags = HashMap::new();
        tags.insert("env".to_string(), "test".to_string());

        let output = StatsExporter::export_prometheus(&sample(), "buffers", Some(&tags));
        assert!(output.contains("pool=\"buffers\""));
        assert!(output.contains("env=\"test\""));
        assert!(output.contains("typedpool_items_created_total"));
        assert!(output.contains("typedpool_items_expired_total"));
    }

    #[test]
    fn snapshot_derives_in_flight_from_counters() {
        let tracker = StatsTracker::new();
        tracker.retrieved.store(5, Ordering::Relaxed);
        tracker.returned.store(2, Ordering::Relaxed);
        tracker.discarded.store(1, Ordering::Relaxed);

        let stats = tracker.snapshot(2);
        assert_eq!(stats.in_flight, 2);
        assert_eq!(stats.idle_items, 2);
    }

    #[test]
    fn snapshot_does_not_charge_explicit_puts_against_flight() {
        let tracker = StatsTracker::new();
        tracker.retrieved.store(2, Ordering::Relaxed);
        tracker.detached.store(1, Ordering::Relaxed);
        tracker.returned.store(1, Ordering::Relaxed);
        tracker.reinserted.store(1, Ordering::Relaxed);

        // one item detached and put back explicitly, one still held
        let stats = tracker.snapshot(1);
        assert_eq!(stats.in_flight, 1);
    }
}
