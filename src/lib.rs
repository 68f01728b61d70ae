//! # typedpool
//!
//! Thread-safe, type-parameterized object pool for reusing expensive-to-build,
//! short-lived values (buffers, byte slices) across many call sites without
//! repeated allocation.
//!
//! ## Features
//!
//! - Lock-free idle set, non-blocking `get`/`put` from any number of threads
//! - Construct-on-demand via a caller-supplied zero-argument constructor
//! - Automatic return of items via RAII (Drop trait), with explicit
//!   `detach`/`put` for callers that need to move items around
//! - Bounded idle retention: capacity cap plus optional idle timeout, so a
//!   burst of returns never becomes a permanent memory hold
//! - Pool warm-up/pre-population, including from fallible constructors
//! - Counter snapshots with HashMap and Prometheus-format export
//!
//! Reused items are handed out exactly as their last holder left them; the
//! pool never clears state. Callers that need a clean item reset it after
//! `get`, not before returning.
//!
//! ## Quick Start
//!
//! ```rust
//! use typedpool::TypedPool;
//!
//! let pool = TypedPool::new(|| vec![0u8; 1024]);
//! {
//!     let buf = pool.get();
//!     assert_eq!(buf.len(), 1024);
//!     // buffer automatically returned when `buf` goes out of scope
//! }
//! assert_eq!(pool.idle_count(), 1);
//! ```

mod pool;
mod config;
mod stats;
mod expiry;
mod errors;

pub use pool::{TypedPool, PooledItem};
pub use config::PoolConfig;
pub use stats::{PoolStats, StatsExporter};
pub use expiry::ExpiryPolicy;
pub use errors::{PoolError, PoolResult};
