//! Error types for the typed pool

use thiserror::Error;

/// Errors surfaced by the pool.
///
/// Steady-state `get` and `put` have no error path: `get` always yields a
/// usable item and `put` always succeeds from the caller's perspective. The
/// only failure the pool reports is a fallible warm-up constructor refusing
/// to produce an item; a panicking steady-state constructor propagates to the
/// caller of `get` instead of being caught here.
#[derive(Error, Debug, Clone)]
pub enum PoolError {
    #[error("constructor failed to produce a usable item: {0}")]
    ConstructorFailure(String),
}

pub type PoolResult<T> = Result<T, PoolError>;
