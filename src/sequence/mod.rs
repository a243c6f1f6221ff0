//! Sequence issuer - hands out contract numbers.
//!
//! Every issued number is unique and strictly greater than the ones before it.
//! Implementations own their critical section, so callers only need a shared
//! `Arc<dyn SequenceSource>`:
//! - `FileSequence` - durable, backed by a plain-text counter file
//! - `InMemorySequence` - process-local, for tests and throwaway deployments

pub mod file;
pub mod memory;

pub use file::FileSequence;
pub use memory::InMemorySequence;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while issuing a number.
#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("counter store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("counter store '{path}' holds a non-numeric value: {content:?}")]
    Corrupt { path: String, content: String },
    #[error("counter overflowed")]
    Overflow,
}

/// Source of unique, strictly increasing contract numbers.
#[async_trait]
pub trait SequenceSource: Send + Sync {
    /// Issue the next number. The first number issued by a fresh store is 1.
    async fn issue_next(&self) -> Result<u64, SequenceError>;

    /// The number the next call to `issue_next` would return. Does not mutate the store.
    async fn peek(&self) -> Result<u64, SequenceError>;
}
