//! In-memory sequence. Numbers restart at 1 with every process.

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{SequenceError, SequenceSource};

pub struct InMemorySequence {
    next: Mutex<u64>,
}

impl InMemorySequence {
    pub fn new() -> Self {
        Self::starting_from(1)
    }

    pub fn starting_from(value: u64) -> Self {
        Self {
            next: Mutex::new(value),
        }
    }
}

impl Default for InMemorySequence {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SequenceSource for InMemorySequence {
    async fn issue_next(&self) -> Result<u64, SequenceError> {
        let mut next = self.next.lock();
        let issued = *next;
        *next = issued.checked_add(1).ok_or(SequenceError::Overflow)?;
        Ok(issued)
    }

    async fn peek(&self) -> Result<u64, SequenceError> {
        Ok(*self.next.lock())
    }
}
