//! File-backed sequence.
//!
//! The counter file holds the decimal digits of the next number to issue and
//! nothing else. Each issuance rewrites it through a sibling temp file that is
//! synced and renamed over the original, so a crash never leaves a half-written
//! counter behind.
//!
//! Only one process may own a counter file. The lock below serializes callers
//! inside this process, not across processes.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::{SequenceError, SequenceSource};

const FIRST_NUMBER: u64 = 1;

pub struct FileSequence {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSequence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_stored(&self) -> Result<Option<u64>, SequenceError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SequenceError::Io(e)),
        };

        content
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| SequenceError::Corrupt {
                path: self.path.display().to_string(),
                content,
            })
    }

    async fn write_stored(&self, value: u64) -> Result<(), SequenceError> {
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(value.to_string().as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl SequenceSource for FileSequence {
    async fn issue_next(&self) -> Result<u64, SequenceError> {
        // Held until the new value is on disk; dropped on every return path.
        let _guard = self.lock.lock().await;

        let issued = match self.read_stored().await? {
            Some(value) => value,
            None => {
                log::info!("Counter file {} not found, starting at {}", self.path.display(), FIRST_NUMBER);
                FIRST_NUMBER
            }
        };
        let next = issued.checked_add(1).ok_or(SequenceError::Overflow)?;
        self.write_stored(next).await?;

        log::debug!("Issued contract number {}", issued);
        Ok(issued)
    }

    async fn peek(&self) -> Result<u64, SequenceError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_stored().await?.unwrap_or(FIRST_NUMBER))
    }
}
