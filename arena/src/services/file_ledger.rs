//! JSON-lines file ledger
//!
//! Items file: one `{"id": .., "text": ..}` object per line.
//! Votes file: one `{"id1": .., "id2": .., "result": ..}` object per line,
//! only ever appended to.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use shared::{decode_items, decode_votes, Item, Vote};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::{ArenaError, ArenaResult};
use crate::traits::{ItemStore, VoteStore};

pub struct FileLedger {
    items_path: PathBuf,
    votes_path: PathBuf,
    /// Serializes appends so concurrent lines never interleave
    append_lock: Mutex<()>,
}

impl FileLedger {
    pub fn new(items_path: impl Into<PathBuf>, votes_path: impl Into<PathBuf>) -> Self {
        Self {
            items_path: items_path.into(),
            votes_path: votes_path.into(),
            append_lock: Mutex::new(()),
        }
    }

    pub fn items_path(&self) -> &Path {
        &self.items_path
    }

    pub fn votes_path(&self) -> &Path {
        &self.votes_path
    }

    async fn read_rows(path: &Path) -> ArenaResult<Option<Vec<Value>>> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ArenaError::unavailable(format!(
                    "reading {}: {e}",
                    path.display()
                )))
            }
        };
        Ok(Some(parse_lines(path, &content)))
    }
}

/// Parse each non-blank line as JSON, skipping lines that do not parse
fn parse_lines(path: &Path, content: &str) -> Vec<Value> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| match serde_json::from_str(line) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(file = %path.display(), line = index + 1, error = %e, "⚠️ Skipping unparseable ledger line");
                None
            }
        })
        .collect()
}

#[async_trait]
impl ItemStore for FileLedger {
    async fn fetch_all(&self) -> ArenaResult<Vec<Item>> {
        let rows = Self::read_rows(&self.items_path).await?.ok_or_else(|| ArenaError::NotFound {
            name: self.items_path.display().to_string(),
        })?;
        let decoded = decode_items(&rows);
        debug!(items = decoded.rows.len(), rejected = decoded.rejected, "📄 Read item ledger");
        Ok(decoded.into_rows())
    }
}

#[async_trait]
impl VoteStore for FileLedger {
    async fn append(&self, vote: &Vote) -> ArenaResult<()> {
        let mut line = serde_json::to_string(vote)
            .map_err(|e| ArenaError::unavailable(format!("encoding vote: {e}")))?;
        line.push('\n');

        let _guard = self.append_lock.lock().await;
        if let Some(parent) = self.votes_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ArenaError::unavailable(format!("creating {}: {e}", parent.display())))?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.votes_path)
            .await
            .map_err(|e| ArenaError::unavailable(format!("opening {}: {e}", self.votes_path.display())))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| ArenaError::unavailable(format!("writing {}: {e}", self.votes_path.display())))?;
        file.flush()
            .await
            .map_err(|e| ArenaError::unavailable(format!("flushing {}: {e}", self.votes_path.display())))?;
        Ok(())
    }

    /// A votes file that does not exist yet is an empty log
    async fn read_all(&self) -> ArenaResult<Vec<Vote>> {
        let rows = Self::read_rows(&self.votes_path).await?.unwrap_or_default();
        let decoded = decode_votes(&rows);
        debug!(votes = decoded.rows.len(), rejected = decoded.rejected, "📄 Read vote ledger");
        Ok(decoded.into_rows())
    }
}
