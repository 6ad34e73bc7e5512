//! Time-boxed cache over the on-disk writing-rule files.
//!
//! Rule files are read at most once per TTL window. When a refresh fails and a
//! previously loaded copy exists, the stale copy keeps being served.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleFile {
    Resume,
    CoverLetter,
}

impl RuleFile {
    pub fn file_name(self) -> &'static str {
        match self {
            RuleFile::Resume => "resume_rules.md",
            RuleFile::CoverLetter => "cover_letter_rules.md",
        }
    }
}

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Rule file {path} could not be read: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Rule file {0} is empty")]
    Empty(PathBuf),
}

#[derive(Debug, Clone)]
struct CachedRule {
    content: Arc<str>,
    loaded_at: Instant,
}

#[derive(Debug)]
pub struct RuleCache {
    dir: PathBuf,
    ttl: Duration,
    entries: RwLock<HashMap<RuleFile, CachedRule>>,
}

impl RuleCache {
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn get(&self, file: RuleFile) -> Result<Arc<str>, RuleError> {
        self.get_at(file, Instant::now())
    }

    /// Same as [`get`](Self::get) with an explicit clock reading.
    pub fn get_at(&self, file: RuleFile, now: Instant) -> Result<Arc<str>, RuleError> {
        let cached = self
            .entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&file)
            .cloned();

        if let Some(entry) = &cached {
            if now.saturating_duration_since(entry.loaded_at) < self.ttl {
                return Ok(Arc::clone(&entry.content));
            }
        }

        match self.load(file) {
            Ok(content) => {
                debug!(file = file.file_name(), bytes = content.len(), "Rule file loaded");
                self.entries
                    .write()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .insert(
                        file,
                        CachedRule {
                            content: Arc::clone(&content),
                            loaded_at: now,
                        },
                    );
                Ok(content)
            }
            Err(e) => match cached {
                Some(stale) => {
                    warn!(file = file.file_name(), error = %e, "Rule refresh failed, serving stale copy");
                    Ok(stale.content)
                }
                None => Err(e),
            },
        }
    }

    /// Drops every cached entry so the next read goes to disk.
    pub fn invalidate(&self) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    fn load(&self, file: RuleFile) -> Result<Arc<str>, RuleError> {
        let path = self.dir.join(file.file_name());
        let content = std::fs::read_to_string(&path).map_err(|source| RuleError::Read {
            path: path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Err(RuleError::Empty(path));
        }
        Ok(Arc::from(content))
    }
}
