use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use rocket::fairing::AdHoc;
use thiserror::Error;
use tracing::{debug, error, info};
use shared::{CreatePollRequest, Poll, PollError, Polls};
use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Malformed poll file {}: {source}", .path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("Failed to serialize polls: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Poll store lock poisoned")]
    LockFailed,
    #[error(transparent)]
    Poll(#[from] PollError),
}

/// All polls, mirrored to a single JSON file that is rewritten in full after
/// every mutation. The lock is held across the mutation and the write.
#[derive(Debug)]
pub struct PollStore {
    path: PathBuf,
    polls: Mutex<Polls>,
}

impl PollStore {
    /// Reads `path` if it exists. A missing file yields an empty store; a
    /// present but unreadable or malformed one is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let polls = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)
                .map_err(|source| StoreError::Parse { path: path.clone(), source })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No poll file at {}, starting empty", path.display());
                Polls::new()
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        Ok(Self::with_polls(path, polls))
    }

    pub fn with_polls(path: impl Into<PathBuf>, polls: Polls) -> Self {
        Self {
            path: path.into(),
            polls: Mutex::new(polls),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.is_empty())
    }

    pub fn latest(&self) -> Result<Option<Poll>, StoreError> {
        Ok(self.lock()?.latest().cloned())
    }

    /// Votes for `key` on the latest poll and persists. An unknown key leaves
    /// both memory and file untouched.
    pub fn cast_vote(&self, key: &str) -> Result<Poll, StoreError> {
        let mut polls = self.lock()?;
        let poll = polls.latest_mut().ok_or(PollError::NoPolls)?;
        let votes = poll.cast_vote(key)?;
        let updated = poll.clone();
        info!(poll_id = %updated.id, option = key, votes, "Vote cast");

        self.save(&polls)?;
        Ok(updated)
    }

    pub fn create(&self, request: CreatePollRequest) -> Result<Poll, StoreError> {
        let poll = Poll::new(request);
        let mut polls = self.lock()?;
        polls.insert(poll.clone());
        info!(poll_id = %poll.id, options = poll.options.len(), "Poll created");

        self.save(&polls)?;
        Ok(poll)
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> Result<Polls, StoreError> {
        Ok(self.lock()?.clone())
    }

    /// Overwrites the backing file with `polls`. Not atomic: a crash mid-write
    /// can leave a truncated file behind.
    fn save(&self, polls: &Polls) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(polls)?;
        fs::write(&self.path, data)
            .map_err(|source| StoreError::Write { path: self.path.clone(), source })?;
        debug!("Saved {} polls to {}", polls.len(), self.path.display());
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Polls>, StoreError> {
        self.polls.lock().map_err(|e| {
            error!("Failed to acquire poll store lock: {}", e);
            StoreError::LockFailed
        })
    }

    /// Loads the store from the configured file during ignition. Ignition is
    /// aborted if the file cannot be loaded.
    pub fn fairing() -> AdHoc {
        AdHoc::try_on_ignite("Poll Store", |rocket| async move {
            let path = rocket
                .state::<AppConfig>()
                .map(|config| config.polls_file.clone())
                .unwrap_or_else(|| AppConfig::default().polls_file);

            match PollStore::load(&path) {
                Ok(store) => {
                    info!("📋 Loaded {} polls from {}", store.len().unwrap_or(0), path.display());
                    Ok(rocket.manage(store))
                }
                Err(e) => {
                    error!("Failed to load poll store: {}", e);
                    Err(rocket)
                }
            }
        })
    }
}
