//! Best score per game mode, kept in a key-value store as a small JSON map.
//!
//! Storage is best effort. A missing or unreadable map loads as all zeros, and a failed
//! save is logged and skipped. Nothing here ever reaches the running game as an error.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::HIGH_SCORE_KEY;
use crate::grid::GameMode;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("store error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed high scores: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighScores {
    pub classic: u32,
    pub ghost: u32,
    pub portal: u32,
}

impl HighScores {
    pub fn get(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Classic => self.classic,
            GameMode::Ghost => self.ghost,
            GameMode::Portal => self.portal,
        }
    }

    fn slot(&mut self, mode: GameMode) -> &mut u32 {
        match mode {
            GameMode::Classic => &mut self.classic,
            GameMode::Ghost => &mut self.ghost,
            GameMode::Portal => &mut self.portal,
        }
    }

    /// Copy with `mode` raised to `score` if that beats it. Other modes are untouched.
    pub fn with_record(mut self, mode: GameMode, score: u32) -> Self {
        let best = self.slot(mode);
        *best = (*best).max(score);
        self
    }
}

pub trait ScoreStore {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// Keeps each key as `<key>.json` in a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ScoreStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Makes every later `set` fail, as a full disk would.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::Other, "store is read-only"));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct Ledger<S: ScoreStore> {
    store: S,
    scores: HighScores,
}

impl<S: ScoreStore> Ledger<S> {
    pub fn load(store: S) -> Self {
        let scores = match Self::read(&store) {
            Ok(Some(scores)) => {
                info!("Loaded high scores: {:?}", scores);
                scores
            }
            Ok(None) => HighScores::default(),
            Err(LedgerError::Json(e)) => {
                warn!("Ignoring malformed high scores: {}", e);
                HighScores::default()
            }
            Err(e) => {
                error!("Error loading high scores: {}", e);
                HighScores::default()
            }
        };
        Ledger { store, scores }
    }

    fn read(store: &S) -> Result<Option<HighScores>, LedgerError> {
        match store.get(HIGH_SCORE_KEY)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    fn write(&mut self) -> Result<(), LedgerError> {
        let text = serde_json::to_string(&self.scores)?;
        self.store.set(HIGH_SCORE_KEY, &text)?;
        Ok(())
    }

    /// Folds a finished game into the table and saves the whole table.
    ///
    /// The in-memory best is raised even when saving fails.
    pub fn record(&mut self, mode: GameMode, score: u32) -> HighScores {
        self.scores = self.scores.with_record(mode, score);
        if let Err(e) = self.write() {
            error!("Error saving high scores: {}", e);
        }
        self.scores
    }

    pub fn scores(&self) -> HighScores {
        self.scores
    }

    pub fn best(&self, mode: GameMode) -> u32 {
        self.scores.get(mode)
    }

    /// Whether `score` is the standing best for `mode`, i.e. worth a "new high score" banner.
    pub fn is_new_best(&self, mode: GameMode, score: u32) -> bool {
        score > 0 && score == self.best(mode)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
