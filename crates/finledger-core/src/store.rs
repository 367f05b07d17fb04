//! File-backed transaction store
//!
//! The store persists the full transaction collection as one JSON
//! document. There is no caching: every operation re-reads the file,
//! and every mutation rewrites it in full.

use crate::error::{CoreError, CoreResult};
use crate::models::Transaction;
use std::path::{Path, PathBuf};

/// Durable persistence for the full transaction collection
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full transaction collection
    ///
    /// A missing file is an empty collection. A file that is not valid
    /// JSON propagates as a `ParseError`.
    pub fn load(&self) -> CoreResult<Vec<Transaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| CoreError::ParseError {
            message: e.to_string(),
        })
    }

    /// Overwrite the backing file with the full collection
    ///
    /// Whole-file write, not atomic: a crash mid-write can truncate the
    /// file. The parent directory is created if missing.
    pub fn save(&self, transactions: &[Transaction]) -> CoreResult<()> {
        let content = serde_json::to_string_pretty(transactions).map_err(|e| {
            CoreError::SerializeError {
                message: e.to_string(),
            }
        })?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Append a transaction to the end of the collection
    pub fn append(&self, transaction: Transaction) -> CoreResult<()> {
        let mut transactions = self.load()?;
        log::debug!("Appending transaction {}", transaction.summary());
        transactions.push(transaction);
        self.save(&transactions)
    }

    /// Replace the first transaction whose id matches
    ///
    /// Returns true if a record was replaced; the collection is left
    /// untouched otherwise. Later duplicates of the same id are not
    /// replaced.
    pub fn replace(&self, id: i64, transaction: Transaction) -> CoreResult<bool> {
        let mut transactions = self.load()?;
        match transactions.iter_mut().find(|tx| tx.id == id) {
            Some(slot) => {
                log::debug!("Replacing transaction {}", id);
                *slot = transaction;
                self.save(&transactions)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every transaction whose id matches
    ///
    /// Returns the number of records removed. Removing a missing id
    /// still rewrites the file and reports zero.
    pub fn remove(&self, id: i64) -> CoreResult<usize> {
        let mut transactions = self.load()?;
        let before = transactions.len();
        transactions.retain(|tx| tx.id != id);
        let removed = before - transactions.len();
        log::debug!("Removed {} transaction(s) with id {}", removed, id);
        self.save(&transactions)?;
        Ok(removed)
    }
}

// ==================== Tests ====================
