//! # Storage Layer
//!
//! The ledger is one JSON document holding the attribute catalog and the
//! action log. [`DataStore`] abstracts where that document lives:
//!
//! - [`fs::FileStore`]: `db.json` inside a data directory (production)
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── db.json       # { "types": [...], "actions": [...] }
//! └── config.json   # optional, see config.rs
//! ```
//!
//! A missing `db.json` reads as the default document (hp and mp, no
//! actions); [`DataStore::bootstrap`] writes it out.
//!
//! The core only ever reads a loaded [`Snapshot`]. Appending an action is the
//! one write path and goes through the whole document.

use crate::error::Result;
use crate::model::{Action, AttributeType, Snapshot};

pub mod fs;
pub mod memory;

/// The document a fresh ledger starts with.
pub fn default_snapshot() -> Snapshot {
    Snapshot::new(
        vec![
            AttributeType::new("hp", "The Health Point of life. Base on current health.", 0.0)
                .with_max(100.0),
            AttributeType::new(
                "mp",
                "Also called Mana Point, is a state of body and mind which can make actions.",
                0.0,
            )
            .with_max(100.0),
        ],
        Vec::new(),
    )
}

/// Abstract interface for ledger storage.
pub trait DataStore {
    /// Human-readable location of the document, for messages
    fn location(&self) -> String;

    /// Whether a document has been persisted yet
    fn exists(&self) -> bool;

    /// Load the whole document, or the default one if nothing is stored
    fn load(&self) -> Result<Snapshot>;

    /// Replace the stored document
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;

    /// Persist the default document if none exists. Returns true if written.
    fn bootstrap(&mut self) -> Result<bool> {
        if self.exists() {
            return Ok(false);
        }
        self.save(&default_snapshot())?;
        Ok(true)
    }

    /// Append one action to the end of the log
    fn append_action(&mut self, action: Action) -> Result<()> {
        let mut snapshot = self.load()?;
        snapshot.actions.push(action);
        self.save(&snapshot)
    }
}
