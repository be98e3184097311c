//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for UI
//! clients. It owns the store, the loaded [`Snapshot`] and the two
//! registries, dispatches to `commands/*.rs` and returns `Result<CmdResult>`.
//!
//! The snapshot is loaded once in [`StatzApi::new`] and read by every query.
//! The only write, [`StatzApi::log_action`], re-loads it explicitly after
//! appending so later queries in the same process see the new action.
//!
//! Generic over [`DataStore`]: `StatzApi<FileStore>` in production,
//! `StatzApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::Result;
use crate::formatters::FormatterRegistry;
use crate::model::{parse_date, Snapshot, Timestamp};
use crate::reducers::ReducerRegistry;
use crate::store::DataStore;
use chrono::NaiveDate;

pub struct StatzApi<S: DataStore> {
    store: S,
    snapshot: Snapshot,
    reducers: ReducerRegistry,
    formatters: FormatterRegistry,
}

impl<S: DataStore> StatzApi<S> {
    pub fn new(store: S, reducers: ReducerRegistry, formatters: FormatterRegistry) -> Result<Self> {
        let snapshot = store.load()?;
        Ok(Self {
            store,
            snapshot,
            reducers,
            formatters,
        })
    }

    /// Status as of `date` (`YYYY-MM-DD`), or as of `today` when absent.
    pub fn status(&self, date: Option<&str>, today: NaiveDate) -> Result<commands::CmdResult> {
        let cutoff = match date {
            Some(d) => parse_date(d)?,
            None => today,
        };
        self.status_at(cutoff)
    }

    pub fn status_at(&self, cutoff: NaiveDate) -> Result<commands::CmdResult> {
        commands::status::run(&self.snapshot, &self.reducers, &self.formatters, cutoff)
    }

    pub fn log_action<I: AsRef<str>>(
        &mut self,
        kind: &str,
        entries: &[I],
        time: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let payload = commands::log::parse_payload(entries)?;
        let time = time.map(str::parse::<Timestamp>).transpose()?;
        let result = commands::log::run(
            &mut self.store,
            &self.snapshot,
            &self.reducers,
            kind,
            payload,
            time,
        )?;
        self.snapshot = self.store.load()?;
        Ok(result)
    }

    pub fn types(&self) -> Result<commands::CmdResult> {
        commands::types::run(&self.snapshot)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        let result = commands::init::run(&mut self.store)?;
        self.snapshot = self.store.load()?;
        Ok(result)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, StatusRow};
