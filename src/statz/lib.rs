//! # Statz Architecture
//!
//! Statz is a personal stat-tracking ledger. It records timestamped actions
//! against named character attributes (hp, mp, ...) and reconstructs the
//! attribute values as of any date by replaying the action log.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the table, owns stdout/stderr  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the loaded snapshot and the registries              │
//! │  - Normalizes inputs (date strings, name=value pairs)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - status, log, types, init                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: engine.rs, reducers.rs, formatters.rs, record.rs     │
//! │  Storage: store/ (FileStore, InMemoryStore)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Fold
//!
//! A status query seeds a [`record::Record`] with every attribute's default,
//! keeps the actions dated on or before the cutoff, and folds them in log
//! order through the reducer registered for each action's kind
//! ([`engine::compute_record`]). Each value is then rendered by the
//! formatter registered for its attribute, or shown raw.
//!
//! Nothing from `api.rs` inward writes to stdout or exits the process.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`engine`]: Aggregation of the action log
//! - [`reducers`]: Reducer trait, built-in kinds and registry
//! - [`formatters`]: Formatter trait, progress bar and registry
//! - [`record`]: The fold accumulator
//! - [`model`]: Attribute types, actions, timestamps, snapshot
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`init`]: Process bootstrap (data dir, config, API)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod formatters;
pub mod init;
pub mod model;
pub mod record;
pub mod reducers;
pub mod store;
