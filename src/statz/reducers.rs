//! # Reducers
//!
//! A reducer folds one action's payload into the running [`Record`]. Reducers
//! are registered by kind name in a [`ReducerRegistry`]; the aggregation
//! engine resolves each action's kind there and knows no names itself.
//!
//! A reducer answers with a [`Reduction`]: either the updated record, or
//! `Unchanged` when the payload touched nothing. The engine keeps its
//! previous accumulator on `Unchanged`.
//!
//! Built-in kinds:
//! - `sum`: adds payload values onto matching attributes
//! - `set`: overwrites matching attributes with payload values
//!
//! In both, payload keys that are not in the record are ignored.

use crate::model::Payload;
use crate::record::Record;
use std::collections::HashMap;

pub const SUM: &str = "sum";
pub const SET: &str = "set";

#[derive(Debug, Clone, PartialEq)]
pub enum Reduction {
    Updated(Record),
    Unchanged,
}

pub trait Reducer: Send + Sync {
    fn reduce(&self, record: &Record, payload: &Payload) -> Reduction;
}

impl<F> Reducer for F
where
    F: Fn(&Record, &Payload) -> Reduction + Send + Sync,
{
    fn reduce(&self, record: &Record, payload: &Payload) -> Reduction {
        self(record, payload)
    }
}

/// Applies `op` to every record entry that has a payload value.
fn merge(record: &Record, payload: &Payload, op: impl Fn(f64, f64) -> f64) -> Reduction {
    let mut next = record.clone();
    let mut touched = false;

    for (key, value) in next.iter_mut() {
        if let Some(incoming) = payload.get(key) {
            *value = op(*value, *incoming);
            touched = true;
        }
    }

    if touched {
        Reduction::Updated(next)
    } else {
        Reduction::Unchanged
    }
}

pub fn sum(record: &Record, payload: &Payload) -> Reduction {
    merge(record, payload, |current, incoming| current + incoming)
}

pub fn set(record: &Record, payload: &Payload) -> Reduction {
    merge(record, payload, |_, incoming| incoming)
}

pub struct ReducerRegistry {
    reducers: HashMap<String, Box<dyn Reducer>>,
}

impl ReducerRegistry {
    /// A registry with no kinds at all.
    pub fn empty() -> Self {
        Self {
            reducers: HashMap::new(),
        }
    }

    /// Registers (or replaces) the reducer for `kind`.
    pub fn register(&mut self, kind: impl Into<String>, reducer: impl Reducer + 'static) {
        self.reducers.insert(kind.into(), Box::new(reducer));
    }

    pub fn with(mut self, kind: impl Into<String>, reducer: impl Reducer + 'static) -> Self {
        self.register(kind, reducer);
        self
    }

    pub fn resolve(&self, kind: &str) -> Option<&dyn Reducer> {
        self.reducers.get(kind).map(|r| r.as_ref())
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.reducers.contains_key(kind)
    }

    /// Registered kind names, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.reducers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for ReducerRegistry {
    fn default() -> Self {
        Self::empty().with(SUM, sum).with(SET, set)
    }
}
