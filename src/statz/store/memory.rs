use super::{default_snapshot, DataStore};
use crate::error::Result;
use crate::model::Snapshot;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<Snapshot>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn exists(&self) -> bool {
        self.snapshot.is_some()
    }

    fn load(&self) -> Result<Snapshot> {
        match &self.snapshot {
            Some(snapshot) => {
                snapshot.validate()?;
                Ok(snapshot.clone())
            }
            None => Ok(default_snapshot()),
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.snapshot = Some(snapshot.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Action, AttributeType, Payload};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        snapshot: Snapshot,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// Starts from an empty catalog and log.
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                snapshot: Snapshot::default(),
            }
        }

        pub fn with_type(mut self, name: &str, default: f64, max: Option<f64>) -> Self {
            let mut ty = AttributeType::new(name, format!("{name} detail"), default);
            ty.max = max;
            self.snapshot.types.push(ty);
            self
        }

        pub fn with_action(mut self, time: &str, kind: &str, data: &[(&str, f64)]) -> Self {
            let payload: Payload = data.iter().map(|(k, v)| (k.to_string(), *v)).collect();
            self.snapshot
                .actions
                .push(Action::new(time.parse().unwrap(), kind, payload));
            self
        }

        pub fn build(mut self) -> InMemoryStore {
            self.store.save(&self.snapshot).unwrap();
            self.store
        }
    }
}
