use super::{default_snapshot, DataStore};
use crate::error::{Result, StatzError};
use crate::model::Snapshot;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub const DB_FILENAME: &str = "db.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn db_path(&self) -> PathBuf {
        self.root.join(DB_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StatzError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn location(&self) -> String {
        self.db_path().display().to_string()
    }

    fn exists(&self) -> bool {
        self.db_path().exists()
    }

    fn load(&self) -> Result<Snapshot> {
        let path = self.db_path();
        if !path.exists() {
            debug!(path = %path.display(), "no ledger yet, using defaults");
            return Ok(default_snapshot());
        }

        let content = fs::read_to_string(&path).map_err(StatzError::Io)?;
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(StatzError::Serialization)?;
        snapshot.validate()?;

        debug!(
            path = %path.display(),
            types = snapshot.types.len(),
            actions = snapshot.actions.len(),
            "loaded ledger"
        );
        Ok(snapshot)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.ensure_dir()?;
        let path = self.db_path();
        let content = serde_json::to_string_pretty(snapshot).map_err(StatzError::Serialization)?;
        fs::write(&path, content).map_err(StatzError::Io)?;
        debug!(path = %path.display(), actions = snapshot.actions.len(), "saved ledger");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Action;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());

        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), default_snapshot());
    }

    #[test]
    fn bootstrap_writes_once() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("nested"));

        assert!(store.bootstrap().unwrap());
        assert!(store.exists());
        assert!(!store.bootstrap().unwrap());
    }

    #[test]
    fn append_preserves_order_and_raw_time() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());

        let first = Action::new(
            "2024-01-01T08:00:00+02:00".parse().unwrap(),
            "sum",
            [("hp".to_string(), 30.0)].into_iter().collect(),
        );
        let second = Action::new(
            "2024-01-01".parse().unwrap(),
            "set",
            [("hp".to_string(), 80.0)].into_iter().collect(),
        );
        store.append_action(first.clone()).unwrap();
        store.append_action(second.clone()).unwrap();

        let loaded = FileStore::new(temp.path()).load().unwrap();
        assert_eq!(loaded.actions, vec![first, second]);

        let raw = fs::read_to_string(temp.path().join(DB_FILENAME)).unwrap();
        assert!(raw.contains("\"2024-01-01T08:00:00+02:00\""));
        assert!(raw.contains("\"type\": \"sum\""));
    }

    #[test]
    fn reads_hand_written_document() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(DB_FILENAME),
            r#"{
              "types": [{ "name": "hp", "detail": "Health", "default": 0, "max": 100 }],
              "actions": [{ "time": "2024-01-01T10:00:00.000Z", "type": "sum", "data": { "hp": 30 } }]
            }"#,
        )
        .unwrap();

        let snapshot = FileStore::new(temp.path()).load().unwrap();
        assert_eq!(snapshot.types[0].max, Some(100.0));
        assert_eq!(snapshot.actions[0].data.get("hp"), Some(&30.0));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DB_FILENAME), "{ not json").unwrap();

        let err = FileStore::new(temp.path()).load().unwrap_err();
        assert!(matches!(err, StatzError::Serialization(_)));
    }
}
