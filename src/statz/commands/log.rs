use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StatzError};
use crate::model::{Action, Payload, Snapshot, Timestamp};
use crate::reducers::ReducerRegistry;
use crate::store::DataStore;
use tracing::info;

/// Parses `name=value` pairs into a payload. Later duplicates win.
pub fn parse_payload<I: AsRef<str>>(entries: &[I]) -> Result<Payload> {
    let mut payload = Payload::new();
    for entry in entries {
        let entry = entry.as_ref();
        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| StatzError::InvalidPayload(entry.to_string()))?;

        let name = name.trim();
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| StatzError::InvalidPayload(entry.to_string()))?;
        if name.is_empty() || !value.is_finite() {
            return Err(StatzError::InvalidPayload(entry.to_string()));
        }

        payload.insert(name.to_string(), value);
    }
    Ok(payload)
}

/// Appends one action to the log.
///
/// The kind is checked against the registry up front so an unreplayable
/// action never reaches the store; the error names the registered kinds.
pub fn run<S: DataStore>(
    store: &mut S,
    snapshot: &Snapshot,
    reducers: &ReducerRegistry,
    kind: &str,
    payload: Payload,
    time: Option<Timestamp>,
) -> Result<CmdResult> {
    if !reducers.contains(kind) {
        return Err(StatzError::UnregisteredKind {
            kind: kind.to_string(),
            registered: reducers.kinds().join(", "),
        });
    }
    if payload.is_empty() {
        return Err(StatzError::Api(
            "An action needs at least one attribute=value".to_string(),
        ));
    }

    let time = time.unwrap_or_else(Timestamp::now);
    let mut result = CmdResult::default();
    for name in payload.keys() {
        if snapshot.attribute(name).is_err() {
            result.add_message(CmdMessage::warning(format!(
                "'{}' is not a known attribute and will be ignored",
                name
            )));
        }
    }

    let action = Action::new(time, kind, payload);
    store.append_action(action.clone())?;
    info!(time = %action.time, kind = %action.kind, "appended action");

    result.add_message(CmdMessage::success(format!(
        "Logged {} action at {}",
        action.kind, action.time
    )));
    Ok(result.with_appended(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::record::Record;
    use crate::reducers::Reduction;
    use crate::store::memory::InMemoryStore;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn parses_payload_entries() {
        let payload = parse_payload(&["hp=30", " mp = -2.5 ", "hp=31"]).unwrap();
        assert_eq!(payload.get("hp"), Some(&31.0));
        assert_eq!(payload.get("mp"), Some(&-2.5));
    }

    #[test]
    fn rejects_malformed_entries() {
        for bad in ["hp", "hp=", "=3", "hp=lots", "hp=inf", "hp=NaN"] {
            let err = parse_payload(&[bad]).unwrap_err();
            assert!(
                matches!(err, StatzError::InvalidPayload(ref e) if e == bad),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn appends_action_to_store() {
        let mut store = InMemoryStore::new();
        let snapshot = store.load().unwrap();
        let payload = parse_payload(&["hp=30"]).unwrap();

        let result = run(
            &mut store,
            &snapshot,
            &ReducerRegistry::default(),
            "sum",
            payload,
            Some("2024-01-01".parse().unwrap()),
        )
        .unwrap();

        let saved = store.load().unwrap();
        assert_eq!(saved.actions.len(), 1);
        assert_eq!(saved.actions[0].kind, "sum");
        assert_eq!(result.appended.as_ref(), Some(&saved.actions[0]));
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
    }

    #[test]
    fn unknown_kind_is_not_written() {
        let mut store = StoreFixture::new().with_type("hp", 0.0, None).build();
        let snapshot = store.load().unwrap();

        let err = run(
            &mut store,
            &snapshot,
            &ReducerRegistry::default(),
            "multiplyReducer",
            parse_payload(&["hp=2"]).unwrap(),
            None,
        )
        .unwrap_err();

        assert!(matches!(err, StatzError::UnregisteredKind { ref kind, .. } if kind == "multiplyReducer"));
        assert_eq!(
            err.to_string(),
            "Unknown reducer kind 'multiplyReducer' (registered: set, sum)"
        );
        assert!(store.load().unwrap().actions.is_empty());
    }

    #[test]
    fn unknown_kind_lists_custom_kinds() {
        let mut store = InMemoryStore::new();
        let snapshot = store.load().unwrap();
        let reducers = ReducerRegistry::default().with("max", |_: &Record, _: &Payload| {
            Reduction::Unchanged
        });

        let err = run(
            &mut store,
            &snapshot,
            &reducers,
            "min",
            parse_payload(&["hp=2"]).unwrap(),
            None,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            StatzError::UnregisteredKind { ref registered, .. } if registered == "max, set, sum"
        ));
    }

    #[test]
    fn unknown_attribute_warns_but_logs() {
        let mut store = StoreFixture::new().with_type("hp", 0.0, None).build();
        let snapshot = store.load().unwrap();

        let result = run(
            &mut store,
            &snapshot,
            &ReducerRegistry::default(),
            "set",
            parse_payload(&["xp=9"]).unwrap(),
            None,
        )
        .unwrap();

        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert_eq!(store.load().unwrap().actions.len(), 1);
    }

    #[test]
    fn empty_payload_is_rejected() {
        let mut store = InMemoryStore::new();
        let snapshot = store.load().unwrap();
        let err = run(
            &mut store,
            &snapshot,
            &ReducerRegistry::default(),
            "sum",
            Payload::new(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, StatzError::Api(_)));
    }
}
