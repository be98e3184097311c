//! # Aggregation
//!
//! Rebuilds the attribute record as of a calendar date by replaying the
//! action log over the type defaults.
//!
//! Actions are filtered by the *date* of their timestamp (actions on the
//! cutoff day are included) and folded in log order, which is the tie-break
//! for actions sharing a day or timestamp. A kind with no registered reducer
//! aborts the query with [`StatzError::UnknownReducerKind`].

use crate::error::{Result, StatzError};
use crate::model::Snapshot;
use crate::record::Record;
use crate::reducers::{ReducerRegistry, Reduction};
use chrono::NaiveDate;
use tracing::{debug, trace};

pub fn compute_record(
    snapshot: &Snapshot,
    reducers: &ReducerRegistry,
    cutoff: NaiveDate,
) -> Result<Record> {
    let mut record = Record::seeded(&snapshot.types);

    let mut applied = 0usize;
    for action in snapshot
        .actions
        .iter()
        .filter(|action| action.time.date() <= cutoff)
    {
        let reducer =
            reducers
                .resolve(&action.kind)
                .ok_or_else(|| StatzError::UnknownReducerKind {
                    time: action.time.to_string(),
                    kind: action.kind.clone(),
                })?;

        match reducer.reduce(&record, &action.data) {
            Reduction::Updated(next) => record = next,
            Reduction::Unchanged => {
                trace!(time = %action.time, kind = %action.kind, "action left record unchanged")
            }
        }
        applied += 1;
    }

    debug!(
        %cutoff,
        applied,
        total = snapshot.actions.len(),
        "computed record"
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Action, AttributeType, Payload};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn action(time: &str, kind: &str, data: &[(&str, f64)]) -> Action {
        let payload: Payload = data.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        Action::new(time.parse().unwrap(), kind, payload)
    }

    fn hp_snapshot(actions: Vec<Action>) -> Snapshot {
        Snapshot::new(
            vec![AttributeType::new("hp", "Health", 0.0).with_max(100.0)],
            actions,
        )
    }

    fn hp_at(snapshot: &Snapshot, cutoff: &str) -> f64 {
        compute_record(snapshot, &ReducerRegistry::default(), date(cutoff))
            .unwrap()
            .get("hp")
            .unwrap()
    }

    #[test]
    fn replays_up_to_cutoff() {
        let snapshot = hp_snapshot(vec![
            action("2024-01-01", "sum", &[("hp", 30.0)]),
            action("2024-01-05", "set", &[("hp", 80.0)]),
        ]);

        assert_eq!(hp_at(&snapshot, "2024-01-03"), 30.0);
        assert_eq!(hp_at(&snapshot, "2024-01-05"), 80.0);
        assert_eq!(hp_at(&snapshot, "2023-12-31"), 0.0);
    }

    #[test]
    fn before_first_action_gives_defaults() {
        let snapshot = Snapshot::new(
            vec![
                AttributeType::new("hp", "Health", 7.0),
                AttributeType::new("mp", "Mana", 3.0),
            ],
            vec![action("2024-02-01", "sum", &[("hp", 1.0), ("mp", 1.0)])],
        );

        let record =
            compute_record(&snapshot, &ReducerRegistry::default(), date("2024-01-31")).unwrap();
        assert_eq!(record, Record::seeded(&snapshot.types));
    }

    #[test]
    fn empty_log_gives_defaults() {
        let snapshot = hp_snapshot(vec![]);
        assert_eq!(hp_at(&snapshot, "2024-01-01"), 0.0);
    }

    #[test]
    fn empty_registry_gives_empty_record() {
        let snapshot = Snapshot::new(vec![], vec![action("2024-01-01", "sum", &[("hp", 1.0)])]);
        let record =
            compute_record(&snapshot, &ReducerRegistry::default(), date("2024-01-01")).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn cutoff_day_includes_late_timestamps() {
        let snapshot = hp_snapshot(vec![action("2024-01-05T23:59:59", "sum", &[("hp", 5.0)])]);
        assert_eq!(hp_at(&snapshot, "2024-01-05"), 5.0);
        assert_eq!(hp_at(&snapshot, "2024-01-04"), 0.0);
    }

    #[test]
    fn later_actions_do_not_affect_earlier_cutoff() {
        let mut snapshot = hp_snapshot(vec![action("2024-01-01", "sum", &[("hp", 10.0)])]);
        let before = hp_at(&snapshot, "2024-01-02");

        snapshot
            .actions
            .push(action("2024-01-03", "set", &[("hp", 99.0)]));
        snapshot
            .actions
            .push(action("2024-01-03", "bogus", &[("hp", 1.0)]));

        assert_eq!(hp_at(&snapshot, "2024-01-02"), before);
    }

    #[test]
    fn sum_order_does_not_matter() {
        let a = action("2024-01-01", "sum", &[("hp", 12.5)]);
        let b = action("2024-01-01", "sum", &[("hp", -4.0)]);

        let forward = hp_snapshot(vec![a.clone(), b.clone()]);
        let reversed = hp_snapshot(vec![b, a]);

        assert_eq!(
            hp_at(&forward, "2024-01-02"),
            hp_at(&reversed, "2024-01-02")
        );
    }

    #[test]
    fn set_follows_log_order() {
        let a = action("2024-01-01T10:00:00", "set", &[("hp", 40.0)]);
        let b = action("2024-01-01T10:00:00", "set", &[("hp", 60.0)]);

        assert_eq!(
            hp_at(&hp_snapshot(vec![a.clone(), b.clone()]), "2024-01-01"),
            60.0
        );
        assert_eq!(hp_at(&hp_snapshot(vec![b, a]), "2024-01-01"), 40.0);
    }

    #[test]
    fn unknown_kind_fails_the_query() {
        let snapshot = hp_snapshot(vec![
            action("2024-01-01", "sum", &[("hp", 30.0)]),
            action("2024-01-02", "multiplyReducer", &[("hp", 2.0)]),
        ]);

        let err =
            compute_record(&snapshot, &ReducerRegistry::default(), date("2024-01-02")).unwrap_err();
        match err {
            StatzError::UnknownReducerKind { time, kind } => {
                assert_eq!(time, "2024-01-02");
                assert_eq!(kind, "multiplyReducer");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unchanged_reduction_keeps_accumulator() {
        let snapshot = hp_snapshot(vec![
            action("2024-01-01", "sum", &[("hp", 30.0)]),
            action("2024-01-02", "noop", &[("hp", 1.0)]),
        ]);
        let reducers = ReducerRegistry::default().with("noop", |_: &Record, _: &Payload| {
            Reduction::Unchanged
        });

        let record = compute_record(&snapshot, &reducers, date("2024-01-02")).unwrap();
        assert_eq!(record.get("hp"), Some(30.0));
    }

    #[test]
    fn does_not_mutate_snapshot() {
        let snapshot = hp_snapshot(vec![action("2024-01-01", "sum", &[("hp", 30.0)])]);
        let copy = snapshot.clone();
        compute_record(&snapshot, &ReducerRegistry::default(), date("2024-01-01")).unwrap();
        compute_record(&snapshot, &ReducerRegistry::default(), date("2024-01-01")).unwrap();
        assert_eq!(snapshot, copy);
    }
}
