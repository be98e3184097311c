use crate::commands::{CmdResult, StatusRow};
use crate::engine::compute_record;
use crate::error::Result;
use crate::formatters::FormatterRegistry;
use crate::model::Snapshot;
use crate::reducers::ReducerRegistry;
use chrono::NaiveDate;

/// Builds the status table as of `cutoff`.
///
/// Either every attribute renders or the whole query fails; no partial rows.
pub fn run(
    snapshot: &Snapshot,
    reducers: &ReducerRegistry,
    formatters: &FormatterRegistry,
    cutoff: NaiveDate,
) -> Result<CmdResult> {
    let record = compute_record(snapshot, reducers, cutoff)?;

    let rows = record
        .iter()
        .map(|(name, value)| -> Result<StatusRow> {
            let ty = snapshot.attribute(name)?;
            Ok(StatusRow {
                name: name.to_string(),
                value: formatters.render(name, value, ty),
                detail: ty.detail.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default()
        .with_cutoff(cutoff)
        .with_status_rows(rows))
}
