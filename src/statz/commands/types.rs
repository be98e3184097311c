use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Snapshot;

pub fn run(snapshot: &Snapshot) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_types(snapshot.types.clone());
    if snapshot.types.is_empty() {
        result.add_message(CmdMessage::info("No attribute types defined."));
    }
    Ok(result)
}
