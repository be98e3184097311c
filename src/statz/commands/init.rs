use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let location = store.location();
    let mut result = CmdResult::default();
    if store.bootstrap()? {
        result.add_message(CmdMessage::success(format!(
            "Initialized statz ledger at {}",
            location
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Ledger already exists at {}",
            location
        )));
    }
    Ok(result)
}
