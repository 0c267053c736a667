use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;

/// A miss is reported as a message, not an error: the session (or the next
/// invocation) carries on with the store unchanged.
pub fn run(store: &mut Inventory, id: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.remove(id) {
        result.add_message(CmdMessage::success(format!(
            "Item with ID {:03} removed.",
            id
        )));
    } else {
        result.add_message(CmdMessage::error(format!(
            "Item with ID {:03} not found.",
            id
        )));
    }

    Ok(result)
}
