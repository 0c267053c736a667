use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;

pub fn run(store: &Inventory) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_items(store.items().to_vec());
    if result.listed_items.is_empty() {
        result.add_message(CmdMessage::info("No items in inventory."));
    }
    Ok(result)
}
