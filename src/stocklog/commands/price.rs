use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StocklogError};
use crate::store::Inventory;

pub fn run(store: &mut Inventory, id: u32, new_price: f64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.update_price(id, new_price) {
        Ok(price) => {
            result.add_message(CmdMessage::success(format!(
                "Price updated (ID {:03}): P{:.2}",
                id, price
            )));
            if let Some(item) = store.find(id) {
                result.affected_items.push(item.clone());
            }
        }
        Err(StocklogError::ItemNotFound(_)) => {
            result.add_message(CmdMessage::error(format!(
                "Item with ID {:03} not found.",
                id
            )));
        }
        Err(err) => return Err(err),
    }

    Ok(result)
}
