use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StocklogError};
use crate::model::DecreaseOutcome;
use crate::store::Inventory;

pub fn increase(store: &mut Inventory, id: u32, amount: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.increase_stock(id, amount) {
        Ok(quantity) => {
            result.add_message(CmdMessage::success(format!(
                "Stock increased (ID {:03}): {} items",
                id, quantity
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

pub fn decrease(store: &mut Inventory, id: u32, amount: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.decrease_stock(id, amount) {
        Ok(DecreaseOutcome::Applied { quantity }) => {
            result.add_message(CmdMessage::success(format!(
                "Stock decreased (ID {:03}): {} items",
                id, quantity
            )));
            if let Some(item) = store.find(id) {
                result.affected_items.push(item.clone());
            }
        }
        Ok(DecreaseOutcome::Insufficient { available }) => {
            result.add_message(CmdMessage::warning(format!(
                "Input is higher than current stock! ({} items)",
                available
            )));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn store_with_widget() -> Inventory {
        let mut store = Inventory::new();
        store.add("Widget".into(), "Acme".into(), 9.99, 10);
        store
    }

    #[test]
    fn increase_appends_new_total() {
        let mut store = store_with_widget();
        let result = increase(&mut store, 1, 5).unwrap();
        assert_eq!(result.affected_items[0].quantity, 15);
        assert_eq!(result.affected_items[0].stock_history, vec![10, 15]);
    }

    #[test]
    fn decrease_appends_new_total() {
        let mut store = store_with_widget();
        let result = decrease(&mut store, 1, 4).unwrap();
        assert_eq!(result.affected_items[0].quantity, 6);
    }

    #[test]
    fn insufficient_decrease_is_a_warning_not_an_error() {
        let mut store = store_with_widget();
        let result = decrease(&mut store, 1, 100).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("10 items"));
        assert!(result.affected_items.is_empty());

        // And the store is untouched.
        let item = store.find(1).unwrap();
        assert_eq!(item.quantity, 10);
        assert_eq!(item.stock_history, vec![10]);
    }

    #[test]
    fn missing_id_reports_error_message() {
        let mut store = Inventory::new();
        assert!(increase(&mut store, 3, 1).unwrap().has_errors());
        assert!(decrease(&mut store, 3, 1).unwrap().has_errors());
    }
}
