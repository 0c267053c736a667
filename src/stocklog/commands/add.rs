use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;

pub fn run(
    store: &mut Inventory,
    name: String,
    brand: String,
    price: f64,
    quantity: u32,
) -> Result<CmdResult> {
    let id = store.add(name, brand, price, quantity);
    let mut result = CmdResult::default();

    result.add_message(CmdMessage::success(format!(
        "Item added. Assigned ID: {:03}",
        id
    )));
    if let Some(item) = store.find(id) {
        result.affected_items.push(item.clone());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_item_and_reports_assigned_id() {
        let mut store = Inventory::new();
        let result = run(&mut store, "Widget".into(), "Acme".into(), 9.99, 10).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(result.affected_items[0].id, 1);
        assert!(result.messages[0].content.contains("001"));
    }

    #[test]
    fn seeds_histories_on_add() {
        let mut store = Inventory::new();
        run(&mut store, "Widget".into(), "Acme".into(), 9.99, 10).unwrap();

        let item = store.find(1).unwrap();
        assert_eq!(item.price_history, vec![9.99]);
        assert_eq!(item.stock_history, vec![10]);
    }

    #[test]
    fn empty_name_and_brand_are_accepted() {
        let mut store = Inventory::new();
        let result = run(&mut store, "".into(), "".into(), 0.0, 0).unwrap();
        assert_eq!(result.affected_items[0].name, "");
    }
}
