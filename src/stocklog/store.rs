//! The in-memory inventory store.
//!
//! [`Inventory`] is the authority of record for a session: the codec fills it
//! once at startup and writes it back out at the end, and every mutation in
//! between goes through it. Items keep their insertion order; deleting an
//! item does not reorder or renumber the survivors.

use crate::error::{Result, StocklogError};
use crate::model::{DecreaseOutcome, Item};

#[derive(Debug, Default)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Next free id: one past the current maximum, or 1 for an empty store.
    /// Deleting the highest-id item frees that number for reassignment; that
    /// quirk is part of the persisted-data contract and is kept as-is.
    pub fn next_id(&self) -> u32 {
        self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }

    /// Add a new item and return its assigned id. Inputs are trusted;
    /// non-negativity is the caller's job.
    pub fn add(&mut self, name: String, brand: String, price: f64, quantity: u32) -> u32 {
        let id = self.next_id();
        self.items.push(Item::new(id, name, brand, price, quantity));
        id
    }

    pub fn find(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Remove the item with the given id. Returns false, leaving the store
    /// unchanged, when no such item exists.
    pub fn remove(&mut self, id: u32) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn update_price(&mut self, id: u32, new_price: f64) -> Result<f64> {
        let item = self
            .find_mut(id)
            .ok_or(StocklogError::ItemNotFound(id))?;
        item.update_price(new_price);
        Ok(item.price)
    }

    pub fn increase_stock(&mut self, id: u32, amount: u32) -> Result<u32> {
        let item = self
            .find_mut(id)
            .ok_or(StocklogError::ItemNotFound(id))?;
        Ok(item.increase_stock(amount))
    }

    pub fn decrease_stock(&mut self, id: u32, amount: u32) -> Result<DecreaseOutcome> {
        let item = self
            .find_mut(id)
            .ok_or(StocklogError::ItemNotFound(id))?;
        Ok(item.decrease_stock(amount))
    }

    /// Items in store order. Callers must not hold this view across
    /// structural mutations.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_one() -> Inventory {
        let mut store = Inventory::new();
        store.add("Widget".into(), "Acme".into(), 9.99, 10);
        store
    }

    #[test]
    fn ids_increase_from_one() {
        let mut store = Inventory::new();
        assert_eq!(store.add("A".into(), "X".into(), 1.0, 1), 1);
        assert_eq!(store.add("B".into(), "Y".into(), 2.0, 2), 2);
        assert_eq!(store.add("C".into(), "Z".into(), 3.0, 3), 3);
    }

    #[test]
    fn deleting_a_middle_item_does_not_free_its_id() {
        let mut store = Inventory::new();
        store.add("A".into(), "X".into(), 1.0, 1);
        store.add("B".into(), "Y".into(), 2.0, 2);
        store.add("C".into(), "Z".into(), 3.0, 3);

        assert!(store.remove(2));
        assert_eq!(store.add("D".into(), "W".into(), 4.0, 4), 4);
    }

    // Pinned quirk: max+1 assignment means the highest id is reusable once
    // its item is gone.
    #[test]
    fn reuses_id_after_deleting_max() {
        let mut store = Inventory::new();
        store.add("A".into(), "X".into(), 1.0, 1);
        store.add("B".into(), "Y".into(), 2.0, 2);

        assert!(store.remove(2));
        assert_eq!(store.add("C".into(), "Z".into(), 3.0, 3), 2);
    }

    #[test]
    fn remove_missing_id_leaves_store_unchanged() {
        let mut store = store_with_one();
        assert!(!store.remove(42));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn removal_keeps_store_order() {
        let mut store = Inventory::new();
        store.add("A".into(), "X".into(), 1.0, 1);
        store.add("B".into(), "Y".into(), 2.0, 2);
        store.add("C".into(), "Z".into(), 3.0, 3);

        store.remove(2);
        let ids: Vec<u32> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn update_price_reflects_in_current_and_history() {
        let mut store = store_with_one();
        assert_eq!(store.update_price(1, 8.50).unwrap(), 8.50);

        let item = store.find(1).unwrap();
        assert_eq!(item.price, 8.50);
        assert_eq!(item.price_history, vec![9.99, 8.50]);
    }

    #[test]
    fn update_price_on_missing_id_is_not_found() {
        let mut store = store_with_one();
        assert!(matches!(
            store.update_price(9, 1.0),
            Err(StocklogError::ItemNotFound(9))
        ));
    }

    #[test]
    fn increase_and_decrease_round_trip() {
        let mut store = store_with_one();
        assert_eq!(store.increase_stock(1, 5).unwrap(), 15);
        assert_eq!(
            store.decrease_stock(1, 15).unwrap(),
            DecreaseOutcome::Applied { quantity: 0 }
        );
        assert_eq!(store.find(1).unwrap().stock_history, vec![10, 15, 0]);
    }

    #[test]
    fn insufficient_decrease_reports_available_quantity() {
        let mut store = store_with_one();
        assert_eq!(
            store.decrease_stock(1, 100).unwrap(),
            DecreaseOutcome::Insufficient { available: 10 }
        );
        let item = store.find(1).unwrap();
        assert_eq!(item.quantity, 10);
        assert_eq!(item.stock_history, vec![10]);
    }

    // Full session from the original tool, end to end.
    #[test]
    fn add_update_decrease_delete_scenario() {
        let mut store = Inventory::new();
        let id = store.add("Widget".into(), "Acme".into(), 9.99, 10);
        assert_eq!(id, 1);

        store.update_price(id, 8.50).unwrap();
        assert_eq!(store.find(id).unwrap().price, 8.50);
        assert_eq!(store.find(id).unwrap().price_history, vec![9.99, 8.50]);

        assert_eq!(store.increase_stock(id, 5).unwrap(), 15);
        assert_eq!(store.find(id).unwrap().stock_history, vec![10, 15]);

        assert_eq!(
            store.decrease_stock(id, 100).unwrap(),
            DecreaseOutcome::Insufficient { available: 15 }
        );
        assert_eq!(store.find(id).unwrap().quantity, 15);

        assert!(store.remove(id));
        assert!(store.is_empty());
        assert_eq!(store.add("Next".into(), "Acme".into(), 1.0, 1), 1);
    }
}
