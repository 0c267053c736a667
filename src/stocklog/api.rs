//! # API Facade
//!
//! Single entry point for all stocklog operations. The facade owns the
//! in-memory [`Inventory`] for the session: it fills the store from the data
//! file when opened, dispatches to the command layer, and writes the store
//! back out on an explicit [`StocklogApi::save`]. Nothing here prints;
//! results flow back as [`CmdResult`] structures for the UI to render.
//!
//! Input normalization lives here too: user-typed ids must be exactly three
//! digit characters (the `001`-`999` form the data format displays), and
//! prices must be finite and non-negative. The store itself trusts its
//! inputs.

use crate::codec;
use crate::commands;
use crate::error::{Result, StocklogError};
use crate::store::Inventory;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct StocklogApi {
    store: Inventory,
    data_file: PathBuf,
    load_warning: Option<CmdMessage>,
}

impl StocklogApi {
    /// Open the inventory at `data_file`. A missing file is a normal fresh
    /// start; any other load failure also starts empty but carries a warning
    /// for the UI (the file is not the authority until the next save).
    pub fn open(data_file: PathBuf) -> Self {
        let (store, load_warning) = match codec::load(&data_file) {
            Ok(items) => (Inventory::from_items(items), None),
            Err(StocklogError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                (Inventory::new(), None)
            }
            Err(err) => (
                Inventory::new(),
                Some(CmdMessage::warning(format!(
                    "Could not read {}: {}. Starting with an empty inventory.",
                    data_file.display(),
                    err
                ))),
            ),
        };

        Self {
            store,
            data_file,
            load_warning,
        }
    }

    pub fn load_warning(&self) -> Option<&CmdMessage> {
        self.load_warning.as_ref()
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Persist the current store. On failure the in-memory state is
    /// untouched and remains the authority; the caller decides how to
    /// report it.
    pub fn save(&self) -> Result<()> {
        codec::save(self.store.items(), &self.data_file)
    }

    pub fn add_item(
        &mut self,
        name: String,
        brand: String,
        price: f64,
        quantity: u32,
    ) -> Result<CmdResult> {
        check_price(price)?;
        commands::add::run(&mut self.store, name, brand, price, quantity)
    }

    pub fn list_items(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn remove_item(&mut self, id: &str) -> Result<CmdResult> {
        let id = parse_item_id(id)?;
        commands::remove::run(&mut self.store, id)
    }

    pub fn update_price(&mut self, id: &str, new_price: f64) -> Result<CmdResult> {
        let id = parse_item_id(id)?;
        check_price(new_price)?;
        commands::price::run(&mut self.store, id, new_price)
    }

    pub fn increase_stock(&mut self, id: &str, amount: u32) -> Result<CmdResult> {
        let id = parse_item_id(id)?;
        commands::stock::increase(&mut self.store, id, amount)
    }

    pub fn decrease_stock(&mut self, id: &str, amount: u32) -> Result<CmdResult> {
        let id = parse_item_id(id)?;
        commands::stock::decrease(&mut self.store, id, amount)
    }
}

/// User-typed ids are the zero-padded 3-digit form the tool displays.
fn parse_item_id(input: &str) -> Result<u32> {
    if input.len() != 3 || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(StocklogError::Api(format!(
            "Invalid ID '{}': enter a 3-digit ID from 001-999",
            input
        )));
    }
    input
        .parse()
        .map_err(|_| StocklogError::Api(format!("Invalid ID '{}'", input)))
}

fn check_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(StocklogError::Api(format!(
            "Invalid price '{}': enter a non-negative number",
            price
        )));
    }
    Ok(())
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_on_missing_file_starts_empty_without_warning() {
        let dir = tempdir().unwrap();
        let api = StocklogApi::open(dir.path().join("inventory.txt"));
        assert!(api.load_warning().is_none());
        assert!(api.list_items().unwrap().listed_items.is_empty());
    }

    #[test]
    fn save_then_open_round_trips_the_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.txt");

        let mut api = StocklogApi::open(path.clone());
        api.add_item("Widget".into(), "Acme".into(), 9.99, 10)
            .unwrap();
        api.update_price("001", 8.50).unwrap();
        api.save().unwrap();

        let reopened = StocklogApi::open(path);
        let items = reopened.list_items().unwrap().listed_items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price_history, vec![9.99, 8.50]);
    }

    #[test]
    fn ids_must_be_three_digits() {
        let dir = tempdir().unwrap();
        let mut api = StocklogApi::open(dir.path().join("inventory.txt"));

        assert!(api.remove_item("1").is_err());
        assert!(api.remove_item("12a").is_err());
        assert!(api.remove_item("1234").is_err());
        assert!(api.remove_item("001").unwrap().has_errors()); // valid form, absent id
    }

    #[test]
    fn negative_price_is_rejected_before_the_store_sees_it() {
        let dir = tempdir().unwrap();
        let mut api = StocklogApi::open(dir.path().join("inventory.txt"));

        assert!(api.add_item("W".into(), "A".into(), -1.0, 1).is_err());
        assert!(api.list_items().unwrap().listed_items.is_empty());
    }
}
