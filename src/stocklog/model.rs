/// Outcome of a stock decrease. Asking for more than is on hand is a normal
/// user condition, not an error: the item is left untouched and the caller
/// gets the available quantity back to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecreaseOutcome {
    Applied { quantity: u32 },
    Insufficient { available: u32 },
}

/// One inventory record: current price and quantity plus the full change
/// history of each. Histories are append-only and always end in the current
/// value; they are seeded at creation, so they are never empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub quantity: u32,
    pub price_history: Vec<f64>,
    pub stock_history: Vec<u32>,
}

impl Item {
    pub fn new(id: u32, name: String, brand: String, price: f64, quantity: u32) -> Self {
        Self {
            id,
            name,
            brand,
            price,
            quantity,
            price_history: vec![price],
            stock_history: vec![quantity],
        }
    }

    /// Set a new current price and log it.
    pub fn update_price(&mut self, new_price: f64) {
        self.price = new_price;
        self.price_history.push(self.price);
    }

    /// Add to the quantity on hand and log the new total.
    pub fn increase_stock(&mut self, amount: u32) -> u32 {
        self.quantity += amount;
        self.stock_history.push(self.quantity);
        self.quantity
    }

    /// Remove from the quantity on hand and log the new total. A request
    /// larger than the current quantity is refused whole: no partial
    /// decrement, no history entry.
    pub fn decrease_stock(&mut self, amount: u32) -> DecreaseOutcome {
        if amount > self.quantity {
            return DecreaseOutcome::Insufficient {
                available: self.quantity,
            };
        }
        self.quantity -= amount;
        self.stock_history.push(self.quantity);
        DecreaseOutcome::Applied {
            quantity: self.quantity,
        }
    }
}
