use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stocklog")]
#[command(about = "Command-line inventory tracker with price and stock history", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file to use (overrides the configured data file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item
    #[command(alias = "a")]
    Add {
        /// Item name
        name: String,

        /// Brand name
        brand: String,

        /// Initial price
        price: f64,

        /// Initial quantity
        quantity: u32,
    },

    /// List items
    #[command(alias = "ls")]
    List {
        /// Show full price and stock histories
        #[arg(long)]
        history: bool,
    },

    /// Remove an item
    #[command(alias = "rm")]
    Remove {
        /// 3-digit item ID (e.g. 001)
        id: String,
    },

    /// Update the price of an item
    Price {
        /// 3-digit item ID (e.g. 001)
        id: String,

        /// New price
        new_price: f64,
    },

    /// Increase the stock of an item
    #[command(name = "stock-in")]
    StockIn {
        /// 3-digit item ID (e.g. 001)
        id: String,

        /// Amount to add
        amount: u32,
    },

    /// Decrease the stock of an item
    #[command(name = "stock-out")]
    StockOut {
        /// 3-digit item ID (e.g. 001)
        id: String,

        /// Amount to remove
        amount: u32,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
