use clap::Parser;
use colored::*;
use std::path::PathBuf;
use stocklog::api::{StocklogApi, ConfigAction};
use stocklog::commands::{CmdMessage, MessageLevel};
use stocklog::config::StocklogConfig;
use stocklog::error::Result;
use stocklog::model::Item;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StocklogApi,
    config_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    if let Some(warning) = ctx.api.load_warning().cloned() {
        print_messages(&[warning]);
    }

    match cli.command {
        Some(Commands::Add {
            name,
            brand,
            price,
            quantity,
        }) => handle_add(&mut ctx, name, brand, price, quantity),
        Some(Commands::List { history }) => handle_list(&ctx, history),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::Price { id, new_price }) => handle_price(&mut ctx, id, new_price),
        Some(Commands::StockIn { id, amount }) => handle_stock_in(&mut ctx, id, amount),
        Some(Commands::StockOut { id, amount }) => handle_stock_out(&mut ctx, id, amount),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = StocklogConfig::load(&config_dir).unwrap_or_default();

    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config_dir.join(config.get_data_file()));
    let api = StocklogApi::open(data_file);

    Ok(AppContext { api, config_dir })
}

fn save_changes(ctx: &AppContext) {
    // Save failure is reported, never fatal: the in-memory result of this
    // run simply was not persisted.
    if let Err(e) = ctx.api.save() {
        eprintln!(
            "{}",
            format!("Warning: changes not persisted: {}", e).yellow()
        );
    }
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    brand: String,
    price: f64,
    quantity: u32,
) -> Result<()> {
    let result = ctx.api.add_item(name, brand, price, quantity)?;
    save_changes(ctx);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, history: bool) -> Result<()> {
    let result = ctx.api.list_items()?;
    if history {
        print_full_items(&result.listed_items);
    } else {
        print_items(&result.listed_items);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.remove_item(&id)?;
    if !result.has_errors() {
        save_changes(ctx);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_price(ctx: &mut AppContext, id: String, new_price: f64) -> Result<()> {
    let result = ctx.api.update_price(&id, new_price)?;
    if !result.has_errors() {
        save_changes(ctx);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_stock_in(ctx: &mut AppContext, id: String, amount: u32) -> Result<()> {
    let result = ctx.api.increase_stock(&id, amount)?;
    if !result.has_errors() {
        save_changes(ctx);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_stock_out(ctx: &mut AppContext, id: String, amount: u32) -> Result<()> {
    let result = ctx.api.decrease_stock(&id, amount)?;
    if !result.has_errors() {
        save_changes(ctx);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("data-file"), None) => ConfigAction::ShowKey("data-file".to_string()),
        (Some("data-file"), Some(v)) => ConfigAction::SetDataFile(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = stocklog::commands::config::run(&ctx.config_dir, action)?;
    if let Some(config) = &result.config {
        println!("data-file = {}", config.get_data_file());
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_items(items: &[Item]) {
    if items.is_empty() {
        return;
    }

    let name_width = column_width("Name", items.iter().map(|i| i.name.as_str()));
    let brand_width = column_width("Brand", items.iter().map(|i| i.brand.as_str()));

    println!(
        "{}",
        format!(
            "ID   {}  {}  Price     Qty",
            pad("Name", name_width),
            pad("Brand", brand_width)
        )
        .dimmed()
    );

    for item in items {
        println!(
            "{}  {}  {}  {:<8}  {}",
            format!("{:03}", item.id).yellow(),
            pad(&item.name, name_width),
            pad(&item.brand, brand_width),
            format!("P{:.2}", item.price),
            item.quantity
        );
    }
}

fn print_full_items(items: &[Item]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("ID: {}", format!("{:03}", item.id).yellow());
        println!("Name: {}", item.name.bold());
        println!("Brand: {}", item.brand);
        println!("Price: P{:.2}", item.price);
        println!("Quantity: {} items", item.quantity);
        println!("Price History: {}", join_history(&item.price_history, |p| {
            format!("P{:.2}", p)
        }));
        println!("Stock History: {}", join_history(&item.stock_history, |q| {
            format!("{} items", q)
        }));
    }
}

fn join_history<T, F: Fn(&T) -> String>(values: &[T], render: F) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        out.push_str(&render(value));
        if i < values.len() - 1 {
            out.push_str(" | ");
        } else {
            out.push_str(" (current)");
        }
    }
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.width())
        .max()
        .unwrap_or(0)
        .max(header.width())
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
