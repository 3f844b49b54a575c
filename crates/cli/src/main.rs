//! Interactive console front end for the inventory.
//!
//! Thin wrapper over `stockroom-inventory` and `stockroom-storage`: all
//! validation and persistence rules live in those crates. The snapshot is
//! saved after every successful mutation and again on exit, so an interrupt
//! loses nothing.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;

use stockroom_inventory::InventoryManager;
use stockroom_storage::{SnapshotStore, StorageError, TicketWriter};

type InputLines = io::Lines<io::StdinLock<'static>>;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let data_dir =
        PathBuf::from(std::env::var("STOCKROOM_DATA_DIR").unwrap_or_else(|_| "data".to_string()));
    let store = SnapshotStore::new(data_dir.join("inventory.json"));
    let tickets = TicketWriter::new(data_dir.join("tickets"));

    let mut manager = match store.load() {
        Ok(manager) => manager,
        Err(err @ StorageError::Corrupt { .. }) => {
            tracing::warn!("{err}; starting with an empty inventory");
            InventoryManager::new()
        }
        Err(err) => return Err(err).context("failed to load the inventory snapshot"),
    };

    let mut lines = io::stdin().lock().lines();

    loop {
        println!();
        println!("Inventory management");
        println!("1. View inventory");
        println!("2. Add product");
        println!("3. Sell/buy (stock adjustment)");
        println!("4. Exit");

        let Some(choice) = prompt(&mut lines, "Select an option: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => show_inventory(&manager),
            "2" => add_product(&mut lines, &mut manager, &store)?,
            "3" => adjust_stock(&mut lines, &mut manager, &store, &tickets)?,
            "4" => break,
            _ => println!("Invalid option, try again."),
        }
    }

    store
        .save(&manager)
        .context("failed to save the inventory snapshot")?;
    println!("Changes saved. Goodbye.");
    Ok(())
}

fn show_inventory(manager: &InventoryManager) {
    if manager.is_empty() {
        println!("No products in the inventory.");
        return;
    }

    let mut products: Vec<_> = manager.list_products().collect();
    products.sort_by_key(|product| (product.name().to_lowercase(), product.id().clone()));

    println!();
    println!("{:<10} {:<25} {:>10} {:>8}", "ID", "Name", "Price", "Stock");
    println!("{}", "-".repeat(60));
    for product in products {
        println!(
            "{:<10} {:<25} {:>10.2} {:>8}",
            product.id(),
            product.name(),
            product.price(),
            product.stock()
        );
    }
}

fn add_product(
    lines: &mut InputLines,
    manager: &mut InventoryManager,
    store: &SnapshotStore,
) -> anyhow::Result<()> {
    let Some(id) = prompt_text(lines, "Product id: ")? else {
        return Ok(());
    };
    let Some(name) = prompt_text(lines, "Product name: ")? else {
        return Ok(());
    };
    let Some(price) = prompt_f64(lines, "Price: ", 0.0)? else {
        return Ok(());
    };
    let Some(stock) = prompt_i64(lines, "Initial stock: ", 0)? else {
        return Ok(());
    };

    match manager.add_product(&id, &name, price, stock) {
        Ok(product) => println!("Product {} added.", product.id()),
        Err(err) => {
            println!("Error: {err}");
            return Ok(());
        }
    }
    persist(store, manager);
    Ok(())
}

fn adjust_stock(
    lines: &mut InputLines,
    manager: &mut InventoryManager,
    store: &SnapshotStore,
    tickets: &TicketWriter,
) -> anyhow::Result<()> {
    let Some(id) = prompt_text(lines, "Product id: ")? else {
        return Ok(());
    };
    let Some(kind) = prompt_text(lines, "Type S to sell or B to buy: ")? else {
        return Ok(());
    };
    let Some(quantity) = prompt_i64(lines, "Quantity: ", 1)? else {
        return Ok(());
    };

    let delta = if kind.eq_ignore_ascii_case("s") {
        -quantity
    } else if kind.eq_ignore_ascii_case("b") {
        quantity
    } else {
        println!("Invalid option, use S or B.");
        return Ok(());
    };

    let new_stock = match manager.adjust_stock(&id, delta) {
        Ok(stock) => stock,
        Err(err) => {
            println!("Error: {err}");
            return Ok(());
        }
    };
    println!("Stock updated: {id} now has {new_stock} units.");
    persist(store, manager);

    if delta < 0 {
        offer_ticket(lines, manager, tickets)?;
    }
    Ok(())
}

fn offer_ticket(
    lines: &mut InputLines,
    manager: &InventoryManager,
    tickets: &TicketWriter,
) -> anyhow::Result<()> {
    let Some(answer) = prompt_text(lines, "Print the ticket? (Y/N): ")? else {
        return Ok(());
    };
    if !answer.eq_ignore_ascii_case("y") {
        return Ok(());
    }

    let Some(transaction) = manager.transactions().last() else {
        return Ok(());
    };
    let receipt = match manager.generate_receipt(transaction) {
        Ok(receipt) => receipt,
        Err(err) => {
            println!("Error: {err}");
            return Ok(());
        }
    };

    match tickets.write(&receipt) {
        Ok(path) => {
            println!();
            print!("{receipt}");
            println!("Ticket saved at {}", path.display());
        }
        Err(err) => tracing::error!("{err}"),
    }
    Ok(())
}

fn persist(store: &SnapshotStore, manager: &InventoryManager) {
    // A failed save never loses in-memory state; the prior snapshot on disk
    // is intact and the next successful save will catch up.
    if let Err(err) = store.save(manager) {
        tracing::error!("{err}");
    }
}

fn prompt(lines: &mut InputLines, message: &str) -> anyhow::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn prompt_text(lines: &mut InputLines, message: &str) -> anyhow::Result<Option<String>> {
    loop {
        let Some(value) = prompt(lines, message)? else {
            return Ok(None);
        };
        if !value.is_empty() {
            return Ok(Some(value));
        }
        println!("The text cannot be empty.");
    }
}

fn prompt_f64(lines: &mut InputLines, message: &str, min: f64) -> anyhow::Result<Option<f64>> {
    loop {
        let Some(raw) = prompt(lines, message)? else {
            return Ok(None);
        };
        match raw.parse::<f64>() {
            Ok(value) if value >= min => return Ok(Some(value)),
            Ok(_) => println!("The value must be at least {min}."),
            Err(_) => println!("Invalid input, enter a number."),
        }
    }
}

fn prompt_i64(lines: &mut InputLines, message: &str, min: i64) -> anyhow::Result<Option<i64>> {
    loop {
        let Some(raw) = prompt(lines, message)? else {
            return Ok(None);
        };
        match raw.parse::<i64>() {
            Ok(value) if value >= min => return Ok(Some(value)),
            Ok(_) => println!("The value must be at least {min}."),
            Err(_) => println!("Invalid input, enter a whole number."),
        }
    }
}
