//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable that drives `wardrobe_core` end-to-end
//!   against a throwaway in-memory store.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};
use wardrobe_core::db::open_db_in_memory;
use wardrobe_core::{
    ItemAction, ItemService, LogNotifier, NewItem, SqliteItemRepository,
    SqliteReminderLogRepository, StatusFacet,
};

fn main() -> ExitCode {
    let log_dir = std::env::temp_dir().join("wardrobe-logs");
    if let Some(dir) = log_dir.to_str() {
        if let Err(message) = wardrobe_core::init_logging(wardrobe_core::default_log_level(), dir)
        {
            eprintln!("logging disabled: {message}");
        }
    }

    println!("wardrobe_core version={}", wardrobe_core::core_version());

    match run_smoke_flow() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("smoke flow failed: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run_smoke_flow() -> Result<(), String> {
    let now = epoch_ms_now();

    let conn = open_db_in_memory().map_err(|err| err.to_string())?;
    let service = ItemService::new(SqliteItemRepository::new(&conn));
    let ledger = SqliteReminderLogRepository::new(&conn);

    let shirt = service
        .create_item(sample_item("Blue Shirt", "Tops", "Blue"), now)
        .map_err(|err| err.to_string())?;
    service
        .create_item(sample_item("Black Jeans", "Bottoms", "Black"), now)
        .map_err(|err| err.to_string())?;

    service
        .apply_action(shirt.id, ItemAction::Use, now)
        .map_err(|err| err.to_string())?;

    let available = service
        .dashboard("", StatusFacet::Available, now)
        .map_err(|err| err.to_string())?;
    let unavailable = service
        .dashboard("", StatusFacet::Unavailable, now)
        .map_err(|err| err.to_string())?;
    println!("dashboard available={} unavailable={}", available.len(), unavailable.len());

    let delivered = service
        .evaluate_reminders(&ledger, &LogNotifier, now)
        .map_err(|err| err.to_string())?;
    println!("reminders delivered={}", delivered.len());

    Ok(())
}

fn sample_item(name: &str, category: &str, color: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        category: category.to_string(),
        style: "Casual".to_string(),
        description: String::new(),
        colors: vec![color.to_string()],
        image_paths: Vec::new(),
    }
}

fn epoch_ms_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
