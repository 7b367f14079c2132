//! Item Commands
//!
//! Catalog listing and submission of new postings.

use lost_found_domain::{seed_catalog, Item, NewItem};

use super::{encode, simulate_latency, CommandResult};

/// The board's postings. Always the seeded demo catalog.
pub async fn list_items() -> CommandResult<Vec<Item>> {
    let items = seed_catalog();
    log::info!("[cmd] list_items: {} items", items.len());
    Ok(items)
}

/// Accepts a validated posting. The posting is not stored: the catalog stays
/// read-only until a real backend exists.
pub async fn submit_item(item: &NewItem, delay_ms: u32) -> CommandResult<()> {
    let body = encode(item)?;
    log::debug!("[cmd] submit_item request: {} bytes", body.len());
    simulate_latency("submit_item", delay_ms).await;
    log::info!("[cmd] submit_item accepted {} \"{}\" (not stored)", item.item_type.as_str(), item.title);
    Ok(())
}
