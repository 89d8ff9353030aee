mod cache;
pub use cache::*;
mod html;
pub use html::*;

use anyhow::Result;
use loadout_core::RawEntry;
use tracing::info;

/// Downloads `url` and extracts one entry per qualifying row under `row_selector`.
pub async fn fetch_entries(url: &str, row_selector: &str) -> Result<Vec<RawEntry>> {
    let html = loadout_utils::get::<String>(url, None).await?;
    let entries = HtmlTable::new(&html, row_selector)?.entries()?;
    info!("fetched {} catalog rows from {}", entries.len(), url);
    Ok(entries)
}
