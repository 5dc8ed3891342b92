// src/scrape/scrape.rs

use std::error::Error;

use crate::core::net;
use crate::data::DerivedSpec;
use crate::dedup::deduplicate;
use crate::derive::derive_specs;
use crate::params::Category;

use super::listings::{extract_specs, split_entries};

/// Fetch and process one camera category end to end:
/// fetch → split → extract → deduplicate → derive.
///
/// Zero recognizable fragments is a hard stop; it means the page format
/// changed and no partial result would be meaningful.
pub fn collect_category(cat: Category) -> Result<Vec<DerivedSpec>, Box<dyn Error>> {
    println!("Fetching {}", cat.url());
    logf!("fetching {} category", cat.page_id());

    let page = net::fetch_page(cat.url())?;
    logd!("response length: {}", page.len());

    let entries = split_entries(&page);
    if entries.is_empty() {
        loge!("no product entries at {}", cat.url());
        return Err(format!(
            "no product entries found at {} (page format changed?)",
            cat.url()
        )
        .into());
    }
    println!("Found {} entries", entries.len());

    let specs = extract_specs(&entries)?;
    let specs = deduplicate(specs);
    logf!("{}: {} specs after deduplication", cat.page_id(), specs.len());

    Ok(derive_specs(specs, cat.use_size_table()))
}
