// src/scrape/mod.rs
mod listings;
mod scrape;

pub use listings::{extract_spec, extract_specs, split_entries};
pub use scrape::collect_category;
