// src/scrape/listings.rs
//
// Per-fragment extraction of sensor specs from listing page text.
//
// The markup coupling lives entirely in this file: entry boundary patterns
// for the two known page formats, and the field patterns inside a fragment.
// Patterns are compiled once into process-wide statics.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::sanitize::clean_text;
use crate::data::CameraSpec;

// Entry boundaries. The current format wraps each product in a
// productlist__product row ending at its best-price div; the previous
// format used productlist__item rows ending at the price cell. Both carry
// the data-name attribute used for the product name.
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)class="row productlist__product.+?<div class="productlist__bestpriceoffer">"#)
        .expect("entry pattern")
});
static ENTRY_LEGACY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)class="productlist__item.+?<div class="productlist__price">"#)
        .expect("legacy entry pattern")
});

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-name="(.+?)""#).expect("name pattern"));
static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([\d.]+)x([\d.]+)mm").expect("size pattern"));
static TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class="productlist__additionalfilter">\s+(1/[\d.]+)&quot;\s+</div>"#)
        .expect("type pattern")
});
static MPIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class="productlist__additionalfilter">\s+([\d.]+) Megapixel\s+</div>"#)
        .expect("mpix pattern")
});
static PITCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class="productlist__additionalfilter">\s+([\d.]+)µm\s+</div>"#)
        .expect("pitch pattern")
});
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class="productlist__additionalfilter">\s+(\d{4})\s+</div>"#)
        .expect("year pattern")
});

/// Split a full listing page into per-product fragments.
/// Tries the current entry pattern first, then the legacy one.
/// An empty result means neither format matched.
pub fn split_entries(page: &str) -> Vec<&str> {
    let entries: Vec<&str> = ENTRY_RE.find_iter(page).map(|m| m.as_str()).collect();
    if !entries.is_empty() {
        return entries;
    }
    ENTRY_LEGACY_RE.find_iter(page).map(|m| m.as_str()).collect()
}

/// Extract the sensor spec from one product fragment.
///
/// The name is required; a fragment without one aborts the whole run,
/// since it means the page format changed. Everything else is optional
/// and simply stays unset when the pattern does not match.
pub fn extract_spec(entry: &str) -> Result<CameraSpec, Box<dyn std::error::Error>> {
    let name = NAME_RE
        .captures(entry)
        .map(|c| clean_text(&c[1]))
        .ok_or_else(|| {
            let snippet: String = entry.chars().take(80).collect();
            format!("listing fragment without product name: {snippet}…")
        })?;

    let sensor_type = TYPE_RE.captures(entry).map(|c| s!(&c[1]));

    let size = SIZE_RE.captures(entry).and_then(|c| {
        let w = c[1].parse::<f64>().ok()?;
        let h = c[2].parse::<f64>().ok()?;
        Some((w, h))
    });

    let pitch = PITCH_RE.captures(entry).and_then(|c| c[1].parse().ok());
    let mpix = MPIX_RE.captures(entry).and_then(|c| c[1].parse().ok());
    let year = YEAR_RE.captures(entry).and_then(|c| c[1].parse().ok());

    Ok(CameraSpec {
        name,
        sensor_type,
        size,
        pitch,
        mpix,
        year,
    })
}

/// Extract specs from all fragments, preserving input order.
pub fn extract_specs(entries: &[&str]) -> Result<Vec<CameraSpec>, Box<dyn std::error::Error>> {
    entries.iter().map(|e| extract_spec(e)).collect()
}
