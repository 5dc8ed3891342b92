// src/render.rs
//
// Static HTML output. One template for the spec tables, one static about
// page. Styling is intentionally minimal; the pages are plain reference
// tables.

use chrono::{DateTime, Local};
use maud::{DOCTYPE, Markup, html};

use crate::data::DerivedSpec;
use crate::params::{ABOUT_FILE, INDEX_FILE};

// (page id, href, nav label)
const NAV: &[(&str, &str, &str)] = &[
    ("all", INDEX_FILE, "All Cameras"),
    ("compact", "compact.html", "Compact"),
    ("dslr", "dslr.html", "DSLR"),
    ("dslm", "dslm.html", "Mirrorless"),
    ("about", ABOUT_FILE, "About"),
];

/// Render one spec table page.
///
/// `page` is the nav id of the active page ("compact", "dslr", "dslm",
/// "all"); `generated` stamps the footer when given.
pub fn render_page(
    title: &str,
    specs: &[DerivedSpec],
    page: &str,
    generated: Option<DateTime<Local>>,
) -> String {
    layout(title, page, generated, html! {
        p.count { (specs.len()) " cameras, sorted by pixel pitch (largest first)" }
        table {
            thead {
                tr {
                    th { "Camera" }
                    th { "Sensor size" }
                    th { "Area (mm²)" }
                    th { "Resolution" }
                    th { "Pixel pitch" }
                    th { "Year" }
                }
            }
            tbody {
                @for d in specs {
                    (spec_row(d))
                }
            }
        }
        p.footnote { "* size derived from the sensor type code" }
    })
    .into_string()
}

/// Render the static about page.
pub fn render_about() -> String {
    layout("About", "about", None, html! {
        h2 { "What is pixel pitch?" }
        p {
            "Pixel pitch is the center-to-center spacing between adjacent "
            "sensor pixels, in micrometers. For a given sensor generation, "
            "a larger pitch means each pixel collects more light."
        }
        p {
            "Where a listing does not advertise the pitch directly, it is "
            "computed from the sensor area and the resolution. Sensor sizes "
            "given only as a fractional-inch type code (e.g. 1/2.3\") are "
            "mapped to real-world dimensions, since the nominal codes "
            "overstate the actual sensor size."
        }
        p {
            "Data is scraped from the geizhals price comparison listings. "
            "Missing values simply mean the listing did not state them."
        }
    })
    .into_string()
}

fn layout(
    title: &str,
    page: &str,
    generated: Option<DateTime<Local>>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " – Pixel Pitch" }
                style { (STYLE) }
            }
            body {
                nav {
                    @for (id, href, label) in NAV {
                        @if *id == page {
                            a.active href=(href) { (label) }
                        } @else {
                            a href=(href) { (label) }
                        }
                    }
                }
                h1 { (title) }
                (content)
                footer {
                    @if let Some(ts) = generated {
                        p { "Generated " (ts.format("%Y-%m-%d %H:%M")) }
                    }
                }
            }
        }
    }
}

fn spec_row(d: &DerivedSpec) -> Markup {
    html! {
        tr {
            td { (d.spec.name) }
            td {
                @match d.size {
                    Some((w, h)) => {
                        (format!("{w:.1}×{h:.1} mm"))
                        @if d.size_is_inferred() { "*" }
                    }
                    None => { "?" }
                }
            }
            td { (opt_num(d.area, 1, "")) }
            td { (opt_num(d.spec.mpix, 1, " MP")) }
            td { (opt_num(d.pitch, 2, " µm")) }
            td {
                @match d.spec.year {
                    Some(y) => { (y) }
                    None => { "?" }
                }
            }
        }
    }
}

fn opt_num(v: Option<f64>, decimals: usize, unit: &str) -> String {
    match v {
        Some(v) => format!("{v:.decimals$}{unit}"),
        None => s!("?"),
    }
}

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em auto; max-width: 60em; }
nav a { margin-right: 1em; }
nav a.active { font-weight: bold; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 0.3em 0.6em; border-bottom: 1px solid #ddd; }
.footnote, footer { color: #777; font-size: 0.85em; }
";
