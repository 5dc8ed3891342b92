// src/runner.rs

use std::error::Error;
use std::path::PathBuf;

use chrono::Local;

use crate::{
    file::{ensure_directory, write_page},
    order::{SortKey, sorted_by},
    params::{ABOUT_FILE, Category, INDEX_FILE, Params},
    render::{render_about, render_page},
    scrape::collect_category,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: scrape all categories and write the static pages.
///
/// One page per category, a combined index page, and the static about
/// page. All spec tables are sorted by pixel pitch descending.
pub fn run(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    ensure_directory(&params.out_dir)?;

    let generated = Local::now();
    let mut written = Vec::new();
    let mut all = Vec::new();

    for cat in Category::ALL {
        let specs = collect_category(cat)?;
        all.extend(specs.clone());

        let sorted = sorted_by(specs, SortKey::Pitch, true);
        let page = render_page(cat.title(), &sorted, cat.page_id(), Some(generated));
        written.push(write_page(&params.out_dir, cat.page_file(), &page)?);
    }

    let all = sorted_by(all, SortKey::Pitch, true);
    let index = render_page("All Cameras", &all, "all", Some(generated));
    written.push(write_page(&params.out_dir, INDEX_FILE, &index)?);

    written.push(write_page(&params.out_dir, ABOUT_FILE, &render_about())?);

    println!("HTML files written to {}", params.out_dir.display());
    logf!("run complete, {} files written", written.len());

    Ok(RunSummary {
        files_written: written,
    })
}
