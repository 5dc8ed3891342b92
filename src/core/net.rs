// src/core/net.rs

// Blocking HTTP GET. The pipeline is synchronous end to end.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::COOKIE;

use crate::params::{PAGING_COOKIE, USER_AGENT};

/// Fetch a listing page and return the body as text.
///
/// Sends a fixed browser User-Agent and the pagination cookie that makes
/// the site return the whole category on one page.
pub fn fetch_page(url: &str) -> Result<String, Box<dyn std::error::Error>> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()?;

    let resp = client.get(url).header(COOKIE, PAGING_COOKIE).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}
