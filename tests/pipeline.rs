// tests/pipeline.rs
//
// End-to-end over canned page text: split → extract → dedup → derive →
// sort → render → write. Network fetching is exercised nowhere; the
// pipeline is fed the same markup shapes the live pages use.

use std::fs;
use std::path::PathBuf;

use pixelpitch::data::CameraSpec;
use pixelpitch::dedup::deduplicate;
use pixelpitch::derive::derive_specs;
use pixelpitch::file::{ensure_directory, write_page};
use pixelpitch::order::{SortKey, sorted_by};
use pixelpitch::render::render_page;
use pixelpitch::scrape::{extract_specs, split_entries};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pixelpitch_e2e_{name}"));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn entry(name: &str, filters: &[&str]) -> String {
    let mut s = format!(r#"<div class="row productlist__product" data-name="{name}">"#);
    for f in filters {
        s.push_str(&format!(
            "<div class=\"productlist__additionalfilter\">\n  {f}\n</div>"
        ));
    }
    s.push_str(r#"<div class="productlist__bestpriceoffer">"#);
    s
}

fn sample_page() -> String {
    let mut page = String::from("<html><body>");
    // two color variants of the same compact camera
    page.push_str(&entry(
        "Acme PowerZoom 9 schwarz (PZ9-B)",
        &["1/2.3&quot;", "16.0 Megapixel", "2014"],
    ));
    page.push_str(&entry(
        "Acme PowerZoom 9 silber (PZ9-S)",
        &["1/2.3&quot;", "16.0 Megapixel", "2015"],
    ));
    // a model with an advertised pitch
    page.push_str(&entry(
        "Birdo Snap Mini",
        &["1/1.7&quot;", "12.1 Megapixel", "1.9µm", "2013"],
    ));
    // a listing with nothing but a name
    page.push_str(&entry("Cryptic Cam Z", &[]));
    page.push_str("</body></html>");
    page
}

#[test]
fn canned_page_flows_through_whole_pipeline() {
    let page = sample_page();

    let entries = split_entries(&page);
    assert_eq!(entries.len(), 4);

    let specs = extract_specs(&entries).unwrap();
    assert_eq!(specs.len(), 4);
    for spec in &specs {
        assert!(!spec.name.is_empty());
        assert!(!spec.name.contains("  "));
    }

    let specs = deduplicate(specs);
    // the two PowerZoom colorways merged into one
    assert_eq!(specs.len(), 3);
    let merged = specs
        .iter()
        .find(|s| s.name.starts_with("Acme PowerZoom"))
        .unwrap();
    assert_eq!(merged.name, "Acme PowerZoom 9");
    assert_eq!(merged.year, Some(2014));

    let derived = derive_specs(specs, true);
    let derived = sorted_by(derived, SortKey::Pitch, true);

    // advertised 1.9µm beats the computed compact pitch; unknown sorts last
    assert_eq!(derived[0].spec.name, "Birdo Snap Mini");
    assert_eq!(derived[0].pitch, Some(1.9));
    assert_eq!(derived.last().unwrap().spec.name, "Cryptic Cam Z");
    assert_eq!(derived.last().unwrap().pitch, None);

    // the merged compact got its size from the type table
    let pz = derived
        .iter()
        .find(|d| d.spec.name == "Acme PowerZoom 9")
        .unwrap();
    assert_eq!(pz.size, Some((6.17, 4.55)));
    assert!(pz.size_is_inferred());
    let pitch = pz.pitch.unwrap();
    assert!((pitch - 1.3246).abs() < 1e-3);

    // render and write
    let html = render_page("Compact Cameras", &derived, "compact", None);
    assert!(html.contains("Acme PowerZoom 9"));
    assert!(html.contains("Birdo Snap Mini"));

    let dir = tmp_dir("write");
    ensure_directory(&dir).unwrap();
    let path = write_page(&dir, "compact.html", &html).unwrap();
    let on_disk = fs::read_to_string(path).unwrap();
    assert_eq!(on_disk, html);
}

#[test]
fn empty_page_yields_no_entries() {
    let entries = split_entries("<html><body>redesigned beyond recognition</body></html>");
    assert!(entries.is_empty());
}

#[test]
fn fragment_without_name_aborts_extraction() {
    let page = format!(
        "{}{}",
        entry("Named Cam", &[]),
        r#"<div class="row productlist__product"><div class="productlist__bestpriceoffer">"#
    );
    let entries = split_entries(&page);
    assert_eq!(entries.len(), 2);
    assert!(extract_specs(&entries).is_err());
}

#[test]
fn derivation_is_total_for_bare_records() {
    let derived = derive_specs(vec![CameraSpec::named("Bare")], false);
    assert_eq!(derived.len(), 1);
    assert_eq!(derived[0].size, None);
    assert_eq!(derived[0].area, None);
    assert_eq!(derived[0].pitch, None);
}
