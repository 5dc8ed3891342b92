// src/dedup.rs
//
// Collapses listings that are the same physical camera sold as different
// colorways, lens kits or bundles.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::data::CameraSpec;

/// Name suffixes that mark a variant rather than a distinct model:
/// colors (the site lists them in German), kit/body designations.
pub const EXTRAS: &[&str] = &[
    "weiß", "schwarz", "rot", "grau", "pink", "gold", "silber", "violett", "grün", "blau",
    "orange", "braun", "gelb", "beige", "bordeaux", "bronze", "rosa", "graphit", "titan",
    "camouflage", "khaki", "anthrazit",
    "mit Objektiv", "Gehäuse",
];

static EXTRAS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&EXTRAS.join("|")).expect("extras pattern"));

// Trailing parenthesized article/model codes, e.g. "(9546B011)"
static PARENS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.+\)$").expect("parens pattern"));

/// Unify variant names and merge listings that only differ in color,
/// lens kit etc.
///
/// Listings whose name contains an extras token are grouped under the name
/// truncated at the earliest match. A group only collapses into one record
/// when ALL members agree on every sensor-determining field; an ambiguous
/// group passes through untouched rather than risk merging genuinely
/// different products. Merged records keep the earliest known release year.
/// Finally every surviving name gets a trailing parenthesized code removed.
pub fn deduplicate(specs: Vec<CameraSpec>) -> Vec<CameraSpec> {
    let mut rest: Vec<CameraSpec> = Vec::new();
    let mut groups: HashMap<String, Vec<CameraSpec>> = HashMap::new();
    let mut group_order: Vec<String> = Vec::new();

    for spec in specs {
        match EXTRAS_RE.find(&spec.name) {
            Some(m) => {
                let unified = spec.name[..m.start()].to_string();
                if !groups.contains_key(&unified) {
                    group_order.push(unified.clone());
                }
                groups.entry(unified).or_default().push(spec);
            }
            None => rest.push(spec),
        }
    }

    for unified in group_order {
        let Some(group) = groups.remove(&unified) else {
            continue;
        };
        let head = group[0].clone();
        if group.iter().all(|spec| spec.same_sensor(&head)) {
            let year = group.iter().filter_map(|spec| spec.year).min();
            rest.push(CameraSpec {
                name: unified,
                year,
                ..head
            });
        } else {
            // possibly different products sharing a token; keep them all
            rest.extend(group);
        }
    }

    rest.into_iter().map(strip_trailing_code).collect()
}

/// Remove a parenthesized code at the end of the name, and trim.
fn strip_trailing_code(mut spec: CameraSpec) -> CameraSpec {
    let trimmed = spec.name.trim();
    let name = match PARENS_RE.find(trimmed) {
        Some(m) => trimmed[..m.start()].trim_end(),
        None => trimmed,
    };
    spec.name = name.to_string();
    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, mpix: Option<f64>, year: Option<u16>) -> CameraSpec {
        CameraSpec {
            mpix,
            year,
            sensor_type: Some(s!("1/2.3")),
            ..CameraSpec::named(name)
        }
    }

    #[test]
    fn color_variants_collapse_to_one() {
        let specs = vec![
            spec("Foo X100 weiß", Some(16.0), Some(2014)),
            spec("Foo X100 schwarz", Some(16.0), Some(2013)),
        ];
        let out = deduplicate(specs);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Foo X100");
        assert_eq!(out[0].year, Some(2013)); // earliest wins
        assert_eq!(out[0].mpix, Some(16.0));
    }

    #[test]
    fn differing_sensors_pass_through_unmerged() {
        let specs = vec![
            spec("Foo X100 weiß (ABC123)", Some(16.0), None),
            spec("Foo X100 schwarz", Some(20.0), None),
        ];
        let out = deduplicate(specs);
        assert_eq!(out.len(), 2);
        // original names survive, minus the trailing code
        assert_eq!(out[0].name, "Foo X100 weiß");
        assert_eq!(out[1].name, "Foo X100 schwarz");
    }

    #[test]
    fn lone_variant_still_gets_unified() {
        let out = deduplicate(vec![spec("Bar Z5 mit Objektiv 18-55mm", Some(24.0), None)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Bar Z5");
    }

    #[test]
    fn unmatched_names_are_untouched_except_paren_code() {
        let out = deduplicate(vec![spec("Plain Model 7 (XY-99)", None, None)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Plain Model 7");
    }

    #[test]
    fn earliest_extras_token_wins() {
        // "schwarz" appears before "Gehäuse"; truncate at the first
        let out = deduplicate(vec![spec("Cam schwarz Gehäuse", Some(12.0), None)]);
        assert_eq!(out[0].name, "Cam");
    }

    #[test]
    fn merge_keeps_sensor_fields_of_group() {
        let mut a = spec("Baz Q weiß", Some(20.2), Some(2015));
        a.size = Some((6.17, 4.55));
        a.pitch = Some(1.2);
        let mut b = spec("Baz Q rot", Some(20.2), None);
        b.size = Some((6.17, 4.55));
        b.pitch = Some(1.2);
        let out = deduplicate(vec![a, b]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].size, Some((6.17, 4.55)));
        assert_eq!(out[0].pitch, Some(1.2));
        assert_eq!(out[0].year, Some(2015));
    }

    #[test]
    fn deduplication_is_idempotent() {
        let specs = vec![
            spec("Foo X100 weiß", Some(16.0), Some(2014)),
            spec("Foo X100 schwarz", Some(16.0), Some(2013)),
            spec("Other Cam (123)", Some(10.0), None),
            spec("Mix Y gold", Some(8.0), None),
            spec("Mix Y blau", Some(9.0), None),
        ];
        let once = deduplicate(specs);
        let twice = deduplicate(once.clone());
        assert_eq!(once, twice);
    }
}
