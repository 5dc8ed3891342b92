// src/order.rs

use std::cmp::Ordering;

use crate::data::DerivedSpec;

/// Sort key for the rendered tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Pitch,
    Area,
    Mpix,
    Name,
}

/// Stable sort, descending by default. Unknown numeric values count as -1
/// so they end up last when descending. Ties keep their original order.
pub fn sorted_by(mut specs: Vec<DerivedSpec>, key: SortKey, descending: bool) -> Vec<DerivedSpec> {
    match key {
        SortKey::Name => {
            specs.sort_by(|a, b| {
                let ord = a.spec.name.cmp(&b.spec.name);
                if descending { ord.reverse() } else { ord }
            });
        }
        _ => {
            specs.sort_by(|a, b| {
                let ka = numeric_key(a, key);
                let kb = numeric_key(b, key);
                let ord = ka.partial_cmp(&kb).unwrap_or(Ordering::Equal);
                if descending { ord.reverse() } else { ord }
            });
        }
    }
    specs
}

fn numeric_key(d: &DerivedSpec, key: SortKey) -> f64 {
    let v = match key {
        SortKey::Pitch => d.pitch,
        SortKey::Area => d.area,
        SortKey::Mpix => d.spec.mpix,
        SortKey::Name => None, // handled separately
    };
    v.unwrap_or(-1.0)
}
