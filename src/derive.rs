// src/derive.rs
//
// Turns raw specs into finalized entries with resolved size, area and
// pixel pitch. Total: missing inputs propagate to unset outputs, nothing
// here can fail.

use crate::data::{CameraSpec, DerivedSpec};
use crate::geometry::{pixel_pitch, sensor_size_from_type};

/// Derive sensor metrics for one spec.
///
/// `use_size_table` selects the tabulated real-world sizes when the size
/// has to be inferred from the type code (fixed-lens category); system
/// camera listings declare exact dimensions and skip the heuristic.
pub fn derive_spec(spec: CameraSpec, use_size_table: bool) -> DerivedSpec {
    let size = spec
        .size
        .or_else(|| sensor_size_from_type(spec.sensor_type.as_deref(), use_size_table));

    // Area is only meaningful here as a pitch input, so it requires the
    // resolution as well.
    let area = match (size, spec.mpix) {
        (Some((w, h)), Some(_)) => Some(w * h),
        _ => None,
    };

    // A listed pitch of 0 counts as absent, like every other blank field
    let pitch = match (spec.pitch, area, spec.mpix) {
        (Some(p), _, _) if p != 0.0 => Some(p),
        (_, Some(a), Some(mp)) => Some(pixel_pitch(a, mp)),
        _ => None,
    };

    DerivedSpec {
        spec,
        size,
        area,
        pitch,
    }
}

pub fn derive_specs(specs: Vec<CameraSpec>, use_size_table: bool) -> Vec<DerivedSpec> {
    specs
        .into_iter()
        .map(|spec| derive_spec(spec, use_size_table))
        .collect()
}
