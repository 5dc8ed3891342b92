// src/geometry.rs
//
// Sensor geometry: type codes, physical dimensions, pixel pitch.

/// Nominal fractional-inch type code → real (width, height) in mm.
/// Values from the Wikipedia image sensor format table. Actual sensors are
/// smaller than the fractional-inch notation suggests, hence the table.
pub const TYPE_SIZES: &[(&str, (f64, f64))] = &[
    ("1/3.2", (4.54, 3.42)),
    ("1/3", (4.80, 3.60)),
    ("1/2.7", (5.37, 4.04)),
    ("1/2.5", (5.76, 4.29)),
    ("1/2.3", (6.17, 4.55)),
    ("1/2", (6.40, 4.80)),
    ("1/1.8", (7.18, 5.32)),
    ("1/1.7", (7.60, 5.70)),
    ("1/1.6", (8.08, 6.01)),
    ("1/1.5", (8.80, 6.60)), // 2/3
    ("1/1.2", (10.67, 8.00)),
    ("1", (13.20, 8.80)),
];

/// Convert a diagonal in inches to (width, height) in mm for the given
/// aspect ratio (e.g. 4/3 or 3/2).
pub fn sensor_size_from_diagonal(diag_inches: f64, aspect: f64) -> (f64, f64) {
    let diag_mm = diag_inches * 25.4;
    let h = (diag_mm * diag_mm / (aspect * aspect + 1.0)).sqrt();
    let w = aspect * h;
    (w, h)
}

/// Resolve a sensor type code like "1/2.3" to physical dimensions.
///
/// With `use_table`, known codes map to their tabulated real-world sizes.
/// Otherwise (or for unknown codes of the form "1/N") the size is computed
/// from the nominal diagonal assuming a 4:3 aspect ratio.
pub fn sensor_size_from_type(code: Option<&str>, use_table: bool) -> Option<(f64, f64)> {
    let code = code?;
    if use_table {
        if let Some((_, size)) = TYPE_SIZES.iter().find(|(c, _)| *c == code) {
            return Some(*size);
        }
    }
    if let Some(denom) = code.strip_prefix("1/") {
        if let Ok(n) = denom.parse::<f64>() {
            return Some(sensor_size_from_diagonal(1.0 / n, 4.0 / 3.0));
        }
    }
    None
}

/// Pixel pitch in µm from sensor area in mm² and resolution in megapixels.
pub fn pixel_pitch(area_mm2: f64, mpix: f64) -> f64 {
    1000.0 * (area_mm2 / (mpix * 1e6)).sqrt()
}
