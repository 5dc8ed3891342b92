// src/data.rs
//
// The two record types flowing through the pipeline.
//
// - CameraSpec: one scraped product listing. Every field except the name
//   is optional because the source pages omit data inconsistently.
// - DerivedSpec: a CameraSpec plus the resolved sensor size, area and
//   pixel pitch. Built exactly once per surviving spec, read-only after.

/// Raw sensor data for one product listing.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraSpec {
    /// Product name; always present, entity-decoded, whitespace-normalized.
    pub name: String,
    /// Fractional-inch sensor type code, e.g. "1/2.3".
    pub sensor_type: Option<String>,
    /// Declared sensor size (width, height) in mm.
    pub size: Option<(f64, f64)>,
    /// Advertised pixel pitch in µm (only listed in the current page format).
    pub pitch: Option<f64>,
    /// Resolution in megapixels.
    pub mpix: Option<f64>,
    /// Release year (only listed in the current page format).
    pub year: Option<u16>,
}

impl CameraSpec {
    /// A spec carrying nothing but a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sensor_type: None,
            size: None,
            pitch: None,
            mpix: None,
            year: None,
        }
    }

    /// True if all sensor-determining fields match. Name and year are
    /// deliberately excluded; deduplication merges on this.
    pub fn same_sensor(&self, other: &CameraSpec) -> bool {
        self.sensor_type == other.sensor_type
            && self.size == other.size
            && self.pitch == other.pitch
            && self.mpix == other.mpix
    }
}

/// A spec with its derived sensor metrics resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedSpec {
    pub spec: CameraSpec,
    /// Declared size, or one inferred from the sensor type code.
    pub size: Option<(f64, f64)>,
    /// Sensor area in mm²; only set when size AND megapixels are known.
    pub area: Option<f64>,
    /// Advertised pitch, or one computed from area and megapixels, in µm.
    pub pitch: Option<f64>,
}

impl DerivedSpec {
    /// Whether the resolved size came from the type code rather than the
    /// listing itself (shown as a caveat when rendering).
    pub fn size_is_inferred(&self) -> bool {
        self.size.is_some() && self.spec.size.is_none()
    }
}
