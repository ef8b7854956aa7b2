//! Record types for orbital element datasets.
//!
//! Records arrive from external catalogs (JPL small-body style JSON) and
//! carry raw, unvalidated values. Consumers validate before use.

use serde::{Deserialize, Serialize};

/// Category of body a dataset describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Planet,
    Comet,
    Asteroid,
}

impl BodyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyKind::Planet => "planet",
            BodyKind::Comet => "comet",
            BodyKind::Asteroid => "asteroid",
        }
    }
}

impl std::fmt::Display for BodyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry: a named body and its Keplerian elements.
///
/// Accepts both the spelled-out field names and the short keys used by
/// JPL-style feeds (`full_name`, `a`, `e`, `w`, `om`). Distances are in
/// astronomical units and angles in degrees, matching the feed convention.
/// Values are stored as received; nothing here checks ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    /// Display name of the body.
    #[serde(alias = "full_name")]
    pub name: String,
    /// Semi-major axis in astronomical units.
    #[serde(alias = "a")]
    pub semi_major_axis: f64,
    /// Orbital eccentricity.
    #[serde(alias = "e")]
    pub eccentricity: f64,
    /// Argument of periapsis in degrees.
    #[serde(alias = "w")]
    pub argument_periapsis: f64,
    /// Longitude of the ascending node in degrees.
    #[serde(alias = "om")]
    pub longitude_ascending: f64,
}

impl BodyRecord {
    /// Name with surrounding whitespace removed.
    ///
    /// JPL feeds pad `full_name` to a fixed width, e.g. `"     1 Ceres"`.
    pub fn display_name(&self) -> &str {
        self.name.trim()
    }
}
