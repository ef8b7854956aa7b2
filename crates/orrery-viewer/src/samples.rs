//! Built-in sample catalog records.
//!
//! Keeps the viewer usable offline: the records carry the same element
//! fields the live small-body feed returns, keyed by the names the
//! built-in catalog uses so the planet refinements land on their bodies.

use orrery_data::{BodyKind, BodyRecord, StaticFetcher};

fn record(name: &str, a: f64, e: f64, w: f64, om: f64) -> BodyRecord {
    BodyRecord {
        name: name.to_string(),
        semi_major_axis: a,
        eccentricity: e,
        argument_periapsis: w,
        longitude_ascending: om,
    }
}

/// Planet element refinements plus a handful of well-known comets.
pub fn sample_fetcher() -> StaticFetcher {
    let mut fetcher = StaticFetcher::new();
    fetcher.insert(
        BodyKind::Planet,
        vec![
            record("Mercury", 0.3871, 0.2056, 29.124, 48.331),
            record("Venus", 0.7233, 0.0068, 54.884, 76.680),
            record("Earth", 1.0000, 0.0167, 114.208, 348.739),
            record("Mars", 1.5237, 0.0934, 286.502, 49.558),
            record("Neptune", 30.069, 0.0086, 273.187, 131.783),
        ],
    );
    fetcher.insert(
        BodyKind::Comet,
        vec![
            record("1P/Halley", 17.93, 0.967, 111.33, 58.42),
            record("2P/Encke", 2.215, 0.848, 186.54, 334.57),
            record("67P/Churyumov-Gerasimenko", 3.462, 0.641, 12.78, 50.19),
            record("109P/Swift-Tuttle", 26.092, 0.963, 152.98, 139.38),
        ],
    );
    fetcher
}
