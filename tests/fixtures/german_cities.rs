//! Real German city coordinates for realistic test fixtures.
//!
//! Postal codes and coordinates refer to the central district of each
//! city.

/// A named city with coordinates and tier flag.
#[derive(Debug, Clone)]
pub struct City {
    pub name: &'static str,
    pub plz: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub top_tier: bool,
}

impl City {
    pub const fn new(name: &'static str, plz: &'static str, lat: f64, lon: f64, top_tier: bool) -> Self {
        Self {
            name,
            plz,
            lat,
            lon,
            top_tier,
        }
    }
}

// ============================================================================
// Major cities (candidate locations)
// ============================================================================

pub const BERLIN: City = City::new("Berlin", "10115", 52.5200, 13.4050, true);
pub const HAMBURG: City = City::new("Hamburg", "20095", 53.5511, 9.9937, true);
pub const MUNICH: City = City::new("München", "80331", 48.1374, 11.5755, true);
pub const COLOGNE: City = City::new("Köln", "50667", 50.9375, 6.9603, true);
pub const FRANKFURT: City = City::new("Frankfurt am Main", "60311", 50.1109, 8.6821, true);

pub const MAJOR_CITIES: &[City] = &[BERLIN, HAMBURG, MUNICH, COLOGNE, FRANKFURT];

// ============================================================================
// Surrounding towns (demand-heavy postal zones near each major city)
// ============================================================================

pub const POTSDAM: City = City::new("Potsdam", "14467", 52.3906, 13.0645, false);
pub const LUEBECK: City = City::new("Lübeck", "23552", 53.8655, 10.6866, false);
pub const AUGSBURG: City = City::new("Augsburg", "86150", 48.3705, 10.8978, false);
pub const BONN: City = City::new("Bonn", "53111", 50.7374, 7.0982, false);
pub const DARMSTADT: City = City::new("Darmstadt", "64283", 49.8728, 8.6512, false);

pub const SURROUNDING_TOWNS: &[City] = &[POTSDAM, LUEBECK, AUGSBURG, BONN, DARMSTADT];
