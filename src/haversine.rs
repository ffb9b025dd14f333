//! Great-circle distance engine.
//!
//! Haversine on a spherical Earth. Ignores terrain and road networks;
//! service-radius semantics downstream are defined on this metric.

use rayon::prelude::*;

use crate::model::{Candidate, DemandPoint};

/// Earth mean radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in km between two (lat, lon) pairs in degrees.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` past 1.0 for near-antipodal pairs.
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Dense candidate × demand distance matrix.
///
/// Computed once per run, read-only afterwards. Rows are filled in
/// parallel, one candidate per worker; nothing downstream reads the matrix
/// before `compute` returns.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    pub fn compute(candidates: &[Candidate], demand: &[DemandPoint]) -> Self {
        let rows = candidates
            .par_iter()
            .map(|c| {
                demand
                    .iter()
                    .map(|d| haversine_km((c.lat, c.lon), (d.lat, d.lon)))
                    .collect()
            })
            .collect();

        Self { rows }
    }

    pub fn n_candidates(&self) -> usize {
        self.rows.len()
    }

    /// Distance in km from a candidate to a demand point, by index.
    pub fn km(&self, candidate: usize, demand: usize) -> f64 {
        self.rows[candidate][demand]
    }

    /// All distances from one candidate, indexed by demand point.
    pub fn row(&self, candidate: usize) -> &[f64] {
        &self.rows[candidate]
    }
}
