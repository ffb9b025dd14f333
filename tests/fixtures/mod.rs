//! Test fixtures for site-planner.
//!
//! Provides:
//! - Real German city coordinates (the master data the surrounding
//!   pipeline feeds in)
//! - Builders for candidates, demand points, and constraint sets

pub mod german_cities;

pub use german_cities::*;

use site_planner::model::{Candidate, ConstraintSet, DemandPoint};

pub fn candidate(id: &str, lat: f64, lon: f64) -> Candidate {
    Candidate {
        id: id.to_string(),
        lat,
        lon,
        is_top_tier: false,
        cost_base: 1.0,
    }
}

pub fn top_tier(id: &str, lat: f64, lon: f64, cost_base: f64) -> Candidate {
    Candidate {
        id: id.to_string(),
        lat,
        lon,
        is_top_tier: true,
        cost_base,
    }
}

pub fn demand(id: &str, lat: f64, lon: f64, customers: u64) -> DemandPoint {
    DemandPoint {
        id: id.to_string(),
        lat,
        lon,
        customer_count: customers,
    }
}

/// Constraint set with the usual bonus values; radius and target vary per
/// scenario.
pub fn constraint_set(
    name: &str,
    max_distance_km: f64,
    decay_start_km: f64,
    service_level: f64,
) -> ConstraintSet {
    ConstraintSet {
        name: name.to_string(),
        max_distance_km,
        decay_start_km,
        min_weight: 0.5,
        cost_top_city_bonus: 0.2,
        cost_standard_bonus: 0.1,
        density_bonus: 0.2,
        service_level,
    }
}
