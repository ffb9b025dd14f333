//! Input data model and constraint-set validation.
//!
//! All inputs arrive pre-cleaned from the surrounding data pipeline;
//! candidates and demand points are immutable within the core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A potential facility location eligible to be opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique location identifier.
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    /// Top-tier cities receive the larger cost bonus.
    pub is_top_tier: bool,
    /// Opening cost before bonuses.
    pub cost_base: f64,
}

/// Aggregated customer demand at one postal/zone code.
///
/// Zone codes are unique; merging duplicates is the data loader's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandPoint {
    /// Postal/zone code.
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub customer_count: u64,
}

/// One optimization scenario.
///
/// Scenario lists (e.g. Conservative vs. Aggressive) are owned by the
/// caller's configuration layer; each set is handed in here as an
/// immutable value so runs stay independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSet {
    pub name: String,
    /// Service radius; demand beyond it is unreachable.
    pub max_distance_km: f64,
    /// Distance up to which coverage gets full credit.
    pub decay_start_km: f64,
    /// Coverage weight floor, reached at `max_distance_km`.
    #[serde(default = "default_min_weight")]
    pub min_weight: f64,
    /// Cost reduction for top-tier candidates.
    pub cost_top_city_bonus: f64,
    /// Cost reduction for standard candidates.
    pub cost_standard_bonus: f64,
    /// Cost reduction scale for candidates with high weighted reach.
    #[serde(default = "default_density_bonus")]
    pub density_bonus: f64,
    /// Fraction of all customers the opened set must cover, in (0, 1].
    pub service_level: f64,
}

fn default_min_weight() -> f64 {
    0.5
}

fn default_density_bonus() -> f64 {
    0.2
}

/// Invalid constraint-set values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("decay_start_km ({decay_start_km}) must be below max_distance_km ({max_distance_km})")]
    DecayStartBeyondMax {
        decay_start_km: f64,
        max_distance_km: f64,
    },
    #[error("decay_start_km must be non-negative, got {0}")]
    NegativeDecayStart(f64),
    #[error("service_level must be in (0, 1], got {0}")]
    ServiceLevelOutOfRange(f64),
    #[error("min_weight must be in [0, 1), got {0}")]
    MinWeightOutOfRange(f64),
    #[error("cost bonuses must be non-negative")]
    NegativeBonus,
}

impl ConstraintSet {
    /// Fail-fast validation.
    ///
    /// The outer validator runs the same checks before a set reaches the
    /// core; repeating them here keeps a misconfigured decay range from
    /// silently producing wrong weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decay_start_km < 0.0 {
            return Err(ConfigError::NegativeDecayStart(self.decay_start_km));
        }
        if self.decay_start_km >= self.max_distance_km {
            return Err(ConfigError::DecayStartBeyondMax {
                decay_start_km: self.decay_start_km,
                max_distance_km: self.max_distance_km,
            });
        }
        if !(self.service_level > 0.0 && self.service_level <= 1.0) {
            return Err(ConfigError::ServiceLevelOutOfRange(self.service_level));
        }
        if !(0.0..1.0).contains(&self.min_weight) {
            return Err(ConfigError::MinWeightOutOfRange(self.min_weight));
        }
        if self.cost_top_city_bonus < 0.0
            || self.cost_standard_bonus < 0.0
            || self.density_bonus < 0.0
        {
            return Err(ConfigError::NegativeBonus);
        }
        Ok(())
    }
}
