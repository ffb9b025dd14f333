//! Constraint-set pipeline: validate, measure, solve, resolve, aggregate.
//!
//! One full pass per constraint set, no state shared between passes. The
//! caller owns scenario selection and any retry policy; an infeasible or
//! failed set is reported, never retried here.

use serde::Serialize;
use tracing::{info, warn};

use crate::coverage::{self, CandidateCoverage};
use crate::haversine::DistanceMatrix;
use crate::model::{Candidate, ConfigError, ConstraintSet, DemandPoint};
use crate::resolve::resolve_overlaps;
use crate::solver::opened_from_values;
use crate::stats::{self, GlobalStats, LocationStats};
use crate::traits::{SelectionProblem, SelectionSolver, SolveOutcome};

/// Margin below which the feasibility pre-check warns about a tight fit.
const TIGHT_MARGIN: f64 = 0.05;

/// Tolerance when auditing the achieved service level against the target.
const SERVICE_LEVEL_TOLERANCE: f64 = 1e-3;

/// Solved scenario: opened locations plus the statistics presentation
/// layers consume verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// Name of the constraint set this solution belongs to.
    pub constraint_set: String,
    /// Ids of opened candidates, in input candidate order.
    pub opened: Vec<String>,
    /// Per-location statistics, sorted by served customers descending.
    pub locations: Vec<LocationStats>,
    pub totals: GlobalStats,
    /// Opened candidate id per demand point, input order; `None` when the
    /// point is outside every opened catchment.
    pub assignment: Vec<Option<String>>,
}

/// Terminal states for one constraint-set run.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    Optimal(Solution),
    /// The service level cannot be met by any subset of candidates. The
    /// caller decides whether to relax and resubmit.
    Infeasible,
    /// Solver crash, timeout, or numerical failure.
    Error(String),
}

/// Run the full optimization pipeline for one constraint set.
///
/// Returns `Err` only for invalid constraint-set values; infeasibility and
/// solver failures are [`PlanOutcome`] variants so one bad scenario never
/// aborts a batch.
pub fn plan<S: SelectionSolver>(
    candidates: &[Candidate],
    demand: &[DemandPoint],
    constraints: &ConstraintSet,
    backend: &S,
) -> Result<PlanOutcome, ConfigError> {
    constraints.validate()?;

    let total_customers: u64 = demand.iter().map(|d| d.customer_count).sum();
    if candidates.is_empty() || demand.is_empty() || total_customers == 0 {
        info!(
            constraint_set = %constraints.name,
            "nothing to optimize, returning empty solution"
        );
        return Ok(PlanOutcome::Optimal(empty_solution(constraints, demand, total_customers)));
    }

    info!(
        constraint_set = %constraints.name,
        candidates = candidates.len(),
        demand_points = demand.len(),
        total_customers,
        "starting optimization"
    );

    let matrix = DistanceMatrix::compute(candidates, demand);
    let cov = coverage::build_coverage(&matrix, demand, constraints);
    let required = constraints.service_level * total_customers as f64;

    // Achievable coverage counts every customer once, unlike the relaxed
    // solver constraint, so a target no subset can meet is settled here.
    let coverable = coverable_customers(demand, &cov);
    let max_achievable = coverable as f64 / total_customers as f64;
    if max_achievable < constraints.service_level {
        warn!(
            constraint_set = %constraints.name,
            max_achievable,
            required = constraints.service_level,
            "service level not achievable with these candidates"
        );
        return Ok(PlanOutcome::Infeasible);
    }
    if max_achievable < constraints.service_level + TIGHT_MARGIN {
        warn!(
            constraint_set = %constraints.name,
            max_achievable,
            required = constraints.service_level,
            "coverage margin is tight"
        );
    }

    let problem = SelectionProblem {
        costs: coverage::effective_costs(candidates, &cov, constraints),
        weighted_counts: cov.iter().map(|c| c.weighted_count).collect(),
        required_coverage: required,
    };

    match backend.solve(&problem) {
        SolveOutcome::Optimal(values) => {
            let opened = opened_from_values(&values);
            let assignment = resolve_overlaps(demand.len(), candidates, &opened, &cov, &matrix);
            let (locations, totals) = stats::aggregate(candidates, demand, &opened, &cov, &assignment);

            if totals.achieved_service_level < constraints.service_level - SERVICE_LEVEL_TOLERANCE {
                warn!(
                    constraint_set = %constraints.name,
                    achieved = totals.achieved_service_level,
                    target = constraints.service_level,
                    "deduplicated service level below target"
                );
            }
            info!(
                constraint_set = %constraints.name,
                opened = opened.len(),
                total_served = totals.total_served,
                achieved = totals.achieved_service_level,
                "optimization complete"
            );

            Ok(PlanOutcome::Optimal(Solution {
                constraint_set: constraints.name.clone(),
                opened: opened.iter().map(|&c| candidates[c].id.clone()).collect(),
                locations,
                totals,
                assignment: assignment
                    .iter()
                    .map(|a| a.map(|c| candidates[c].id.clone()))
                    .collect(),
            }))
        }
        SolveOutcome::Infeasible => {
            info!(constraint_set = %constraints.name, "solver reported infeasible");
            Ok(PlanOutcome::Infeasible)
        }
        SolveOutcome::Error(message) => {
            warn!(constraint_set = %constraints.name, %message, "solver failed");
            Ok(PlanOutcome::Error(message))
        }
    }
}

/// Run every constraint set independently.
///
/// One invalid, infeasible, or failing set never blocks the rest of the
/// batch; each entry carries its own result.
pub fn plan_all<S: SelectionSolver>(
    candidates: &[Candidate],
    demand: &[DemandPoint],
    constraint_sets: &[ConstraintSet],
    backend: &S,
) -> Vec<(String, Result<PlanOutcome, ConfigError>)> {
    constraint_sets
        .iter()
        .map(|set| {
            let result = plan(candidates, demand, set, backend);
            if let Err(err) = &result {
                warn!(constraint_set = %set.name, %err, "skipping invalid constraint set");
            }
            (set.name.clone(), result)
        })
        .collect()
}

/// Customers reachable by at least one candidate, counted once.
fn coverable_customers(demand: &[DemandPoint], coverage: &[CandidateCoverage]) -> u64 {
    let mut reachable = vec![false; demand.len()];
    for cov in coverage {
        for &k in &cov.reachable {
            reachable[k] = true;
        }
    }
    reachable
        .iter()
        .zip(demand)
        .filter(|(reached, _)| **reached)
        .map(|(_, d)| d.customer_count)
        .sum()
}

fn empty_solution(
    constraints: &ConstraintSet,
    demand: &[DemandPoint],
    total_customers: u64,
) -> Solution {
    Solution {
        constraint_set: constraints.name.clone(),
        opened: Vec::new(),
        locations: Vec::new(),
        totals: GlobalStats {
            total_customers,
            ..GlobalStats::default()
        },
        assignment: vec![None; demand.len()],
    }
}
