//! Facility-selection optimizer (good_lp backend).
//!
//! Minimizes total opening cost subject to an aggregate weighted-coverage
//! floor. The constraint sums weighted reach per candidate independently,
//! so overlapping catchments count a demand point once per opened
//! candidate; the overlap resolver corrects the reported numbers after the
//! solve. An exact formulation would need one indicator variable per
//! (candidate, demand) pair and scales quadratically.

use good_lp::{
    Expression, ResolutionError, Solution, SolverModel, Variable, constraint, default_solver,
    variable, variables,
};
use tracing::debug;

use crate::traits::{SelectionProblem, SelectionSolver, SolveOutcome};

/// Threshold for reading an open decision out of a solver value.
const OPEN_THRESHOLD: f64 = 0.5;

/// Default backend: good_lp modeling on the bundled microlp solver.
///
/// Pure Rust, no system solver required. Any other backend can be swapped
/// in through [`SelectionSolver`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MilpBackend;

impl SelectionSolver for MilpBackend {
    fn solve(&self, problem: &SelectionProblem) -> SolveOutcome {
        let mut vars = variables!();
        let opens: Vec<Variable> = problem
            .costs
            .iter()
            .map(|_| vars.add(variable().binary()))
            .collect();

        let objective: Expression = opens
            .iter()
            .zip(&problem.costs)
            .map(|(open, cost)| *open * *cost)
            .sum();
        let coverage: Expression = opens
            .iter()
            .zip(&problem.weighted_counts)
            .map(|(open, weighted)| *open * *weighted)
            .sum();

        debug!(
            variables = opens.len(),
            required_coverage = problem.required_coverage,
            "solving selection program"
        );

        let solved = vars
            .minimise(objective)
            .using(default_solver)
            .with(constraint!(coverage >= problem.required_coverage))
            .solve();

        match solved {
            Ok(solution) => {
                SolveOutcome::Optimal(opens.iter().map(|open| solution.value(*open)).collect())
            }
            Err(ResolutionError::Infeasible) => SolveOutcome::Infeasible,
            Err(err) => SolveOutcome::Error(err.to_string()),
        }
    }
}

/// Candidate indices opened by a solved program.
///
/// Values come back as floats; anything above 0.5 counts as opened.
pub fn opened_from_values(values: &[f64]) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, value)| **value > OPEN_THRESHOLD)
        .map(|(i, _)| i)
        .collect()
}
