//! Per-stage assignment model and the solvers that read back its 0/1 plan.
//!
//! - [`AssignmentModel`] — Binary variables, traffic objective, two constraint families
//! - [`Plan`] — Decision matrix returned by a solver
//! - [`Hungarian`] — Kuhn-Munkres (1955), O(n²m)
//! - [`SingleDestination`] — Best-vehicle pick when one destination remains
//! - `ScipSolver` — SCIP binary program (feature `scip`)

mod hungarian;
mod model;
mod plan;
#[cfg(feature = "scip")]
mod scip;
mod trivial;

pub use hungarian::Hungarian;
pub use model::{AssignmentModel, Constraint, Family, Sense};
pub use plan::Plan;
#[cfg(feature = "scip")]
pub use scip::ScipSolver;
pub use trivial::SingleDestination;

use crate::error::Result;
use crate::models::SolveMethod;

/// Solves an [`AssignmentModel`] to optimality.
///
/// Implementations must return a plan that passes
/// [`AssignmentModel::check`] and maximizes [`AssignmentModel::objective`].
pub trait AssignmentSolver {
    /// How this solver labels the stages it solves.
    fn method(&self) -> SolveMethod;

    /// Solves the model.
    fn solve(&self, model: &AssignmentModel) -> Result<Plan>;
}
