//! Single-destination shortcut: no solver needed.

use crate::error::{Error, Result};
use crate::models::SolveMethod;

use super::{AssignmentModel, AssignmentSolver, Plan};

/// Picks the vehicle with the largest coefficient for a lone destination.
///
/// Ties go to the first vehicle in row order.
///
/// # Errors
///
/// [`Error::Solver`] if the model has more than one destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleDestination;

impl AssignmentSolver for SingleDestination {
    fn method(&self) -> SolveMethod {
        SolveMethod::Trivial
    }

    fn solve(&self, model: &AssignmentModel) -> Result<Plan> {
        if model.num_destinations() != 1 {
            return Err(Error::Solver(format!(
                "single-destination pick needs 1 destination, model {} has {}",
                model.name(),
                model.num_destinations()
            )));
        }

        let t = model.coefficients();
        let mut best = 0;
        for row in 1..t.num_rows() {
            if t.get(row, 0) > t.get(best, 0) {
                best = row;
            }
        }
        Ok(Plan::from_pairs(t.num_rows(), 1, &[(best, 0)]))
    }
}
