//! MILP backend through SCIP (`russcip`), enabled with the `scip` feature.

use russcip::{Model, ObjSense, ProblemOrSolving, Status, VarType, WithSolutions};

use crate::error::{Error, Result};
use crate::models::SolveMethod;

use super::{AssignmentModel, AssignmentSolver, Plan, Sense};

/// Solves the assignment model as a binary program with SCIP.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScipSolver {
    verbose: bool,
}

impl ScipSolver {
    /// Creates a solver that keeps SCIP's log quiet.
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Lets SCIP print its log.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

fn bounds(sense: Sense) -> (f64, f64) {
    match sense {
        Sense::Equal => (1., 1.),
        Sense::AtMost => (0., 1.),
    }
}

impl AssignmentSolver for ScipSolver {
    fn method(&self) -> SolveMethod {
        SolveMethod::Scip
    }

    fn solve(&self, model: &AssignmentModel) -> Result<Plan> {
        let t = model.coefficients();
        let rows = t.num_rows();
        let cols = t.num_cols();

        let mut scip = Model::new();
        if !self.verbose {
            scip = scip.hide_output();
        }
        let mut scip = scip
            .include_default_plugins()
            .create_prob(model.name())
            .set_obj_sense(ObjSense::Maximize);

        // x[i][j] is 1 if vehicle i goes to destination j
        let mut x = Vec::with_capacity(rows);
        for i in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for j in 0..cols {
                let name = format!("assign_{}_{}", t.vehicle_ids()[i], t.destination_ids()[j]);
                row.push(scip.add_var(0., 1., t.get(i, j), &name, VarType::Binary));
            }
            x.push(row);
        }

        let (lhs, rhs) = bounds(model.destination_sense());
        for j in 0..cols {
            scip.add_cons(
                x.iter().map(|row| &row[j]).collect(),
                &vec![1.0; rows],
                lhs,
                rhs,
                "destination_cover",
            );
        }

        let (lhs, rhs) = bounds(model.vehicle_sense());
        for row in &x {
            scip.add_cons(row.iter().collect(), &vec![1.0; cols], lhs, rhs, "vehicle_use");
        }

        let solved = scip.solve();
        match solved.status() {
            Status::Optimal => {}
            Status::Infeasible => return Err(Error::Infeasible(model.name().to_string())),
            other => return Err(Error::Solver(format!("SCIP finished with status {other:?}"))),
        }

        let sol = solved
            .best_sol()
            .ok_or_else(|| Error::Solver("SCIP reported optimal without a solution".into()))?;
        let values = x
            .iter()
            .flat_map(|row| row.iter().map(|var| sol.val(var)))
            .collect();
        Plan::from_values(rows, cols, values)
            .ok_or_else(|| Error::Solver("solution size mismatch".into()))
    }
}
