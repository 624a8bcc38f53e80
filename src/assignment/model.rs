//! Binary assignment model: variables, objective, and constraint families.

use crate::error::{Error, Result};
use crate::models::{PairTable, Violation, ViolationType};

use super::Plan;

const BINARY_TOL: f64 = 1e-6;

/// Right-hand side form of a constraint (the right-hand side is always 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// `sum == 1`
    Equal,
    /// `sum <= 1`
    AtMost,
}

impl Sense {
    fn admits(self, count: usize) -> bool {
        match self {
            Sense::Equal => count == 1,
            Sense::AtMost => count <= 1,
        }
    }
}

/// The two constraint families of the assignment model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// One row per destination: vehicles serving it.
    DestinationCover,
    /// One row per vehicle: destinations it serves.
    VehicleUse,
}

/// A linear constraint over decision variables, all with coefficient 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Constraint family.
    pub family: Family,
    /// Destination or vehicle ID the row belongs to.
    pub id: usize,
    /// `== 1` or `<= 1`.
    pub sense: Sense,
    /// `(row, col)` indices of the variables in the row.
    pub variables: Vec<(usize, usize)>,
}

/// A binary assignment program for one stage.
///
/// One 0/1 variable per (vehicle, destination) pair; the objective
/// maximizes the sum of the selected coefficients (traffic indicators).
/// Every destination takes exactly one vehicle and every vehicle exactly one
/// destination. When the two sides differ in size, the larger side's
/// constraints become `<= 1` so the model stays feasible.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::models::PairTable;
/// use fuel_dispatch::assignment::{AssignmentModel, Plan, Sense};
///
/// let mut t = PairTable::new(vec![0, 1], vec![1, 2]);
/// t.set(0, 0, 3.0);
/// t.set(1, 1, 2.0);
/// let model = AssignmentModel::new("stage-1", t).unwrap();
/// assert_eq!(model.num_variables(), 4);
/// assert_eq!(model.destination_sense(), Sense::Equal);
///
/// let plan = Plan::from_pairs(2, 2, &[(0, 0), (1, 1)]);
/// assert!(model.check(&plan).is_empty());
/// assert_eq!(model.objective(&plan), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct AssignmentModel {
    name: String,
    coefficients: PairTable,
}

impl AssignmentModel {
    /// Builds the model from objective coefficients.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] with no vehicles or no destinations,
    /// [`Error::Solver`] for a non-finite coefficient.
    pub fn new(name: impl Into<String>, coefficients: PairTable) -> Result<Self> {
        if coefficients.num_rows() == 0 {
            return Err(Error::Empty("vehicles"));
        }
        if coefficients.num_cols() == 0 {
            return Err(Error::Empty("destinations"));
        }
        if let Some((v, d, c)) = coefficients.iter().find(|(_, _, c)| !c.is_finite()) {
            return Err(Error::Solver(format!(
                "coefficient for vehicle {v}, destination {d} is {c}"
            )));
        }
        Ok(Self {
            name: name.into(),
            coefficients,
        })
    }

    /// Model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Objective coefficients, vehicles by destinations.
    pub fn coefficients(&self) -> &PairTable {
        &self.coefficients
    }

    /// Number of vehicle rows.
    pub fn num_vehicles(&self) -> usize {
        self.coefficients.num_rows()
    }

    /// Number of destination columns.
    pub fn num_destinations(&self) -> usize {
        self.coefficients.num_cols()
    }

    /// Number of binary decision variables.
    pub fn num_variables(&self) -> usize {
        self.num_vehicles() * self.num_destinations()
    }

    /// Sense of the per-destination constraints.
    pub fn destination_sense(&self) -> Sense {
        if self.num_vehicles() >= self.num_destinations() {
            Sense::Equal
        } else {
            Sense::AtMost
        }
    }

    /// Sense of the per-vehicle constraints.
    pub fn vehicle_sense(&self) -> Sense {
        if self.num_destinations() >= self.num_vehicles() {
            Sense::Equal
        } else {
            Sense::AtMost
        }
    }

    /// Number of assignments any feasible plan makes.
    pub fn num_assignments(&self) -> usize {
        self.num_vehicles().min(self.num_destinations())
    }

    /// Lists both constraint families, destinations first.
    pub fn constraints(&self) -> Vec<Constraint> {
        let rows = self.num_vehicles();
        let cols = self.num_destinations();
        let ids = &self.coefficients;

        let cover = (0..cols).map(|col| Constraint {
            family: Family::DestinationCover,
            id: ids.destination_ids()[col],
            sense: self.destination_sense(),
            variables: (0..rows).map(|row| (row, col)).collect(),
        });
        let usage = (0..rows).map(|row| Constraint {
            family: Family::VehicleUse,
            id: ids.vehicle_ids()[row],
            sense: self.vehicle_sense(),
            variables: (0..cols).map(|col| (row, col)).collect(),
        });
        cover.chain(usage).collect()
    }

    /// Objective value of a plan.
    pub fn objective(&self, plan: &Plan) -> f64 {
        plan.selected()
            .into_iter()
            .map(|(row, col)| self.coefficients.get(row, col))
            .sum()
    }

    /// Checks a plan against the model, returning every violation found.
    ///
    /// A plan of the wrong shape is reported as violating every constraint
    /// it cannot be matched against.
    pub fn check(&self, plan: &Plan) -> Vec<Violation> {
        let mut violations = Vec::new();
        let rows = self.num_vehicles();
        let cols = self.num_destinations();
        let vehicle_ids = self.coefficients.vehicle_ids();
        let destination_ids = self.coefficients.destination_ids();

        for row in 0..rows {
            for col in 0..cols {
                let x = plan.value(row, col).unwrap_or(0.0);
                if x.abs() > BINARY_TOL && (x - 1.0).abs() > BINARY_TOL {
                    violations.push(Violation::new(ViolationType::NonBinary {
                        vehicle_id: vehicle_ids[row],
                        destination_id: destination_ids[col],
                        value: x,
                    }));
                }
            }
        }

        let col_sums = plan.col_sums();
        for (col, &destination_id) in destination_ids.iter().enumerate() {
            let count = col_sums.get(col).copied().unwrap_or(0);
            if !self.destination_sense().admits(count) {
                violations.push(Violation::new(ViolationType::DestinationCover {
                    destination_id,
                    vehicles: count,
                }));
            }
        }

        let row_sums = plan.row_sums();
        for (row, &vehicle_id) in vehicle_ids.iter().enumerate() {
            let count = row_sums.get(row).copied().unwrap_or(0);
            if !self.vehicle_sense().admits(count) {
                violations.push(Violation::new(ViolationType::VehicleUse {
                    vehicle_id,
                    destinations: count,
                }));
            }
        }

        violations
    }
}
