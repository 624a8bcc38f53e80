//! Stage results, assignments, and violation types.

use serde::Serialize;

/// A constraint violated by an assignment plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViolationType {
    /// A destination's vehicle count breaks its constraint.
    DestinationCover {
        /// Destination ID.
        destination_id: usize,
        /// Number of vehicles sent to it.
        vehicles: usize,
    },
    /// A vehicle's destination count breaks its constraint.
    VehicleUse {
        /// Vehicle ID.
        vehicle_id: usize,
        /// Number of destinations it was given.
        destinations: usize,
    },
    /// A decision value other than 0 or 1.
    NonBinary {
        /// Vehicle ID.
        vehicle_id: usize,
        /// Destination ID.
        destination_id: usize,
        /// Offending value.
        value: f64,
    },
}

/// A constraint violation in a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// One vehicle sent to one destination in a stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    /// Vehicle ID.
    pub vehicle_id: usize,
    /// Destination ID.
    pub destination_id: usize,
    /// Location the vehicle left from.
    pub origin: usize,
    /// Quantity unloaded at the destination.
    pub delivered: f64,
    /// Traffic indicator (delivered / distance) earned by this pair.
    pub traffic: f64,
}

/// How a stage's assignment was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveMethod {
    /// Single candidate destination: best vehicle picked directly.
    Trivial,
    /// Hungarian (Kuhn-Munkres) assignment.
    Hungarian,
    /// External MILP solver.
    Scip,
}

/// The outcome of one planning stage.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::models::{Assignment, SolveMethod, StageResult};
///
/// let mut stage = StageResult::new(1, "stage-1", SolveMethod::Hungarian);
/// stage.push(Assignment {
///     vehicle_id: 0,
///     destination_id: 2,
///     origin: 0,
///     delivered: 40.0,
///     traffic: 4.0,
/// });
/// stage.set_objective(4.0);
/// assert_eq!(stage.num_assignments(), 1);
/// assert_eq!(stage.total_delivered(), 40.0);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct StageResult {
    index: usize,
    name: String,
    method: SolveMethod,
    assignments: Vec<Assignment>,
    objective: f64,
}

impl StageResult {
    /// Creates an empty stage result.
    pub fn new(index: usize, name: impl Into<String>, method: SolveMethod) -> Self {
        Self {
            index,
            name: name.into(),
            method,
            assignments: Vec::new(),
            objective: 0.0,
        }
    }

    /// Adds an assignment.
    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Sets the objective value reported for this stage.
    pub fn set_objective(&mut self, objective: f64) {
        self.objective = objective;
    }

    /// 1-based stage index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Stage name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How the stage was solved.
    pub fn method(&self) -> SolveMethod {
        self.method
    }

    /// Assignments made in this stage.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Number of assignments.
    pub fn num_assignments(&self) -> usize {
        self.assignments.len()
    }

    /// Objective value (sum of traffic indicators).
    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// Sum of traffic indicators of the assignments.
    pub fn total_traffic(&self) -> f64 {
        self.assignments.iter().map(|a| a.traffic).sum()
    }

    /// Total quantity delivered in this stage.
    pub fn total_delivered(&self) -> f64 {
        self.assignments.iter().map(|a| a.delivered).sum()
    }
}
