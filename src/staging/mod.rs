//! Staged heuristic decomposition.
//!
//! Each stage's deliveries become the next stage's inventories, vehicle
//! loads, and vehicle positions.

mod planner;

pub use planner::{PlanReport, StagedPlanner, Termination};
