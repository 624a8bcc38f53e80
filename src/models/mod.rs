//! Domain model types for staged fuel dispatch.
//!
//! Vehicles carry fuel from the depot, destinations consume it and hold
//! inventory, and each planning stage produces a set of vehicle-destination
//! assignments.

mod destination;
mod problem;
mod solution;
mod table;
mod vehicle;

pub use destination::Destination;
pub use problem::Scenario;
pub use solution::{Assignment, SolveMethod, StageResult, Violation, ViolationType};
pub use table::PairTable;
pub use vehicle::{Vehicle, DEPOT};
