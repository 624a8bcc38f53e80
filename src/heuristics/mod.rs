//! Stage data preparation and state carry-over.
//!
//! - [`reduce_by_coverage`] — Drop destinations already at planned coverage
//! - [`reduce_by_fleet`] — Keep the least-covered destinations when vehicles are scarce
//! - [`delivery_quantities`] — Quantity each vehicle would unload at each destination
//! - [`traffic_indicators`] — Delivered volume over distance, the objective coefficients
//! - [`update_destinations`] / [`update_vehicles`] — Apply a stage's assignments

mod coverage;
mod fleet;
mod loads;
mod traffic;
mod update;

pub use coverage::{reduce_by_coverage, StageAction};
pub use fleet::reduce_by_fleet;
pub use loads::delivery_quantities;
pub use traffic::traffic_indicators;
pub use update::{update_destinations, update_vehicles};
