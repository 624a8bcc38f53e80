//! # fuel-dispatch
//!
//! Staged assignment optimization for fuel distribution: at every planning
//! stage, vehicles are assigned to destinations so as to maximize the total
//! merchandise traffic indicator (delivered volume over distance), and the
//! deliveries feed the next stage.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Vehicle, Destination, Scenario, StageResult)
//! - [`distance`] — Distance matrix over location IDs
//! - [`heuristics`] — Coverage and fleet reductions, traffic indicators, state updates
//! - [`assignment`] — Binary assignment model and solvers (Hungarian, optional SCIP)
//! - [`staging`] — Chained stage planner
//! - [`report`] — Table, JSON, CSV ledger, and PNG output
//! - [`generator`] — Random fictitious scenarios
//! - [`config`] — Planner configuration

pub mod assignment;
pub mod config;
pub mod distance;
pub mod error;
pub mod generator;
pub mod heuristics;
pub mod models;
pub mod report;
pub mod staging;

pub use error::{Error, Result};
