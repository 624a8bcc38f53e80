//! Distances between the depot and destinations.
//!
//! Provides a dense, possibly asymmetric distance matrix keyed by location ID.

mod matrix;

pub use matrix::DistanceMatrix;
