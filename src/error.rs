//! Error types for fuel-dispatch.

use thiserror::Error;

/// Errors raised while building, solving, or reporting a staged plan.
#[derive(Debug, Error)]
pub enum Error {
    /// A destination was built with a non-positive consumption or plan.
    #[error("invalid destination {id}: {reason}")]
    InvalidDestination {
        /// Destination ID.
        id: usize,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A vehicle was built with a non-positive capacity.
    #[error("invalid vehicle {id}: capacity must be positive, got {capacity}")]
    InvalidVehicle {
        /// Vehicle ID.
        id: usize,
        /// Offending capacity.
        capacity: f64,
    },

    /// A load larger than the vehicle's capacity.
    #[error("load {load} exceeds capacity {capacity} of vehicle {vehicle_id}")]
    CapacityExceeded {
        /// Vehicle ID.
        vehicle_id: usize,
        /// Requested load.
        load: f64,
        /// Vehicle capacity.
        capacity: f64,
    },

    /// A negative load.
    #[error("load {load} of vehicle {vehicle_id} is negative")]
    NegativeLoad {
        /// Vehicle ID.
        vehicle_id: usize,
        /// Requested load.
        load: f64,
    },

    /// A vehicle asked to unload more than it carries.
    #[error("vehicle {vehicle_id} cannot unload {quantity}, it carries {load}")]
    Overdraw {
        /// Vehicle ID.
        vehicle_id: usize,
        /// Requested quantity.
        quantity: f64,
        /// Current load.
        load: f64,
    },

    /// A negative quantity delivered to a destination.
    #[error("negative delivery {quantity} to destination {destination_id}")]
    NegativeDelivery {
        /// Destination ID.
        destination_id: usize,
        /// Offending quantity.
        quantity: f64,
    },

    /// An operation needed at least one vehicle or destination.
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// No distance entry between a location and a destination.
    #[error("missing distance from location {from} to destination {to}")]
    MissingDistance {
        /// Origin location.
        from: usize,
        /// Destination location.
        to: usize,
    },

    /// A zero distance would make the traffic indicator infinite.
    #[error("distance from location {from} to destination {to} is zero")]
    ZeroDistance {
        /// Origin location.
        from: usize,
        /// Destination location.
        to: usize,
    },

    /// A distance entry that is negative or not finite.
    #[error("distance from location {from} to location {to} is invalid: {value}")]
    InvalidDistance {
        /// Origin location.
        from: usize,
        /// Target location.
        to: usize,
        /// Offending entry.
        value: f64,
    },

    /// No load entry for a vehicle-destination pair.
    #[error("no delivery quantity for vehicle {vehicle_id} and destination {destination_id}")]
    MissingPair {
        /// Vehicle ID.
        vehicle_id: usize,
        /// Destination ID.
        destination_id: usize,
    },

    /// An ID referenced by a table or plan does not exist.
    #[error("unknown {kind} id {id}")]
    UnknownId {
        /// "vehicle" or "destination".
        kind: &'static str,
        /// The missing ID.
        id: usize,
    },

    /// The assignment model has no feasible 0/1 plan.
    #[error("assignment model {0} is infeasible")]
    Infeasible(String),

    /// The solver backend failed or is unavailable.
    #[error("solver error: {0}")]
    Solver(String),

    /// A configuration value could not be used.
    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
