//! Tanker vehicle with capacity, current load, and position.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Location ID of the depot where vehicles reload.
pub const DEPOT: usize = 0;

/// Loads at or below this are treated as an empty tank.
const LOAD_EPS: f64 = 1e-9;

/// A vehicle that carries fuel from the depot to destinations.
///
/// A vehicle starts full at the depot unless told otherwise. After each
/// delivery it either stays at the destination with the remaining load or,
/// once empty, returns to the depot and reloads to capacity.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::models::{Vehicle, DEPOT};
///
/// let v = Vehicle::new(0, 200.0).unwrap();
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), 200.0);
/// assert_eq!(v.load(), 200.0);
/// assert_eq!(v.position(), DEPOT);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VehicleRecord")]
pub struct Vehicle {
    id: usize,
    capacity: f64,
    load: f64,
    position: usize,
}

impl Vehicle {
    /// Creates a full vehicle parked at the depot.
    ///
    /// Fails if `capacity` is not a positive finite number.
    pub fn new(id: usize, capacity: f64) -> Result<Self> {
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(Error::InvalidVehicle { id, capacity });
        }
        Ok(Self {
            id,
            capacity,
            load: capacity,
            position: DEPOT,
        })
    }

    /// Sets the initial load.
    pub fn with_load(mut self, load: f64) -> Result<Self> {
        self.set_load(load)?;
        Ok(self)
    }

    /// Sets the initial position (a location ID).
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Replaces the current load.
    ///
    /// Fails if the load is negative or above capacity.
    pub fn set_load(&mut self, load: f64) -> Result<()> {
        if load < 0.0 {
            return Err(Error::NegativeLoad {
                vehicle_id: self.id,
                load,
            });
        }
        if load.is_nan() || load > self.capacity {
            return Err(Error::CapacityExceeded {
                vehicle_id: self.id,
                load,
                capacity: self.capacity,
            });
        }
        self.load = load;
        Ok(())
    }

    /// Unloads `quantity` at `destination_id`.
    ///
    /// An emptied vehicle goes back to the depot full; otherwise it waits at
    /// the destination with what is left.
    pub fn unload(&mut self, quantity: f64, destination_id: usize) -> Result<()> {
        if quantity < 0.0 {
            return Err(Error::NegativeDelivery {
                destination_id,
                quantity,
            });
        }
        if quantity > self.load + LOAD_EPS {
            return Err(Error::Overdraw {
                vehicle_id: self.id,
                quantity,
                load: self.load,
            });
        }

        let remaining = self.load - quantity;
        if remaining <= LOAD_EPS {
            self.load = self.capacity;
            self.position = DEPOT;
        } else {
            self.load = remaining;
            self.position = destination_id;
        }
        Ok(())
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Fuel currently on board.
    pub fn load(&self) -> f64 {
        self.load
    }

    /// Current location ID ([`DEPOT`] or a destination ID).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` if the vehicle is at the depot.
    pub fn at_depot(&self) -> bool {
        self.position == DEPOT
    }
}

#[derive(Deserialize)]
struct VehicleRecord {
    id: usize,
    capacity: f64,
    #[serde(default)]
    load: Option<f64>,
    #[serde(default)]
    position: usize,
}

impl TryFrom<VehicleRecord> for Vehicle {
    type Error = Error;

    fn try_from(record: VehicleRecord) -> Result<Self> {
        let vehicle = Vehicle::new(record.id, record.capacity)?.with_position(record.position);
        match record.load {
            Some(load) => vehicle.with_load(load),
            None => Ok(vehicle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(3, 150.0).unwrap();
        assert_eq!(v.id(), 3);
        assert_eq!(v.capacity(), 150.0);
        assert_eq!(v.load(), 150.0);
        assert!(v.at_depot());
    }

    #[test]
    fn test_vehicle_invalid_capacity() {
        assert!(Vehicle::new(0, 0.0).is_err());
        assert!(Vehicle::new(0, -5.0).is_err());
        assert!(Vehicle::new(0, f64::NAN).is_err());
    }

    #[test]
    fn test_vehicle_builder() {
        let v = Vehicle::new(1, 100.0)
            .unwrap()
            .with_load(40.0)
            .unwrap()
            .with_position(4);
        assert_eq!(v.load(), 40.0);
        assert_eq!(v.position(), 4);
        assert!(!v.at_depot());
    }

    #[test]
    fn test_set_load_over_capacity() {
        let mut v = Vehicle::new(1, 100.0).unwrap();
        let err = v.set_load(120.0).unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { vehicle_id: 1, .. }));
        assert_eq!(v.load(), 100.0);
    }

    #[test]
    fn test_set_load_negative() {
        let mut v = Vehicle::new(2, 100.0).unwrap();
        let err = v.set_load(-5.0).unwrap_err();
        assert!(matches!(err, Error::NegativeLoad { vehicle_id: 2, load } if load == -5.0));
        assert!(err.to_string().contains("negative"));
        assert_eq!(v.load(), 100.0);
        assert!(matches!(
            v.set_load(f64::NAN),
            Err(Error::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_unload_partial_stays_at_destination() {
        let mut v = Vehicle::new(0, 100.0).unwrap();
        v.unload(30.0, 2).unwrap();
        assert_eq!(v.load(), 70.0);
        assert_eq!(v.position(), 2);
    }

    #[test]
    fn test_unload_empty_returns_to_depot_full() {
        let mut v = Vehicle::new(0, 100.0).unwrap().with_position(5);
        v.unload(100.0, 2).unwrap();
        assert_eq!(v.load(), 100.0);
        assert_eq!(v.position(), DEPOT);
    }

    #[test]
    fn test_unload_more_than_load() {
        let mut v = Vehicle::new(0, 100.0).unwrap().with_load(10.0).unwrap();
        assert!(matches!(v.unload(20.0, 1), Err(Error::Overdraw { .. })));
        assert!(matches!(
            v.unload(-1.0, 1),
            Err(Error::NegativeDelivery { .. })
        ));
    }

    #[test]
    fn test_deserialize_defaults() {
        let v: Vehicle = serde_json::from_str(r#"{"id": 2, "capacity": 80.0}"#).unwrap();
        assert_eq!(v.load(), 80.0);
        assert_eq!(v.position(), DEPOT);

        let bad: std::result::Result<Vehicle, _> =
            serde_json::from_str(r#"{"id": 2, "capacity": 80.0, "load": 90.0}"#);
        assert!(bad.is_err());
    }
}
