//! Destination (service station) with inventory and coverage planning.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::DEPOT;

const COVERAGE_EPS: f64 = 1e-9;

/// A destination that consumes fuel and must be kept supplied.
///
/// The destination ID doubles as its location ID in the distance matrix,
/// so it can never be [`DEPOT`].
///
/// Coverage time is how long the current inventory lasts at the average
/// consumption rate. Demand is what it takes to reach the planned coverage.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::models::Destination;
///
/// let d = Destination::new(1, 10.0, 5.0).unwrap().with_inventory(20.0).unwrap();
/// assert_eq!(d.coverage_time(), 2.0);
/// assert_eq!(d.demand(), 30.0);
/// assert!(d.needs_supply());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DestinationRecord")]
pub struct Destination {
    id: usize,
    average_consumption: f64,
    planned_coverage: f64,
    inventory: f64,
}

impl Destination {
    /// Creates a destination with an empty inventory.
    ///
    /// Fails if `id` is the depot, or if the consumption or planned coverage
    /// is not strictly positive.
    pub fn new(id: usize, average_consumption: f64, planned_coverage: f64) -> Result<Self> {
        if id == DEPOT {
            return Err(Error::InvalidDestination {
                id,
                reason: "id 0 is reserved for the depot",
            });
        }
        if !(average_consumption.is_finite() && average_consumption > 0.0) {
            return Err(Error::InvalidDestination {
                id,
                reason: "average consumption must be positive",
            });
        }
        if !(planned_coverage.is_finite() && planned_coverage > 0.0) {
            return Err(Error::InvalidDestination {
                id,
                reason: "planned coverage must be positive",
            });
        }
        Ok(Self {
            id,
            average_consumption,
            planned_coverage,
            inventory: 0.0,
        })
    }

    /// Sets the starting inventory.
    pub fn with_inventory(mut self, inventory: f64) -> Result<Self> {
        if inventory < 0.0 || !inventory.is_finite() {
            return Err(Error::InvalidDestination {
                id: self.id,
                reason: "inventory must be non-negative",
            });
        }
        self.inventory = inventory;
        Ok(self)
    }

    /// Adds a delivered quantity to the inventory.
    pub fn receive(&mut self, quantity: f64) -> Result<()> {
        if quantity < 0.0 {
            return Err(Error::NegativeDelivery {
                destination_id: self.id,
                quantity,
            });
        }
        self.inventory += quantity;
        Ok(())
    }

    /// Destination ID (also its location ID).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Consumption per time unit.
    pub fn average_consumption(&self) -> f64 {
        self.average_consumption
    }

    /// Coverage time the plan aims for.
    pub fn planned_coverage(&self) -> f64 {
        self.planned_coverage
    }

    /// Current inventory.
    pub fn inventory(&self) -> f64 {
        self.inventory
    }

    /// Time units the current inventory lasts.
    pub fn coverage_time(&self) -> f64 {
        self.inventory / self.average_consumption
    }

    /// Quantity missing to reach the planned coverage.
    ///
    /// Negative when the destination is over-supplied.
    pub fn demand(&self) -> f64 {
        self.average_consumption * self.planned_coverage - self.inventory
    }

    /// Returns `true` while coverage is below plan.
    ///
    /// Shortfalls within floating-point noise of the plan count as covered,
    /// so a destination topped up with exactly its demand drops out.
    pub fn needs_supply(&self) -> bool {
        let shortfall = self.planned_coverage - self.coverage_time();
        shortfall > COVERAGE_EPS * self.planned_coverage.max(1.0)
    }
}

#[derive(Deserialize)]
struct DestinationRecord {
    id: usize,
    average_consumption: f64,
    planned_coverage: f64,
    #[serde(default)]
    inventory: f64,
}

impl TryFrom<DestinationRecord> for Destination {
    type Error = Error;

    fn try_from(record: DestinationRecord) -> Result<Self> {
        Destination::new(record.id, record.average_consumption, record.planned_coverage)?
            .with_inventory(record.inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_new() {
        let d = Destination::new(2, 4.0, 10.0).unwrap();
        assert_eq!(d.id(), 2);
        assert_eq!(d.inventory(), 0.0);
        assert_eq!(d.coverage_time(), 0.0);
        assert_eq!(d.demand(), 40.0);
    }

    #[test]
    fn test_destination_invalid() {
        assert!(Destination::new(0, 4.0, 10.0).is_err());
        assert!(Destination::new(1, 0.0, 10.0).is_err());
        assert!(Destination::new(1, 4.0, -1.0).is_err());
        assert!(Destination::new(1, f64::NAN, 1.0).is_err());
        assert!(Destination::new(1, 4.0, 10.0)
            .unwrap()
            .with_inventory(-3.0)
            .is_err());
    }

    #[test]
    fn test_receive_updates_derived_values() {
        let mut d = Destination::new(1, 5.0, 4.0).unwrap();
        d.receive(15.0).unwrap();
        assert_eq!(d.inventory(), 15.0);
        assert_eq!(d.coverage_time(), 3.0);
        assert_eq!(d.demand(), 5.0);
        assert!(d.needs_supply());

        d.receive(5.0).unwrap();
        assert_eq!(d.demand(), 0.0);
        assert!(!d.needs_supply());
    }

    #[test]
    fn test_receive_negative() {
        let mut d = Destination::new(1, 5.0, 4.0).unwrap();
        assert!(matches!(
            d.receive(-1.0),
            Err(Error::NegativeDelivery {
                destination_id: 1,
                ..
            })
        ));
        assert_eq!(d.inventory(), 0.0);
    }

    #[test]
    fn test_deserialize() {
        let d: Destination = serde_json::from_str(
            r#"{"id": 3, "average_consumption": 2.0, "planned_coverage": 7.0, "inventory": 4.0}"#,
        )
        .unwrap();
        assert_eq!(d.coverage_time(), 2.0);

        let bad: std::result::Result<Destination, _> = serde_json::from_str(
            r#"{"id": 3, "average_consumption": 0.0, "planned_coverage": 7.0}"#,
        );
        assert!(bad.is_err());
    }
}
