//! Carrying a stage's assignments forward into the next stage's state.

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Assignment, Destination, Vehicle};

/// Adds each assignment's delivered quantity to its destination.
///
/// Destinations that received nothing are left untouched.
///
/// # Errors
///
/// [`Error::UnknownId`] if an assignment names a destination that is not in
/// `destinations`, [`Error::NegativeDelivery`] for a negative quantity.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::models::{Assignment, Destination};
/// use fuel_dispatch::heuristics::update_destinations;
///
/// let mut destinations = vec![Destination::new(1, 10.0, 5.0).unwrap()];
/// let assignments = vec![Assignment {
///     vehicle_id: 0, destination_id: 1, origin: 0, delivered: 30.0, traffic: 1.0,
/// }];
/// update_destinations(&mut destinations, &assignments).unwrap();
/// assert_eq!(destinations[0].inventory(), 30.0);
/// ```
pub fn update_destinations(
    destinations: &mut [Destination],
    assignments: &[Assignment],
) -> Result<()> {
    for a in assignments {
        let destination = destinations
            .iter_mut()
            .find(|d| d.id() == a.destination_id)
            .ok_or(Error::UnknownId {
                kind: "destination",
                id: a.destination_id,
            })?;
        destination.receive(a.delivered)?;
        debug!(
            vehicle = a.vehicle_id,
            destination = a.destination_id,
            delivered = a.delivered,
            inventory = destination.inventory(),
            "destination inventory updated"
        );
    }
    Ok(())
}

/// Unloads each assigned vehicle and moves it.
///
/// A vehicle left empty returns to the depot and reloads to capacity; one
/// with fuel left waits at the destination it just served.
///
/// # Errors
///
/// [`Error::UnknownId`] if an assignment names a vehicle that is not in
/// `vehicles`, or the vehicle's own unload error.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::models::{Assignment, Vehicle, DEPOT};
/// use fuel_dispatch::heuristics::update_vehicles;
///
/// let mut vehicles = vec![Vehicle::new(0, 100.0).unwrap(), Vehicle::new(1, 30.0).unwrap()];
/// let assignments = vec![
///     Assignment { vehicle_id: 0, destination_id: 2, origin: 0, delivered: 40.0, traffic: 1.0 },
///     Assignment { vehicle_id: 1, destination_id: 3, origin: 0, delivered: 30.0, traffic: 1.0 },
/// ];
/// update_vehicles(&mut vehicles, &assignments).unwrap();
/// assert_eq!((vehicles[0].load(), vehicles[0].position()), (60.0, 2));
/// assert_eq!((vehicles[1].load(), vehicles[1].position()), (30.0, DEPOT));
/// ```
pub fn update_vehicles(vehicles: &mut [Vehicle], assignments: &[Assignment]) -> Result<()> {
    for a in assignments {
        let vehicle = vehicles
            .iter_mut()
            .find(|v| v.id() == a.vehicle_id)
            .ok_or(Error::UnknownId {
                kind: "vehicle",
                id: a.vehicle_id,
            })?;
        vehicle.unload(a.delivered, a.destination_id)?;
        debug!(
            vehicle = a.vehicle_id,
            destination = a.destination_id,
            delivered = a.delivered,
            load = vehicle.load(),
            position = vehicle.position(),
            "vehicle state updated"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEPOT;

    fn assignment(vehicle_id: usize, destination_id: usize, delivered: f64) -> Assignment {
        Assignment {
            vehicle_id,
            destination_id,
            origin: DEPOT,
            delivered,
            traffic: 0.0,
        }
    }

    #[test]
    fn test_update_destinations_only_assigned() {
        let mut ds = vec![
            Destination::new(1, 2.0, 10.0).unwrap(),
            Destination::new(2, 2.0, 10.0)
                .unwrap()
                .with_inventory(4.0)
                .unwrap(),
        ];
        update_destinations(&mut ds, &[assignment(0, 2, 6.0)]).unwrap();
        assert_eq!(ds[0].inventory(), 0.0);
        assert_eq!(ds[1].inventory(), 10.0);
        assert_eq!(ds[1].coverage_time(), 5.0);
    }

    #[test]
    fn test_update_destinations_unknown() {
        let mut ds = vec![Destination::new(1, 2.0, 10.0).unwrap()];
        let err = update_destinations(&mut ds, &[assignment(0, 9, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownId {
                kind: "destination",
                id: 9
            }
        ));
    }

    #[test]
    fn test_update_vehicles_partial_and_empty() {
        let mut vs = vec![
            Vehicle::new(0, 50.0).unwrap(),
            Vehicle::new(1, 50.0).unwrap().with_load(20.0).unwrap().with_position(3),
            Vehicle::new(2, 50.0).unwrap(),
        ];
        update_vehicles(&mut vs, &[assignment(0, 4, 10.0), assignment(1, 5, 20.0)]).unwrap();
        assert_eq!(vs[0].load(), 40.0);
        assert_eq!(vs[0].position(), 4);
        assert_eq!(vs[1].load(), 50.0);
        assert_eq!(vs[1].position(), DEPOT);
        // unassigned vehicle keeps its state
        assert_eq!(vs[2].load(), 50.0);
        assert_eq!(vs[2].position(), DEPOT);
    }

    #[test]
    fn test_update_vehicles_unknown() {
        let mut vs = vec![Vehicle::new(0, 50.0).unwrap()];
        assert!(update_vehicles(&mut vs, &[assignment(3, 1, 1.0)]).is_err());
    }
}
