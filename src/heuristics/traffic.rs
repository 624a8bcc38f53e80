//! Merchandise traffic indicator: delivered volume over distance travelled.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{Destination, PairTable, Vehicle};

/// Computes the traffic indicator of every vehicle-destination pair.
///
/// The indicator is the delivery quantity from `loads` divided by the
/// distance from the vehicle's current position to the destination.
///
/// # Errors
///
/// - [`Error::Empty`] if either list is empty
/// - [`Error::MissingPair`] if `loads` has no entry for a pair
/// - [`Error::MissingDistance`] if the matrix does not cover a pair
/// - [`Error::InvalidDistance`] for a negative or non-finite distance
/// - [`Error::ZeroDistance`] if a vehicle already sits at a destination
///
/// # Examples
///
/// ```
/// use fuel_dispatch::distance::DistanceMatrix;
/// use fuel_dispatch::models::{Destination, Vehicle};
/// use fuel_dispatch::heuristics::{delivery_quantities, traffic_indicators};
///
/// let vehicles = vec![Vehicle::new(0, 100.0).unwrap()];
/// let d = Destination::new(1, 10.0, 5.0).unwrap();
/// let dm = DistanceMatrix::from_positions(&[0.0, 25.0]);
///
/// let loads = delivery_quantities(&vehicles, &[&d]).unwrap();
/// let traffic = traffic_indicators(&vehicles, &[&d], &dm, &loads).unwrap();
/// assert_eq!(traffic.value(0, 1), Some(2.0)); // 50 / 25
/// ```
pub fn traffic_indicators(
    vehicles: &[Vehicle],
    destinations: &[&Destination],
    distances: &DistanceMatrix,
    loads: &PairTable,
) -> Result<PairTable> {
    if vehicles.is_empty() {
        return Err(Error::Empty("vehicles"));
    }
    if destinations.is_empty() {
        return Err(Error::Empty("destinations"));
    }

    let mut table = PairTable::new(
        vehicles.iter().map(Vehicle::id).collect(),
        destinations.iter().map(|d| d.id()).collect(),
    );
    for (row, vehicle) in vehicles.iter().enumerate() {
        for (col, destination) in destinations.iter().enumerate() {
            let quantity = loads
                .value(vehicle.id(), destination.id())
                .ok_or(Error::MissingPair {
                    vehicle_id: vehicle.id(),
                    destination_id: destination.id(),
                })?;

            let from = vehicle.position();
            let to = destination.id();
            let distance = distances
                .try_get(from, to)
                .ok_or(Error::MissingDistance { from, to })?;
            if !(distance.is_finite() && distance >= 0.0) {
                return Err(Error::InvalidDistance {
                    from,
                    to,
                    value: distance,
                });
            }
            if distance == 0.0 {
                return Err(Error::ZeroDistance { from, to });
            }

            table.set(row, col, quantity / distance);
        }
    }
    Ok(table)
}
