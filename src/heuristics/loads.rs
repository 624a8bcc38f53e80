//! Delivery quantities for every vehicle-destination pair.

use crate::error::{Error, Result};
use crate::models::{Destination, PairTable, Vehicle};

/// Computes how much each vehicle would unload at each destination.
///
/// A vehicle carrying more than the destination's demand unloads only the
/// demand; otherwise it unloads everything it carries.
///
/// # Errors
///
/// [`Error::Empty`] if either list is empty.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::models::{Destination, Vehicle};
/// use fuel_dispatch::heuristics::delivery_quantities;
///
/// let vehicles = vec![Vehicle::new(0, 100.0).unwrap(), Vehicle::new(1, 20.0).unwrap()];
/// let d = Destination::new(1, 10.0, 5.0).unwrap(); // demand 50
///
/// let loads = delivery_quantities(&vehicles, &[&d]).unwrap();
/// assert_eq!(loads.value(0, 1), Some(50.0));
/// assert_eq!(loads.value(1, 1), Some(20.0));
/// ```
pub fn delivery_quantities(
    vehicles: &[Vehicle],
    destinations: &[&Destination],
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
            let available = vehicle.load();
            let demand = destination.demand();
            let quantity = if available > demand { demand } else { available };
            table.set(row, col, quantity);
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_of_load_and_demand() {
        let vehicles = vec![
            Vehicle::new(0, 100.0).unwrap().with_load(35.0).unwrap(),
            Vehicle::new(1, 100.0).unwrap(),
        ];
        let d1 = Destination::new(1, 10.0, 4.0).unwrap(); // demand 40
        let d2 = Destination::new(2, 5.0, 4.0)
            .unwrap()
            .with_inventory(10.0)
            .unwrap(); // demand 10
        let t = delivery_quantities(&vehicles, &[&d1, &d2]).unwrap();
        assert_eq!(t.value(0, 1), Some(35.0));
        assert_eq!(t.value(0, 2), Some(10.0));
        assert_eq!(t.value(1, 1), Some(40.0));
        assert_eq!(t.value(1, 2), Some(10.0));
    }

    #[test]
    fn test_equal_load_and_demand() {
        let vehicles = vec![Vehicle::new(0, 40.0).unwrap()];
        let d = Destination::new(1, 10.0, 4.0).unwrap();
        let t = delivery_quantities(&vehicles, &[&d]).unwrap();
        assert_eq!(t.value(0, 1), Some(40.0));
    }

    #[test]
    fn test_empty_inputs() {
        let d = Destination::new(1, 10.0, 4.0).unwrap();
        assert!(delivery_quantities(&[], &[&d]).is_err());
        let vehicles = vec![Vehicle::new(0, 40.0).unwrap()];
        assert!(delivery_quantities(&vehicles, &[]).is_err());
    }
}
