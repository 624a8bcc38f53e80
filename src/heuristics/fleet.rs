//! Fleet reduction: never plan more destinations than there are vehicles.

use crate::error::{Error, Result};
use crate::models::Destination;

/// Limits the candidate destinations to the fleet size.
///
/// With fewer vehicles than destinations, keeps the `num_vehicles`
/// destinations with the lowest coverage time (ties broken by input order).
/// The kept destinations stay in their input order. Otherwise returns the
/// input unchanged.
///
/// # Errors
///
/// [`Error::Empty`] if there are no destinations or no vehicles.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::models::Destination;
/// use fuel_dispatch::heuristics::reduce_by_fleet;
///
/// let a = Destination::new(1, 1.0, 9.0).unwrap().with_inventory(5.0).unwrap();
/// let b = Destination::new(2, 1.0, 9.0).unwrap().with_inventory(1.0).unwrap();
/// let c = Destination::new(3, 1.0, 9.0).unwrap().with_inventory(3.0).unwrap();
///
/// let kept = reduce_by_fleet(vec![&a, &b, &c], 2).unwrap();
/// let ids: Vec<_> = kept.iter().map(|d| d.id()).collect();
/// assert_eq!(ids, vec![2, 3]);
/// ```
pub fn reduce_by_fleet(
    destinations: Vec<&Destination>,
    num_vehicles: usize,
) -> Result<Vec<&Destination>> {
    if destinations.is_empty() {
        return Err(Error::Empty("destinations"));
    }
    if num_vehicles == 0 {
        return Err(Error::Empty("vehicles"));
    }
    if num_vehicles >= destinations.len() {
        return Ok(destinations);
    }

    let mut order: Vec<usize> = (0..destinations.len()).collect();
    order.sort_by(|&a, &b| {
        destinations[a]
            .coverage_time()
            .total_cmp(&destinations[b].coverage_time())
    });

    let mut keep = vec![false; destinations.len()];
    for &i in order.iter().take(num_vehicles) {
        keep[i] = true;
    }

    Ok(destinations
        .into_iter()
        .zip(keep)
        .filter_map(|(d, k)| k.then_some(d))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dest(id: usize, inventory: f64) -> Destination {
        Destination::new(id, 2.0, 10.0)
            .unwrap()
            .with_inventory(inventory)
            .unwrap()
    }

    #[test]
    fn test_enough_vehicles_keeps_all() {
        let ds = [dest(1, 4.0), dest(2, 2.0)];
        let kept = reduce_by_fleet(ds.iter().collect(), 2).unwrap();
        assert_eq!(kept.len(), 2);
        let kept = reduce_by_fleet(ds.iter().collect(), 5).unwrap();
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_keeps_lowest_coverage() {
        let ds = [dest(1, 8.0), dest(2, 2.0), dest(3, 6.0), dest(4, 0.0)];
        let kept = reduce_by_fleet(ds.iter().collect(), 2).unwrap();
        let ids: Vec<_> = kept.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_ties_follow_input_order() {
        let ds = [dest(5, 2.0), dest(6, 2.0), dest(7, 2.0)];
        let kept = reduce_by_fleet(ds.iter().collect(), 2).unwrap();
        let ids: Vec<_> = kept.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec![5, 6]);
    }

    #[test]
    fn test_empty_inputs() {
        let ds = [dest(1, 0.0)];
        assert!(matches!(
            reduce_by_fleet(vec![], 3),
            Err(Error::Empty("destinations"))
        ));
        assert!(matches!(
            reduce_by_fleet(ds.iter().collect(), 0),
            Err(Error::Empty("vehicles"))
        ));
    }
}
