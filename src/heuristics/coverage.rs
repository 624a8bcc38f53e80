//! Coverage reduction: drop destinations that are already covered.

use crate::models::Destination;

/// Whether the staged procedure should run another stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageAction {
    /// Some destination still needs supply.
    Continue,
    /// Every destination meets its planned coverage.
    Stop,
}

/// Keeps the destinations whose coverage time is below plan.
///
/// Returns the remaining destinations in their original order, together
/// with [`StageAction::Stop`] when none remain.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::models::Destination;
/// use fuel_dispatch::heuristics::{reduce_by_coverage, StageAction};
///
/// let destinations = vec![
///     Destination::new(1, 10.0, 3.0).unwrap().with_inventory(40.0).unwrap(),
///     Destination::new(2, 10.0, 3.0).unwrap().with_inventory(10.0).unwrap(),
/// ];
/// let (remaining, action) = reduce_by_coverage(&destinations);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].id(), 2);
/// assert_eq!(action, StageAction::Continue);
/// ```
pub fn reduce_by_coverage(destinations: &[Destination]) -> (Vec<&Destination>, StageAction) {
    let remaining: Vec<&Destination> = destinations.iter().filter(|d| d.needs_supply()).collect();
    let action = if remaining.is_empty() {
        StageAction::Stop
    } else {
        StageAction::Continue
    };
    (remaining, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dest(id: usize, inventory: f64) -> Destination {
        Destination::new(id, 5.0, 4.0)
            .unwrap()
            .with_inventory(inventory)
            .unwrap()
    }

    #[test]
    fn test_exactly_at_plan_is_covered() {
        // 20 / 5 = 4 time units, equal to the plan
        let destinations = vec![dest(1, 20.0), dest(2, 19.0)];
        let (remaining, action) = reduce_by_coverage(&destinations);
        assert_eq!(remaining.iter().map(|d| d.id()).collect::<Vec<_>>(), vec![2]);
        assert_eq!(action, StageAction::Continue);
    }

    #[test]
    fn test_all_covered_stops() {
        let destinations = vec![dest(1, 25.0), dest(2, 40.0)];
        let (remaining, action) = reduce_by_coverage(&destinations);
        assert!(remaining.is_empty());
        assert_eq!(action, StageAction::Stop);
    }

    #[test]
    fn test_empty_input_stops() {
        let (remaining, action) = reduce_by_coverage(&[]);
        assert!(remaining.is_empty());
        assert_eq!(action, StageAction::Stop);
    }

    #[test]
    fn test_preserves_order() {
        let destinations = vec![dest(3, 0.0), dest(1, 5.0), dest(2, 1.0)];
        let (remaining, _) = reduce_by_coverage(&destinations);
        let ids: Vec<_> = remaining.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
