//! Random fictitious scenarios for demos and tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{Destination, Scenario, Vehicle};

/// Ranges used by [`random_scenario`].
///
/// Destinations sit on a line east of the depot, at least `min_gap` apart,
/// so no two locations share a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Fleet size.
    pub num_vehicles: usize,
    /// Number of destinations.
    pub num_destinations: usize,
    /// Vehicle capacity range `[lo, hi)`.
    pub capacity: (f64, f64),
    /// Average consumption range `[lo, hi)`.
    pub consumption: (f64, f64),
    /// Planned coverage range `[lo, hi)`.
    pub planned_coverage: (f64, f64),
    /// Smallest gap between consecutive locations on the line.
    pub min_gap: f64,
    /// Largest gap between consecutive locations on the line.
    pub max_gap: f64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            num_vehicles: 3,
            num_destinations: 5,
            capacity: (20_000.0, 40_000.0),
            consumption: (1_000.0, 5_000.0),
            planned_coverage: (3.0, 7.0),
            min_gap: 5.0,
            max_gap: 40.0,
        }
    }
}

impl ScenarioParams {
    /// Sets fleet and destination counts.
    pub fn with_size(mut self, num_vehicles: usize, num_destinations: usize) -> Self {
        self.num_vehicles = num_vehicles;
        self.num_destinations = num_destinations;
        self
    }
}

fn sample<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

/// Draws a scenario: a full fleet at the depot and destinations with a
/// random starting inventory below their planned coverage.
///
/// # Errors
///
/// [`Error::Config`] for a non-positive gap, or the model's own validation
/// errors for empty counts and non-positive ranges.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::generator::{random_scenario, ScenarioParams};
///
/// let mut rng = u_numflow::random::create_rng(7);
/// let scenario = random_scenario(&ScenarioParams::default().with_size(2, 4), &mut rng).unwrap();
/// assert_eq!(scenario.vehicles().len(), 2);
/// assert_eq!(scenario.destinations().len(), 4);
/// ```
pub fn random_scenario<R: Rng>(params: &ScenarioParams, rng: &mut R) -> Result<Scenario> {
    if !(params.min_gap.is_finite() && params.min_gap > 0.0) || params.max_gap < params.min_gap {
        return Err(Error::Config(format!(
            "location gaps must satisfy 0 < min_gap <= max_gap, got {} and {}",
            params.min_gap, params.max_gap
        )));
    }

    let vehicles = (0..params.num_vehicles)
        .map(|id| Vehicle::new(id, sample(rng, params.capacity)))
        .collect::<Result<Vec<_>>>()?;

    let mut destinations = Vec::with_capacity(params.num_destinations);
    for id in 1..=params.num_destinations {
        let consumption = sample(rng, params.consumption);
        let plan = sample(rng, params.planned_coverage);
        let inventory = rng.random_range(0.0..1.0) * consumption * plan;
        destinations.push(Destination::new(id, consumption, plan)?.with_inventory(inventory)?);
    }

    let mut positions = Vec::with_capacity(params.num_destinations + 1);
    let mut x = 0.0;
    positions.push(x);
    for _ in 0..params.num_destinations {
        x += sample(rng, (params.min_gap, params.max_gap));
        positions.push(x);
    }

    Scenario::new(
        vehicles,
        destinations,
        DistanceMatrix::from_positions(&positions),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducible() {
        let params = ScenarioParams::default();
        let a = random_scenario(&params, &mut u_numflow::random::create_rng(42)).unwrap();
        let b = random_scenario(&params, &mut u_numflow::random::create_rng(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_destinations_need_supply() {
        let mut rng = u_numflow::random::create_rng(1);
        let s = random_scenario(&ScenarioParams::default(), &mut rng).unwrap();
        assert!(s.destinations().iter().all(|d| d.needs_supply()));
        assert!(s.vehicles().iter().all(|v| v.at_depot()));
    }

    #[test]
    fn test_distinct_positions() {
        let mut rng = u_numflow::random::create_rng(3);
        let s = random_scenario(&ScenarioParams::default().with_size(2, 8), &mut rng).unwrap();
        let dm = s.distances();
        for i in 0..dm.size() {
            for j in 0..dm.size() {
                if i != j {
                    assert!(dm.get(i, j) >= 5.0);
                }
            }
        }
    }

    #[test]
    fn test_invalid_params() {
        let mut rng = u_numflow::random::create_rng(3);
        let params = ScenarioParams {
            min_gap: 0.0,
            ..ScenarioParams::default()
        };
        assert!(matches!(
            random_scenario(&params, &mut rng),
            Err(Error::Config(_))
        ));
        let empty = ScenarioParams::default().with_size(0, 3);
        assert!(matches!(
            random_scenario(&empty, &mut rng),
            Err(Error::Empty("vehicles"))
        ));
    }
}
