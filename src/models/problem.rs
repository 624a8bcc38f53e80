//! Scenario: the input data of a staged dispatch run.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};

use super::{Destination, Vehicle};

/// Fleet, destinations, and distances for a planning run.
///
/// A scenario is validated on construction: both lists are non-empty, IDs
/// are unique, every distance is finite and non-negative, and the distance
/// matrix covers every destination and every vehicle's starting position.
///
/// Scenario files are JSON or TOML. Distances are given either as a full
/// `distances` matrix or as 1-D `positions` (index = location ID).
///
/// # Examples
///
/// ```
/// use fuel_dispatch::models::{Destination, Scenario, Vehicle};
/// use fuel_dispatch::distance::DistanceMatrix;
///
/// let scenario = Scenario::new(
///     vec![Vehicle::new(0, 100.0).unwrap()],
///     vec![Destination::new(1, 10.0, 5.0).unwrap()],
///     DistanceMatrix::from_positions(&[0.0, 20.0]),
/// )
/// .unwrap();
/// assert_eq!(scenario.vehicles().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScenarioRecord")]
pub struct Scenario {
    vehicles: Vec<Vehicle>,
    destinations: Vec<Destination>,
    distances: DistanceMatrix,
}

impl Scenario {
    /// Creates a validated scenario.
    pub fn new(
        vehicles: Vec<Vehicle>,
        destinations: Vec<Destination>,
        distances: DistanceMatrix,
    ) -> Result<Self> {
        if vehicles.is_empty() {
            return Err(Error::Empty("vehicles"));
        }
        if destinations.is_empty() {
            return Err(Error::Empty("destinations"));
        }

        if let Some((from, to, value)) = distances.find_invalid() {
            return Err(Error::InvalidDistance { from, to, value });
        }

        let mut seen = HashSet::new();
        for v in &vehicles {
            if !seen.insert(v.id()) {
                return Err(Error::Config(format!("duplicate vehicle id {}", v.id())));
            }
        }
        seen.clear();
        for d in &destinations {
            if !seen.insert(d.id()) {
                return Err(Error::Config(format!("duplicate destination id {}", d.id())));
            }
            if !distances.contains(d.id()) {
                return Err(Error::MissingDistance {
                    from: super::DEPOT,
                    to: d.id(),
                });
            }
        }
        for v in &vehicles {
            if !distances.contains(v.position()) {
                return Err(Error::UnknownId {
                    kind: "location",
                    id: v.position(),
                });
            }
        }

        Ok(Self {
            vehicles,
            destinations,
            distances,
        })
    }

    /// Reads a scenario from a `.json` or `.toml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(toml::from_str(&text)?),
            Some("json") => Ok(serde_json::from_str(&text)?),
            _ => Err(Error::Config(format!(
                "unsupported scenario file {}, expected .json or .toml",
                path.display()
            ))),
        }
    }

    /// Serializes the scenario as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The fleet.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// The destinations.
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Distances between locations.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Splits the scenario into owned parts.
    pub fn into_parts(self) -> (Vec<Vehicle>, Vec<Destination>, DistanceMatrix) {
        (self.vehicles, self.destinations, self.distances)
    }
}

#[derive(Deserialize)]
struct ScenarioRecord {
    vehicles: Vec<Vehicle>,
    destinations: Vec<Destination>,
    #[serde(default)]
    distances: Option<DistanceMatrix>,
    #[serde(default)]
    positions: Option<Vec<f64>>,
}

impl TryFrom<ScenarioRecord> for Scenario {
    type Error = Error;

    fn try_from(record: ScenarioRecord) -> Result<Self> {
        let distances = match (record.distances, record.positions) {
            (Some(dm), None) => dm,
            (None, Some(positions)) => DistanceMatrix::from_positions(&positions),
            (Some(_), Some(_)) => {
                return Err(Error::Config(
                    "give either distances or positions, not both".into(),
                ))
            }
            (None, None) => return Err(Error::Config("scenario has no distances".into())),
        };
        Scenario::new(record.vehicles, record.destinations, distances)
    }
}
