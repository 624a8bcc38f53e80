//! Staged planner: chains one assignment problem per stage.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::assignment::{AssignmentModel, AssignmentSolver, SingleDestination};
use crate::config::PlannerConfig;
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::heuristics::{
    delivery_quantities, reduce_by_coverage, reduce_by_fleet, traffic_indicators,
    update_destinations, update_vehicles, StageAction,
};
use crate::models::{Assignment, Destination, Scenario, StageResult, Vehicle};

/// Why a planning run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Every destination reached its planned coverage.
    Covered,
    /// The configured stage limit was hit first.
    StageLimit,
}

/// Stage results and final state of a planning run.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    stages: Vec<StageResult>,
    termination: Termination,
    vehicles: Vec<Vehicle>,
    destinations: Vec<Destination>,
    coverage_history: Vec<Vec<f64>>,
}

impl PlanReport {
    /// Stage results in order.
    pub fn stages(&self) -> &[StageResult] {
        &self.stages
    }

    /// Number of stages run.
    pub fn num_stages(&self) -> usize {
        self.stages.len()
    }

    /// Why the run ended.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Returns `true` if every destination reached its planned coverage.
    pub fn is_covered(&self) -> bool {
        self.termination == Termination::Covered
    }

    /// Vehicles after the last stage.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Destinations after the last stage.
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Coverage time of each destination (scenario order), before the first
    /// stage and after every stage.
    pub fn coverage_history(&self) -> &[Vec<f64>] {
        &self.coverage_history
    }

    /// Sum of the stage objectives.
    pub fn total_objective(&self) -> f64 {
        self.stages.iter().map(StageResult::objective).sum()
    }

    /// Total quantity delivered over all stages.
    pub fn total_delivered(&self) -> f64 {
        self.stages.iter().map(StageResult::total_delivered).sum()
    }
}

/// Runs the staged heuristic decomposition.
///
/// Each stage drops covered destinations, trims the rest to the fleet size,
/// scores every pair by its traffic indicator, solves the assignment, and
/// applies the deliveries before the next stage.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::config::PlannerConfig;
/// use fuel_dispatch::distance::DistanceMatrix;
/// use fuel_dispatch::models::{Destination, Scenario, Vehicle};
/// use fuel_dispatch::staging::StagedPlanner;
///
/// let scenario = Scenario::new(
///     vec![Vehicle::new(0, 60.0).unwrap(), Vehicle::new(1, 60.0).unwrap()],
///     vec![
///         Destination::new(1, 10.0, 4.0).unwrap(),
///         Destination::new(2, 5.0, 4.0).unwrap(),
///     ],
///     DistanceMatrix::from_positions(&[0.0, 10.0, 20.0]),
/// )
/// .unwrap();
///
/// let planner = StagedPlanner::new(PlannerConfig::default()).unwrap();
/// let report = planner.run(&scenario).unwrap();
/// assert!(report.is_covered());
/// assert!(report.destinations().iter().all(|d| !d.needs_supply()));
/// ```
pub struct StagedPlanner {
    config: PlannerConfig,
    solver: Box<dyn AssignmentSolver>,
}

impl StagedPlanner {
    /// Creates a planner with the solver named in the config.
    pub fn new(config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        let solver = config.build_solver()?;
        Ok(Self { config, solver })
    }

    /// Creates a planner with a caller-supplied solver.
    pub fn with_solver(config: PlannerConfig, solver: Box<dyn AssignmentSolver>) -> Self {
        Self { config, solver }
    }

    /// The planner's configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Runs stages until every destination is covered or the stage limit
    /// is reached.
    pub fn run(&self, scenario: &Scenario) -> Result<PlanReport> {
        let mut vehicles = scenario.vehicles().to_vec();
        let mut destinations = scenario.destinations().to_vec();
        let distances = scenario.distances();

        let mut stages = Vec::new();
        let mut coverage_history = vec![coverage(&destinations)];
        let mut termination = Termination::StageLimit;

        for index in 1..=self.config.max_stages {
            match self.run_stage(index, &mut vehicles, &mut destinations, distances)? {
                Some(stage) => {
                    stages.push(stage);
                    coverage_history.push(coverage(&destinations));
                }
                None => {
                    termination = Termination::Covered;
                    break;
                }
            }
        }

        if termination == Termination::StageLimit {
            if reduce_by_coverage(&destinations).1 == StageAction::Stop {
                termination = Termination::Covered;
            } else {
                warn!(
                    max_stages = self.config.max_stages,
                    uncovered = destinations.iter().filter(|d| d.needs_supply()).count(),
                    "stage limit reached before full coverage"
                );
            }
        }

        info!(
            stages = stages.len(),
            termination = ?termination,
            "planning finished"
        );

        Ok(PlanReport {
            stages,
            termination,
            vehicles,
            destinations,
            coverage_history,
        })
    }

    /// Runs one stage, updating vehicles and destinations in place.
    ///
    /// Returns `None` without touching anything if every destination is
    /// already covered.
    pub fn run_stage(
        &self,
        index: usize,
        vehicles: &mut [Vehicle],
        destinations: &mut [Destination],
        distances: &DistanceMatrix,
    ) -> Result<Option<StageResult>> {
        let (candidates, action) = reduce_by_coverage(destinations);
        if action == StageAction::Stop {
            return Ok(None);
        }
        let selected = reduce_by_fleet(candidates, vehicles.len())?;
        let loads = delivery_quantities(vehicles, &selected)?;
        let traffic = traffic_indicators(vehicles, &selected, distances, &loads)?;

        let name = self.config.stage_name(index);
        let model = AssignmentModel::new(name.clone(), traffic)?;
        debug!(
            stage = %name,
            vehicles = model.num_vehicles(),
            destinations = model.num_destinations(),
            "assignment model built"
        );

        let solver: &dyn AssignmentSolver = if model.num_destinations() == 1 {
            &SingleDestination
        } else {
            self.solver.as_ref()
        };
        let plan = solver.solve(&model)?;

        let violations = model.check(&plan);
        if !violations.is_empty() {
            return Err(Error::Solver(format!(
                "{name}: plan breaks {} constraint(s), first: {:?}",
                violations.len(),
                violations[0].kind
            )));
        }

        let mut stage = StageResult::new(index, name, solver.method());
        let coefficients = model.coefficients();
        for (row, col) in plan.selected() {
            let vehicle = &vehicles[row];
            stage.push(Assignment {
                vehicle_id: vehicle.id(),
                destination_id: coefficients.destination_ids()[col],
                origin: vehicle.position(),
                delivered: loads.get(row, col),
                traffic: coefficients.get(row, col),
            });
        }
        stage.set_objective(model.objective(&plan));

        update_destinations(destinations, stage.assignments())?;
        update_vehicles(vehicles, stage.assignments())?;

        info!(
            stage = %stage.name(),
            method = ?stage.method(),
            assignments = stage.num_assignments(),
            objective = stage.objective(),
            delivered = stage.total_delivered(),
            "stage solved"
        );
        Ok(Some(stage))
    }
}

fn coverage(destinations: &[Destination]) -> Vec<f64> {
    destinations.iter().map(Destination::coverage_time).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::{Hungarian, Plan};
    use crate::models::{SolveMethod, DEPOT};

    fn scenario() -> Scenario {
        Scenario::new(
            vec![Vehicle::new(0, 50.0).unwrap(), Vehicle::new(1, 30.0).unwrap()],
            vec![
                Destination::new(1, 10.0, 4.0)
                    .unwrap()
                    .with_inventory(10.0)
                    .unwrap(),
                Destination::new(2, 5.0, 4.0).unwrap(),
                Destination::new(3, 2.0, 5.0)
                    .unwrap()
                    .with_inventory(20.0)
                    .unwrap(),
            ],
            DistanceMatrix::from_positions(&[0.0, 10.0, 20.0, 40.0]),
        )
        .unwrap()
    }

    #[test]
    fn test_first_stage() {
        let s = scenario();
        let planner = StagedPlanner::new(PlannerConfig::default()).unwrap();
        let (mut vs, mut ds, dm) = s.into_parts();

        let stage = planner
            .run_stage(1, &mut vs, &mut ds, &dm)
            .unwrap()
            .expect("destinations 1 and 2 need supply");

        // destination 3 is covered (20 / 2 = 10 >= 5); 1 needs 30, 2 needs 20
        // traffic: v0→1 = 30/10, v0→2 = 20/20, v1→1 = 30/10, v1→2 = 20/20
        assert_eq!(stage.num_assignments(), 2);
        assert_eq!(stage.method(), SolveMethod::Hungarian);
        assert!((stage.objective() - 4.0).abs() < 1e-10);
        assert!((stage.objective() - stage.total_traffic()).abs() < 1e-10);
        assert!(ds[0].inventory() >= 40.0 - 1e-10);
        assert!(ds[1].inventory() >= 20.0 - 1e-10);
        assert_eq!(ds[2].inventory(), 20.0);
    }

    #[test]
    fn test_run_until_covered() {
        let planner = StagedPlanner::new(PlannerConfig::default()).unwrap();
        let report = planner.run(&scenario()).unwrap();
        assert!(report.is_covered());
        assert!(report.num_stages() >= 1);
        assert!(report.destinations().iter().all(|d| !d.needs_supply()));
        assert_eq!(report.coverage_history().len(), report.num_stages() + 1);
    }

    #[test]
    fn test_single_destination_stage_is_trivial() {
        let s = Scenario::new(
            vec![
                Vehicle::new(0, 100.0).unwrap(),
                Vehicle::new(1, 100.0).unwrap().with_position(2),
            ],
            vec![
                Destination::new(1, 10.0, 2.0).unwrap(),
                Destination::new(2, 1.0, 1.0)
                    .unwrap()
                    .with_inventory(5.0)
                    .unwrap(),
            ],
            DistanceMatrix::from_positions(&[0.0, 30.0, 25.0]),
        )
        .unwrap();
        let planner = StagedPlanner::new(PlannerConfig::default()).unwrap();
        let report = planner.run(&s).unwrap();

        let first = &report.stages()[0];
        assert_eq!(first.method(), SolveMethod::Trivial);
        // vehicle 1 is 5 away, vehicle 0 is 30 away
        assert_eq!(first.assignments()[0].vehicle_id, 1);
        assert_eq!(first.assignments()[0].origin, 2);
        assert!(report.is_covered());
    }

    #[test]
    fn test_empty_vehicle_returns_to_depot() {
        let s = Scenario::new(
            vec![Vehicle::new(0, 10.0).unwrap()],
            vec![Destination::new(1, 10.0, 3.0).unwrap()],
            DistanceMatrix::from_positions(&[0.0, 5.0]),
        )
        .unwrap();
        let planner = StagedPlanner::new(PlannerConfig::default()).unwrap();
        let report = planner.run(&s).unwrap();
        // demand 30 with a 10-unit tank: three full trips from the depot
        assert_eq!(report.num_stages(), 3);
        assert!(report
            .stages()
            .iter()
            .all(|st| st.assignments()[0].origin == DEPOT));
        assert_eq!(report.vehicles()[0].position(), DEPOT);
        assert!((report.total_delivered() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_stage_limit() {
        let s = Scenario::new(
            vec![Vehicle::new(0, 10.0).unwrap()],
            vec![Destination::new(1, 10.0, 3.0).unwrap()],
            DistanceMatrix::from_positions(&[0.0, 5.0]),
        )
        .unwrap();
        let planner = StagedPlanner::new(PlannerConfig::default().with_max_stages(2)).unwrap();
        let report = planner.run(&s).unwrap();
        assert_eq!(report.num_stages(), 2);
        assert_eq!(report.termination(), Termination::StageLimit);
    }

    #[test]
    fn test_already_covered() {
        let s = Scenario::new(
            vec![Vehicle::new(0, 10.0).unwrap()],
            vec![Destination::new(1, 1.0, 3.0)
                .unwrap()
                .with_inventory(3.0)
                .unwrap()],
            DistanceMatrix::from_positions(&[0.0, 5.0]),
        )
        .unwrap();
        let planner = StagedPlanner::new(PlannerConfig::default()).unwrap();
        let report = planner.run(&s).unwrap();
        assert_eq!(report.num_stages(), 0);
        assert!(report.is_covered());
    }

    struct Idle;

    impl AssignmentSolver for Idle {
        fn method(&self) -> SolveMethod {
            SolveMethod::Hungarian
        }
        fn solve(&self, model: &AssignmentModel) -> Result<Plan> {
            Ok(Plan::from_pairs(
                model.num_vehicles(),
                model.num_destinations(),
                &[],
            ))
        }
    }

    #[test]
    fn test_rejects_infeasible_plan() {
        let planner = StagedPlanner::with_solver(PlannerConfig::default(), Box::new(Idle));
        let err = planner.run(&scenario()).unwrap_err();
        assert!(matches!(err, Error::Solver(_)));
    }

    #[test]
    fn test_custom_solver_used_for_multi_destination() {
        let planner = StagedPlanner::with_solver(PlannerConfig::default(), Box::new(Hungarian));
        let report = planner.run(&scenario()).unwrap();
        assert_eq!(report.stages()[0].method(), SolveMethod::Hungarian);
    }
}
