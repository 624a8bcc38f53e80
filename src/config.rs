//! Planner configuration.
//!
//! Loaded from a `.toml` or `.json` file; every field has a default.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::assignment::{AssignmentSolver, Hungarian};
use crate::error::{Error, Result};

/// Which backend solves stages with more than one destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    /// Built-in Kuhn-Munkres.
    #[default]
    Hungarian,
    /// SCIP binary program (needs the `scip` feature).
    Scip,
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverKind::Hungarian => write!(f, "hungarian"),
            SolverKind::Scip => write!(f, "scip"),
        }
    }
}

/// Settings for a staged planning run.
///
/// # Examples
///
/// ```
/// use fuel_dispatch::config::{PlannerConfig, SolverKind};
///
/// let config = PlannerConfig::default().with_max_stages(10).with_stage_prefix("day");
/// assert_eq!(config.max_stages, 10);
/// assert_eq!(config.stage_name(3), "day-3");
/// assert_eq!(config.solver, SolverKind::Hungarian);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Upper bound on the number of stages.
    #[serde(default = "default_max_stages")]
    pub max_stages: usize,

    /// Stage names are `{stage_prefix}-{index}`.
    #[serde(default = "default_stage_prefix")]
    pub stage_prefix: String,

    /// Backend for multi-destination stages.
    #[serde(default)]
    pub solver: SolverKind,
}

fn default_max_stages() -> usize {
    100
}

fn default_stage_prefix() -> String {
    "stage".to_string()
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_stages: default_max_stages(),
            stage_prefix: default_stage_prefix(),
            solver: SolverKind::default(),
        }
    }
}

impl PlannerConfig {
    /// Sets the stage limit.
    pub fn with_max_stages(mut self, max_stages: usize) -> Self {
        self.max_stages = max_stages;
        self
    }

    /// Sets the stage name prefix.
    pub fn with_stage_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.stage_prefix = prefix.into();
        self
    }

    /// Sets the solver backend.
    pub fn with_solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }

    /// Name of the stage with the given 1-based index.
    pub fn stage_name(&self, index: usize) -> String {
        format!("{}-{}", self.stage_prefix, index)
    }

    /// Reads a config from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&text)?,
            Some("json") => serde_json::from_str(&text)?,
            _ => {
                return Err(Error::Config(format!(
                    "unsupported config file {}, expected .json or .toml",
                    path.display()
                )))
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the planner cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_stages == 0 {
            return Err(Error::Config("max_stages must be at least 1".into()));
        }
        Ok(())
    }

    /// Instantiates the configured solver backend.
    pub fn build_solver(&self) -> Result<Box<dyn AssignmentSolver>> {
        match self.solver {
            SolverKind::Hungarian => Ok(Box::new(Hungarian)),
            #[cfg(feature = "scip")]
            SolverKind::Scip => Ok(Box::new(crate::assignment::ScipSolver::new())),
            #[cfg(not(feature = "scip"))]
            SolverKind::Scip => Err(Error::Config(
                "solver \"scip\" requires building with --features scip".into(),
            )),
        }
    }
}
