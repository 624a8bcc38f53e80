//! Plain-text tables for terminal output.

use std::fmt::Write;

use crate::staging::PlanReport;

/// Renders every stage's assignments followed by final coverage.
pub fn render_table(report: &PlanReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<12} {:>8} {:>12} {:>8} {:>12} {:>10}",
        "stage", "vehicle", "destination", "origin", "delivered", "traffic"
    );
    for stage in report.stages() {
        for a in stage.assignments() {
            let _ = writeln!(
                out,
                "{:<12} {:>8} {:>12} {:>8} {:>12.2} {:>10.4}",
                stage.name(),
                a.vehicle_id,
                a.destination_id,
                a.origin,
                a.delivered,
                a.traffic
            );
        }
        let _ = writeln!(
            out,
            "{:<12} objective {:.4} ({:?})",
            "", stage.objective(), stage.method()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:>12} {:>12} {:>10} {:>10}",
        "destination", "inventory", "coverage", "plan"
    );
    for d in report.destinations() {
        let _ = writeln!(
            out,
            "{:>12} {:>12.2} {:>10.2} {:>10.2}",
            d.id(),
            d.inventory(),
            d.coverage_time(),
            d.planned_coverage()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "stages: {}  delivered: {:.2}  objective: {:.4}  termination: {:?}",
        report.num_stages(),
        report.total_delivered(),
        report.total_objective(),
        report.termination()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerConfig;
    use crate::distance::DistanceMatrix;
    use crate::models::{Destination, Scenario, Vehicle};
    use crate::staging::StagedPlanner;

    #[test]
    fn test_render_table() {
        let s = Scenario::new(
            vec![Vehicle::new(4, 50.0).unwrap()],
            vec![Destination::new(1, 10.0, 2.0).unwrap()],
            DistanceMatrix::from_positions(&[0.0, 5.0]),
        )
        .unwrap();
        let report = StagedPlanner::new(PlannerConfig::default())
            .unwrap()
            .run(&s)
            .unwrap();
        let text = render_table(&report);
        assert!(text.starts_with("stage"));
        assert!(text.contains("stage-1"));
        assert!(text.contains("20.00"));
        assert!(text.contains("termination: Covered"));
    }
}
