//! CSV ledger of deliveries, one row per assignment.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::staging::PlanReport;

/// One delivery in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Stage name.
    pub stage: String,
    /// Vehicle ID.
    pub vehicle: usize,
    /// Destination ID.
    pub destination: usize,
    /// Quantity delivered.
    pub delivered: f64,
}

/// Flattens a report into ledger rows, stage by stage.
pub fn ledger_rows(report: &PlanReport) -> Vec<LedgerRow> {
    report
        .stages()
        .iter()
        .flat_map(|stage| {
            stage.assignments().iter().map(move |a| LedgerRow {
                stage: stage.name().to_string(),
                vehicle: a.vehicle_id,
                destination: a.destination_id,
                delivered: a.delivered,
            })
        })
        .collect()
}

/// Writes the ledger with a `stage,vehicle,destination,delivered` header.
pub fn write_ledger<W: Write>(report: &PlanReport, writer: W) -> Result<()> {
    write_rows(report, writer, true)
}

/// Appends the ledger to a file, writing the header only if the file is new
/// or empty.
pub fn append_ledger(report: &PlanReport, path: impl AsRef<Path>) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let has_header = file.metadata()?.len() > 0;
    write_rows(report, file, !has_header)
}

fn write_rows<W: Write>(report: &PlanReport, writer: W, header: bool) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(header)
        .from_writer(writer);
    for row in ledger_rows(report) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
