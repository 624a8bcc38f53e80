//! Output of a planning run: terminal table, JSON, CSV ledger, and PNG.

mod ledger;
mod plot;
mod table;

pub use ledger::{append_ledger, ledger_rows, write_ledger, LedgerRow};
pub use plot::{assignment_image, save_assignment_image};
pub use table::render_table;

use crate::error::Result;
use crate::staging::PlanReport;

/// Serializes the full report as pretty JSON.
pub fn to_json(report: &PlanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
