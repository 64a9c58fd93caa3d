use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::api::BatchReport;
use crate::error::Result;

#[derive(Serialize)]
struct ReportDocument<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a BatchReport,
}

/// Write `report` as pretty JSON, stamped with the current UTC time
pub fn write_report(output: &Path, report: &BatchReport) -> Result<()> {
    let doc = ReportDocument {
        generated_at: Utc::now(),
        report,
    };
    let json_string = serde_json::to_string_pretty(&doc)?;
    std::fs::write(output, json_string)?;
    info!("Report written to {:?}", output);
    Ok(())
}
