use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::process::clean::TeamCapRecord;

/// Output column order; also written when there are no records, so a run
/// with zero successful years still leaves a readable artifact.
const CSV_HEADER: &[&str] = &[
    "Year",
    "Team",
    "Total_Cap",
    "Cap_Space",
    "Active",
    "Reserves",
    "Dead",
];

/// Counts reported to the operator after a run.
#[derive(Debug, PartialEq)]
pub struct RunSummary {
    pub rows: usize,
    pub year_span: Option<(u16, u16)>,
    pub rows_per_year: BTreeMap<u16, usize>,
}

/// Write the dataset to `path`, creating the destination directory if
/// needed. Overwrites any previous file; output is deterministic for a
/// given input.
pub fn write_csv(path: &Path, records: &[TeamCapRecord]) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
        }
    }

    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    if records.is_empty() {
        writer.write_record(CSV_HEADER)?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

pub fn summarize(records: &[TeamCapRecord]) -> RunSummary {
    let mut rows_per_year = BTreeMap::new();
    for record in records {
        *rows_per_year.entry(record.year).or_insert(0) += 1;
    }
    let year_span = match (rows_per_year.keys().next(), rows_per_year.keys().last()) {
        (Some(&min), Some(&max)) => Some((min, max)),
        _ => None,
    };

    RunSummary {
        rows: records.len(),
        year_span,
        rows_per_year,
    }
}

/// Final summary block: total rows, season span, and per-year counts so a
/// season with missing data stands out at a glance.
pub fn report(summary: &RunSummary, path: &Path) {
    info!("wrote {} rows to {}", summary.rows, path.display());
    if let Some((min, max)) = summary.year_span {
        info!("seasons covered: {min}-{max}");
    }
    for (year, count) in &summary.rows_per_year {
        info!("  {year}: {count} teams");
    }
}
