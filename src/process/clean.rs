use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::process::money::parse_numeric;
use crate::process::raw_table::RawYearTable;

/// Footer rows the source table injects below the 32 franchises.
const AGGREGATE_LABELS: &[&str] = &["Totals", "Averages"];

static TEAM_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,3}").expect("team code pattern should be valid"));

/// One cleaned team-season row. The serde renames are the CSV header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCapRecord {
    #[serde(rename = "Year")]
    pub year: u16,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Total_Cap")]
    pub total_cap: Option<f64>,
    #[serde(rename = "Cap_Space")]
    pub cap_space: Option<f64>,
    #[serde(rename = "Active")]
    pub active: Option<f64>,
    #[serde(rename = "Reserves")]
    pub reserves: Option<f64>,
    #[serde(rename = "Dead")]
    pub dead: Option<f64>,
}

/// Collapse the multi-line rendering of a header cell to a single line:
/// line breaks become spaces, whitespace runs collapse, ends are trimmed.
pub fn normalize_header(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Where each required column sits in one season's table.
struct ColumnMap {
    team: usize,
    total_cap: usize,
    cap_space: usize,
    active: usize,
    reserves: usize,
    dead: usize,
}

/// Resolve the required headers against one table. A missing header means
/// the site changed its layout; proceeding would mis-map every column, so
/// this is fatal for the whole run.
fn resolve_columns(table: &RawYearTable) -> Result<ColumnMap> {
    let normalized: Vec<String> = table.headers.iter().map(|h| normalize_header(h)).collect();
    let find = |name: &str| {
        normalized.iter().position(|h| h == name).with_context(|| {
            format!(
                "year {}: expected column {:?} missing from headers {:?}",
                table.year, name, normalized
            )
        })
    };

    Ok(ColumnMap {
        team: find("Team")?,
        total_cap: find("Total Cap Allocations")?,
        cap_space: find("Cap Space All")?,
        active: find("Active 53-Man")?,
        reserves: find("Reserves IR/PUP/NFI/SUSP")?,
        dead: find("Dead Cap")?,
    })
}

/// Concatenate the collected season tables, in the order collected, into
/// cleaned records. Aggregate footer rows are dropped; numeric cells that
/// fail to parse become `None` and the row is kept.
pub fn clean_tables(tables: &[RawYearTable]) -> Result<Vec<TeamCapRecord>> {
    let mut records = Vec::new();

    for table in tables {
        let cols = resolve_columns(table)?;
        for row in &table.rows {
            let raw_team = row[cols.team].trim();
            if AGGREGATE_LABELS.contains(&raw_team) {
                continue;
            }
            let Some(code) = TEAM_CODE.find(raw_team) else {
                warn!(
                    "year {}: no team code in {:?}, row dropped",
                    table.year, raw_team
                );
                continue;
            };

            records.push(TeamCapRecord {
                year: table.year,
                team: code.as_str().to_string(),
                total_cap: parse_numeric(&row[cols.total_cap]),
                cap_space: parse_numeric(&row[cols.cap_space]),
                active: parse_numeric(&row[cols.active]),
                reserves: parse_numeric(&row[cols.reserves]),
                dead: parse_numeric(&row[cols.dead]),
            });
        }
    }

    Ok(records)
}
