use std::ops::RangeInclusive;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::fetch::pages::CapSource;
use crate::process::extract::extract_cap_table;
use crate::process::raw_table::RawYearTable;

/// Minimum interval between requests to the remote host. The site must not
/// be hit in parallel, so the pipeline pauses this long after every attempt,
/// successful or not.
pub struct Pacer {
    interval: Duration,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub async fn pause(&self) {
        sleep(self.interval).await;
    }
}

/// Fetch and extract one table per season, strictly in ascending order.
/// Years that fail at either stage are skipped; the run continues. The
/// returned accumulator holds one table per successful year, in year order.
pub async fn collect_years(
    source: &dyn CapSource,
    years: RangeInclusive<u16>,
    pacer: &Pacer,
) -> Vec<RawYearTable> {
    let mut tables = Vec::new();

    for year in years {
        let table = match source.fetch_year(year).await {
            Some(html) => extract_cap_table(&html, year),
            None => None,
        };
        match table {
            Some(table) => {
                info!("Scraping {year} ... Success!");
                tables.push(table);
            }
            None => warn!("Scraping {year} ... Failed"),
        }
        pacer.pause().await;
    }

    tables
}
