use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape NFL team salary-cap tables into a CSV dataset")]
pub struct Args {
    /// First season to scrape
    #[arg(long, default_value = "2011")]
    pub from_year: u16,

    /// Last season to scrape (inclusive)
    #[arg(long, default_value = "2024")]
    pub to_year: u16,

    /// Destination CSV path
    #[arg(long, default_value = "data/team_cap_2011_2024.csv")]
    pub out: PathBuf,

    /// Seconds to pause between requests
    #[arg(long, default_value = "1")]
    pub delay_secs: u64,

    /// Root of the stats site
    #[arg(long, default_value = "https://www.espn.com")]
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub years: RangeInclusive<u16>,
    pub out: PathBuf,
    pub delay: Duration,
    pub base: Url,
}

impl Args {
    pub fn into_config(self) -> Result<Config> {
        if self.from_year > self.to_year {
            return Err(anyhow!(
                "--from-year {} is after --to-year {}",
                self.from_year,
                self.to_year
            ));
        }
        let base = Url::parse(&self.base_url)?;

        Ok(Config {
            years: self.from_year..=self.to_year,
            out: self.out,
            delay: Duration::from_secs(self.delay_secs),
            base,
        })
    }
}
