use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;

use capscraper::export::{summarize, write_csv};
use capscraper::fetch::pages::CapSource;
use capscraper::pipeline::{collect_years, Pacer};
use capscraper::process::clean::clean_tables;

/// Stand-in for the live site: canned page per year, missing years fail.
struct CannedSource {
    pages: HashMap<u16, String>,
}

#[async_trait]
impl CapSource for CannedSource {
    async fn fetch_year(&self, year: u16) -> Option<String> {
        self.pages.get(&year).cloned()
    }
}

const TEAMS: [&str; 32] = [
    "ARI Arizona Cardinals",
    "ATL Atlanta Falcons",
    "BAL Baltimore Ravens",
    "BUF Buffalo Bills",
    "CAR Carolina Panthers",
    "CHI Chicago Bears",
    "CIN Cincinnati Bengals",
    "CLE Cleveland Browns",
    "DAL Dallas Cowboys",
    "DEN Denver Broncos",
    "DET Detroit Lions",
    "GB Green Bay Packers",
    "HOU Houston Texans",
    "IND Indianapolis Colts",
    "JAX Jacksonville Jaguars",
    "KC Kansas City Chiefs",
    "LAC Los Angeles Chargers",
    "LAR Los Angeles Rams",
    "LV Las Vegas Raiders",
    "MIA Miami Dolphins",
    "MIN Minnesota Vikings",
    "NE New England Patriots",
    "NO New Orleans Saints",
    "NYG New York Giants",
    "NYJ New York Jets",
    "PHI Philadelphia Eagles",
    "PIT Pittsburgh Steelers",
    "SEA Seattle Seahawks",
    "SF San Francisco 49ers",
    "TB Tampa Bay Buccaneers",
    "TEN Tennessee Titans",
    "WSH Washington Commanders",
];

/// Render a cap page the way the site does: one table, multi-line headers,
/// dollar-and-comma cells, and optionally the Totals/Averages footer.
fn cap_page(with_footer: bool) -> String {
    let mut html = String::from(
        "<html><body><table>\
        <tr><th>Team</th>\
        <th>Total Cap\nAllocations</th>\
        <th>Cap Space\nAll</th>\
        <th>Active\n53-Man</th>\
        <th>Reserves\nIR/PUP/NFI/SUSP</th>\
        <th>Dead\nCap</th></tr>",
    );
    for (i, team) in TEAMS.iter().enumerate() {
        html.push_str(&format!(
            "<tr><td>{team}</td>\
            <td>${},000,000</td>\
            <td>-$5,000,000</td>\
            <td>$180,000,000</td>\
            <td>$12,000,000</td>\
            <td>$8,500,000</td></tr>",
            200 + i
        ));
    }
    if with_footer {
        html.push_str(
            "<tr><td>Totals</td><td>$6,400,000,000</td><td>$0</td>\
            <td>$5,760,000,000</td><td>$384,000,000</td><td>$272,000,000</td></tr>\
            <tr><td>Averages</td><td>$200,000,000</td><td>$0</td>\
            <td>$180,000,000</td><td>$12,000,000</td><td>$8,500,000</td></tr>",
        );
    }
    html.push_str("</table></body></html>");
    html
}

fn no_delay() -> Pacer {
    Pacer::new(Duration::ZERO)
}

#[tokio::test]
async fn single_year_with_footer_rows_exports_32_teams() {
    let source = CannedSource {
        pages: HashMap::from([(2023, cap_page(true))]),
    };

    let tables = collect_years(&source, 2023..=2023, &no_delay()).await;
    assert_eq!(tables.len(), 1);

    let records = clean_tables(&tables).unwrap();
    assert_eq!(records.len(), 32);
    assert!(records.iter().all(|r| r.year == 2023));
    assert!(records.iter().all(|r| r.team != "Totals" && r.team != "Averages"));
    assert!(records
        .iter()
        .all(|r| (2..=3).contains(&r.team.len()) && r.team.chars().all(|c| c.is_ascii_uppercase())));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("caps.csv");
    write_csv(&path, &records).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 33, "header plus 32 team rows");
    assert!(!written.contains("Totals"));
}

#[tokio::test]
async fn failed_year_is_skipped_and_rest_survive() {
    // 2015 has no page (fetch fails); 2016 succeeds.
    let source = CannedSource {
        pages: HashMap::from([(2016, cap_page(false))]),
    };

    let tables = collect_years(&source, 2015..=2016, &no_delay()).await;
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].year, 2016);

    let records = clean_tables(&tables).unwrap();
    assert_eq!(records.len(), 32);
    assert!(records.iter().all(|r| r.year == 2016));

    let summary = summarize(&records);
    assert_eq!(summary.year_span, Some((2016, 2016)));
    assert_eq!(summary.rows_per_year.get(&2015), None);
    assert_eq!(summary.rows_per_year[&2016], 32);
}

#[tokio::test]
async fn page_without_table_is_skipped() {
    let source = CannedSource {
        pages: HashMap::from([(2014, "<html><body>be right back</body></html>".to_string())]),
    };

    let tables = collect_years(&source, 2014..=2014, &no_delay()).await;
    assert!(tables.is_empty());

    let records = clean_tables(&tables).unwrap();
    assert!(records.is_empty());
    assert_eq!(summarize(&records).year_span, None);
}

#[tokio::test]
async fn multi_line_headers_map_to_canonical_columns() {
    let source = CannedSource {
        pages: HashMap::from([(2019, cap_page(false))]),
    };

    let tables = collect_years(&source, 2019..=2019, &no_delay()).await;
    let records = clean_tables(&tables).unwrap();

    let cardinals = &records[0];
    assert_eq!(cardinals.team, "ARI");
    assert_eq!(cardinals.total_cap, Some(200000000.0));
    assert_eq!(cardinals.cap_space, Some(-5000000.0), "over-cap stays negative");
    assert_eq!(cardinals.active, Some(180000000.0));
    assert_eq!(cardinals.reserves, Some(12000000.0));
    assert_eq!(cardinals.dead, Some(8500000.0));
}

#[tokio::test]
async fn layout_drift_aborts_cleaning() {
    let drifted = "<table>\
        <tr><th>Team</th><th>Salary Cap</th></tr>\
        <tr><td>DAL Dallas Cowboys</td><td>$1</td></tr>\
        </table>";
    let source = CannedSource {
        pages: HashMap::from([(2022, drifted.to_string())]),
    };

    let tables = collect_years(&source, 2022..=2022, &no_delay()).await;
    assert_eq!(tables.len(), 1, "extraction itself succeeds");
    assert!(clean_tables(&tables).is_err(), "cleaning must fail fast");
}

#[tokio::test]
async fn years_accumulate_in_ascending_order() {
    let source = CannedSource {
        pages: HashMap::from([
            (2011, cap_page(false)),
            (2012, cap_page(true)),
            (2013, cap_page(false)),
        ]),
    };

    let tables = collect_years(&source, 2011..=2013, &no_delay()).await;
    let years: Vec<u16> = tables.iter().map(|t| t.year).collect();
    assert_eq!(years, vec![2011, 2012, 2013]);

    let records = clean_tables(&tables).unwrap();
    assert_eq!(records.len(), 96);
    let summary = summarize(&records);
    assert_eq!(summary.year_span, Some((2011, 2013)));
    assert!(summary.rows_per_year.values().all(|&n| n == 32));
}
