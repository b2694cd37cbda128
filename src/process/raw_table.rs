/// The unmodified cap table scraped for one season.
#[derive(Debug, Clone)]
pub struct RawYearTable {
    /// Season the page was requested for; tags every row below.
    pub year: u16,
    /// Column names exactly as the page renders them, line breaks and all.
    pub headers: Vec<String>,
    /// Data rows, each padded or truncated to `headers.len()` fields.
    pub rows: Vec<Vec<String>>,
}
