/// Parse a raw cap-dollar cell like `$10.5M` or `$1,234,567`.
///
/// Strips every `$`, `M`, and thousands separator, then parses what is left.
/// The `M` suffix is stripped without scaling, so `"$10.5M"` parses to
/// `10.5`.
/// TODO: scale `M`-suffixed values by 1e6 if the site ever switches the cap
/// columns to millions-denominated display.
pub fn normalize_currency(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | 'M' | ','))
        .collect();
    cleaned.trim().parse().ok()
}

/// Parse a cleaned numeric cell, stripping only `$` and thousands
/// separators. The cap columns are plain dollar figures, so `M` passes
/// through untouched on this path.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    cleaned.trim().parse().ok()
}
