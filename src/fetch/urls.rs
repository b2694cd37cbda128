use url::Url;

/// Cap-table page for one season, e.g. `https://www.espn.com/nfl/cap/_/year/2023`.
pub fn cap_table_url(base: &Url, year: u16) -> Url {
    let mut url = base.clone();
    url.set_path(&format!("/nfl/cap/_/year/{year}"));
    url
}
