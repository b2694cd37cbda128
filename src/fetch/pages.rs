use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;
use url::Url;

use crate::fetch::urls::cap_table_url;

/// Realistic desktop browser identity. The stats site serves automated
/// clients a stripped page with no data table, so every request carries this.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// One season page per call. Implementations log their own failures and
/// return `None`; the pipeline treats a missing page as a skipped year.
#[async_trait]
pub trait CapSource: Send + Sync {
    async fn fetch_year(&self, year: u16) -> Option<String>;
}

/// Live source: one GET per season against the configured site.
/// No retries and no caching; the client's default timeout applies.
pub struct HttpCapSource {
    client: Client,
    base: Url,
}

impl HttpCapSource {
    pub fn new(client: Client, base: Url) -> Self {
        Self { client, base }
    }
}

#[async_trait]
impl CapSource for HttpCapSource {
    async fn fetch_year(&self, year: u16) -> Option<String> {
        let url = cap_table_url(&self.base, year);

        let resp = match self.client.get(url.as_str()).send().await {
            Ok(resp) => resp,
            Err(err) => {
                warn!("year {year}: request failed: {err}");
                return None;
            }
        };
        if !resp.status().is_success() {
            warn!("year {year}: HTTP error: {}", resp.status());
            return None;
        }

        match resp.text().await {
            Ok(body) => Some(body),
            Err(err) => {
                warn!("year {year}: failed to read body: {err}");
                None
            }
        }
    }
}
