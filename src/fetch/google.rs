//! Google published range list (goog.json)

use crate::types::{DriftError, Prefix};
use serde::Deserialize;

/// Public Google IP range list
pub const GOOGLE_RANGES_URL: &str = "https://www.gstatic.com/ipranges/goog.json";

/// Category name for the Google range list
pub const GOOGLE_CATEGORY: &str = "Google";

const PROVIDER: &str = "Google";

/// Top-level goog.json payload
#[derive(Debug, Deserialize)]
pub struct GoogleRanges {
    pub prefixes: Vec<GooglePrefix>,
}

/// One prefix entry; each entry carries either an IPv4 or an IPv6 prefix
#[derive(Debug, Deserialize)]
pub struct GooglePrefix {
    #[serde(rename = "ipv4Prefix")]
    pub ipv4_prefix: Option<String>,

    #[serde(rename = "ipv6Prefix")]
    pub ipv6_prefix: Option<String>,
}

/// Keep only the IPv4 prefixes from a decoded payload
pub fn extract_ipv4(ranges: &GoogleRanges) -> Vec<Prefix> {
    ranges
        .prefixes
        .iter()
        .filter_map(|prefix| prefix.ipv4_prefix.as_deref())
        .map(Prefix::new)
        .collect()
}

/// Fetch the Google range list
pub async fn fetch_google_ranges(client: &reqwest::Client) -> Result<Vec<Prefix>, DriftError> {
    let ranges: GoogleRanges = client
        .get(GOOGLE_RANGES_URL)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|source| DriftError::Fetch { provider: PROVIDER, source })?
        .json()
        .await
        .map_err(|source| DriftError::Fetch { provider: PROVIDER, source })?;

    Ok(extract_ipv4(&ranges))
}
