//! Remote range providers
//!
//! Three independent sources feed a run: the AWS and Google published JSON
//! range lists (unauthenticated) and the Genesys Cloud platform API
//! (OAuth2 client credentials). Each provider module exposes a fetch
//! function returning prefixes grouped by category, plus the pure payload
//! extraction it is built on.

mod aws;
mod genesys;
mod google;

pub use aws::{fetch_aws_ranges, partition_by_service, AwsPrefix, AwsRanges, AWS_RANGES_URL};
pub use genesys::{
    api_domain, extract_cidrs, fetch_genesys_ranges, IpRangeEntity, IpRangeListing,
    GENESYS_CATEGORY,
};
pub use google::{
    extract_ipv4, fetch_google_ranges, GooglePrefix, GoogleRanges, GOOGLE_CATEGORY,
    GOOGLE_RANGES_URL,
};

use crate::config::Config;
use crate::types::{DriftError, Snapshot};
use std::time::Duration;

/// Build the shared HTTP client used by every provider fetch
pub fn build_client() -> Result<reqwest::Client, DriftError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("ipdrift/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(DriftError::HttpClient)
}

/// Fetch every provider and assemble the current snapshot.
///
/// Providers are fetched one after another; any failure aborts the whole
/// run. Category order is fixed: the six AWS service categories, then
/// Google, then Genesys Cloud - this is the sheet order of every workbook
/// the run writes.
pub async fn build_current_snapshot(
    client: &reqwest::Client,
    config: &Config,
    progress: Option<&dyn Fn(&str)>,
) -> Result<Snapshot, DriftError> {
    let report = |provider: &str| {
        if let Some(callback) = progress {
            callback(provider);
        }
    };

    let mut snapshot = Snapshot::new();

    report("AWS");
    for (category, prefixes) in fetch_aws_ranges(client, &config.aws_region).await? {
        snapshot.insert(category, prefixes);
    }

    report("Google");
    snapshot.insert(GOOGLE_CATEGORY, fetch_google_ranges(client).await?);

    report("Genesys Cloud");
    snapshot.insert(
        GENESYS_CATEGORY,
        fetch_genesys_ranges(
            client,
            &config.genesys_cloud_region,
            &config.oauth2_client_id,
            &config.oauth2_client_secret,
        )
        .await?,
    );

    Ok(snapshot)
}
