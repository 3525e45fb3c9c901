//! Genesys Cloud platform API (authenticated)
//!
//! Unlike the AWS and Google lists this source sits behind an OAuth2
//! client-credentials handshake: exchange the configured client id/secret
//! for a bearer token at the region's login host, then pull the CIDR
//! entities from the utilities endpoint.

use crate::types::{DriftError, Prefix};
use serde::Deserialize;

/// Category name for the Genesys Cloud range list
pub const GENESYS_CATEGORY: &str = "Genesys Cloud";

const PROVIDER: &str = "Genesys Cloud";

/// Map a configured region identifier to its Genesys Cloud platform domain.
///
/// Region keys follow the platform's own naming (underscored AWS-style
/// identifiers). Returns `None` for a region the platform does not host.
pub fn api_domain(region: &str) -> Option<&'static str> {
    match region {
        "us_east_1" => Some("mypurecloud.com"),
        "us_east_2" => Some("use2.us-gov-pure.cloud"),
        "us_west_2" => Some("usw2.pure.cloud"),
        "ca_central_1" => Some("cac1.pure.cloud"),
        "sa_east_1" => Some("sae1.pure.cloud"),
        "eu_west_1" => Some("mypurecloud.ie"),
        "eu_west_2" => Some("euw2.pure.cloud"),
        "eu_central_1" => Some("mypurecloud.de"),
        "eu_central_2" => Some("euc2.pure.cloud"),
        "ap_south_1" => Some("aps1.pure.cloud"),
        "ap_northeast_1" => Some("mypurecloud.jp"),
        "ap_northeast_2" => Some("apne2.pure.cloud"),
        "ap_northeast_3" => Some("apne3.pure.cloud"),
        "ap_southeast_2" => Some("mypurecloud.com.au"),
        "me_central_1" => Some("mec1.pure.cloud"),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Listing returned by /api/v2/utilities/ipranges
#[derive(Debug, Deserialize)]
pub struct IpRangeListing {
    pub entities: Vec<IpRangeEntity>,
}

/// One CIDR entity; some entities carry service metadata but no cidr
#[derive(Debug, Deserialize)]
pub struct IpRangeEntity {
    pub cidr: Option<String>,
    pub service: Option<String>,
}

/// Collect the CIDR of every entity that has one
pub fn extract_cidrs(listing: &IpRangeListing) -> Vec<Prefix> {
    listing
        .entities
        .iter()
        .filter_map(|entity| entity.cidr.as_deref())
        .map(Prefix::new)
        .collect()
}

/// Exchange client credentials for a bearer token at the region's login host
async fn request_token(
    client: &reqwest::Client,
    domain: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String, DriftError> {
    let response = client
        .post(format!("https://login.{domain}/oauth/token"))
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|source| DriftError::Fetch { provider: PROVIDER, source })?;

    if !response.status().is_success() {
        return Err(DriftError::Auth {
            provider: PROVIDER,
            reason: format!("token endpoint returned {}", response.status()),
        });
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|source| DriftError::Fetch { provider: PROVIDER, source })?;

    Ok(token.access_token)
}

/// Fetch the Genesys Cloud CIDR ranges for one region
pub async fn fetch_genesys_ranges(
    client: &reqwest::Client,
    region: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<Vec<Prefix>, DriftError> {
    let domain = api_domain(region).ok_or_else(|| {
        DriftError::Config(format!("Unknown Genesys Cloud region: {region}"))
    })?;

    let token = request_token(client, domain, client_id, client_secret).await?;

    let listing: IpRangeListing = client
        .get(format!("https://api.{domain}/api/v2/utilities/ipranges"))
        .bearer_auth(token)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|source| DriftError::Fetch { provider: PROVIDER, source })?
        .json()
        .await
        .map_err(|source| DriftError::Fetch { provider: PROVIDER, source })?;

    Ok(extract_cidrs(&listing))
}
