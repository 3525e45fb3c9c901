//! AWS published range list (ip-ranges.json)

use crate::types::{DriftError, Prefix};
use serde::Deserialize;

/// Public AWS IPv4 range list
pub const AWS_RANGES_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";

const PROVIDER: &str = "AWS";

/// Top-level ip-ranges.json payload (only the fields the run uses)
#[derive(Debug, Deserialize)]
pub struct AwsRanges {
    pub prefixes: Vec<AwsPrefix>,
}

/// One IPv4 prefix entry from ip-ranges.json
#[derive(Debug, Deserialize)]
pub struct AwsPrefix {
    pub ip_prefix: String,
    pub region: String,
    pub service: String,
}

/// An AWS service tracked as its own category.
///
/// Route 53 publishes one global range list, so it is the only service not
/// filtered to the configured region.
struct ServiceCategory {
    service: &'static str,
    category: &'static str,
    regional: bool,
}

const SERVICE_CATEGORIES: &[ServiceCategory] = &[
    ServiceCategory { service: "CLOUDFRONT", category: "CloudFront", regional: true },
    ServiceCategory { service: "EC2", category: "EC2", regional: true },
    ServiceCategory { service: "S3", category: "S3", regional: true },
    ServiceCategory { service: "API_GATEWAY", category: "API Gateway", regional: true },
    ServiceCategory { service: "ROUTE53", category: "Route 53", regional: false },
    ServiceCategory { service: "GLOBALACCELERATOR", category: "GlobalAccelerator", regional: true },
];

/// Partition a decoded payload into the tracked service categories.
///
/// Returns every tracked category, in fixed order, even when a service has
/// no prefixes for the configured region.
pub fn partition_by_service(ranges: &AwsRanges, region: &str) -> Vec<(String, Vec<Prefix>)> {
    SERVICE_CATEGORIES
        .iter()
        .map(|entry| {
            let prefixes = ranges
                .prefixes
                .iter()
                .filter(|prefix| {
                    prefix.service == entry.service && (!entry.regional || prefix.region == region)
                })
                .map(|prefix| Prefix::new(prefix.ip_prefix.clone()))
                .collect();
            (entry.category.to_string(), prefixes)
        })
        .collect()
}

/// Fetch and partition the AWS range list for one region
pub async fn fetch_aws_ranges(
    client: &reqwest::Client,
    region: &str,
) -> Result<Vec<(String, Vec<Prefix>)>, DriftError> {
    let ranges: AwsRanges = client
        .get(AWS_RANGES_URL)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|source| DriftError::Fetch { provider: PROVIDER, source })?
        .json()
        .await
        .map_err(|source| DriftError::Fetch { provider: PROVIDER, source })?;

    Ok(partition_by_service(&ranges, region))
}
