//! Configuration management

use crate::types::DriftError;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Command line interface
#[derive(Debug, Parser)]
#[command(name = "ipdrift", version, about = "Cloud IP range drift tracker")]
pub struct Cli {
    /// Path to the run configuration file
    #[arg(short, long, default_value = "ipdrift.toml")]
    pub config: PathBuf,

    /// Fetch, diff and write all reports, but leave the stored baseline untouched
    #[arg(long)]
    pub dry_run: bool,
}

/// On-disk configuration file layout (TOML)
#[derive(Debug, Deserialize)]
struct ConfigFile {
    aws_region: String,
    genesys_cloud_region: String,
    oauth2_client_id: String,
    oauth2_client_secret: String,
    latest_ips_file: PathBuf,
    previous_ips_file: PathBuf,
    ips_added_file: PathBuf,
    ips_removed_file: PathBuf,
}

/// Global configuration for one drift run.
///
/// Loaded once at startup and passed explicitly into every stage; nothing
/// reads configuration ambiently.
#[derive(Debug, Clone)]
pub struct Config {
    /// AWS region the service categories are filtered to (e.g. "eu-west-2")
    pub aws_region: String,

    /// Genesys Cloud region identifier (e.g. "eu_west_1")
    pub genesys_cloud_region: String,

    /// OAuth2 client credentials for the Genesys Cloud API
    pub oauth2_client_id: String,
    pub oauth2_client_secret: String,

    /// Where this run writes the freshly fetched snapshot
    pub latest_ips_file: PathBuf,

    /// The prior run's snapshot; replaced by rollover after a clean run
    pub previous_ips_file: PathBuf,

    /// Report outputs
    pub ips_added_file: PathBuf,
    pub ips_removed_file: PathBuf,

    /// Skip the baseline rollover (reports are still written)
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aws_region: String::new(),
            genesys_cloud_region: String::new(),
            oauth2_client_id: String::new(),
            oauth2_client_secret: String::new(),
            latest_ips_file: PathBuf::new(),
            previous_ips_file: PathBuf::new(),
            ips_added_file: PathBuf::new(),
            ips_removed_file: PathBuf::new(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Load and validate a configuration file
    pub fn load(path: &Path, dry_run: bool) -> Result<Self, DriftError> {
        let raw = fs::read_to_string(path).map_err(|err| {
            DriftError::Config(format!("Cannot read config file {}: {}", path.display(), err))
        })?;

        let file: ConfigFile = toml::from_str(&raw).map_err(|err| {
            DriftError::Config(format!("Invalid config file {}: {}", path.display(), err))
        })?;

        let config = Self {
            aws_region: file.aws_region,
            genesys_cloud_region: file.genesys_cloud_region,
            oauth2_client_id: file.oauth2_client_id,
            oauth2_client_secret: file.oauth2_client_secret,
            latest_ips_file: file.latest_ips_file,
            previous_ips_file: file.previous_ips_file,
            ips_added_file: file.ips_added_file,
            ips_removed_file: file.ips_removed_file,
            dry_run,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DriftError> {
        if self.aws_region.is_empty() {
            return Err(DriftError::Config("aws_region cannot be empty".to_string()));
        }

        if self.genesys_cloud_region.is_empty() {
            return Err(DriftError::Config(
                "genesys_cloud_region cannot be empty".to_string(),
            ));
        }

        if self.oauth2_client_id.is_empty() || self.oauth2_client_secret.is_empty() {
            return Err(DriftError::Config(
                "OAuth2 client credentials cannot be empty".to_string(),
            ));
        }

        // Writing the latest snapshot over the baseline before diffing would
        // make every run report zero drift.
        if self.latest_ips_file == self.previous_ips_file {
            return Err(DriftError::Config(
                "latest_ips_file and previous_ips_file cannot be the same path".to_string(),
            ));
        }

        Ok(())
    }
}

impl TryFrom<Cli> for Config {
    type Error = DriftError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        Config::load(&cli.config, cli.dry_run)
    }
}
