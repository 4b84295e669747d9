pub mod file;

use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::{
    validate_bind_addr, validate_bucket_name, validate_region, validate_url, Validate,
};
use clap::Parser;
use file::FileConfig;
use std::env;

const DEFAULT_REGION: &str = "ap-southeast-2";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Parser)]
#[command(name = "storage-gateway")]
#[command(about = "A minimal gateway exposing list/download endpoints for an object-storage bucket")]
pub struct GatewayCli {
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Target bucket name")]
    pub bucket: Option<String>,

    #[arg(long, help = "Storage backend region")]
    pub region: Option<String>,

    #[arg(long, help = "Custom storage endpoint URL (path-style addressing)")]
    pub endpoint_url: Option<String>,

    #[arg(long, help = "Socket address to listen on")]
    pub bind_addr: Option<String>,

    #[arg(long, help = "Disable the startup dependency compatibility check")]
    pub disable_compatibility_check: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bucket: String,
    pub region: String,
    pub endpoint_url: Option<String>,
    pub bind_addr: String,
    pub compatibility_check_enabled: bool,
    pub log_json: bool,
    pub verbose: bool,
}

impl GatewayConfig {
    // Precedence: command line > environment > config file > default.
    pub fn resolve(cli: GatewayCli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        let server = file.server.unwrap_or_default();
        let storage = file.storage.unwrap_or_default();
        let verifier = file.compatibility_verifier.unwrap_or_default();

        let bucket = cli
            .bucket
            .or_else(|| env_var("STORAGE_BUCKET"))
            .or(storage.bucket)
            .ok_or_else(|| GatewayError::ConfigError {
                message: "storage.bucket is required (set --bucket, STORAGE_BUCKET or the config file)"
                    .to_string(),
            })?;

        let region = cli
            .region
            .or_else(|| env_var("STORAGE_REGION"))
            .or(storage.region)
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let endpoint_url = cli
            .endpoint_url
            .or_else(|| env_var("STORAGE_ENDPOINT_URL"))
            .or(storage.endpoint_url);

        let bind_addr = cli
            .bind_addr
            .or_else(|| env_var("SERVER_BIND_ADDR"))
            .or(server.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let compatibility_check_enabled = if cli.disable_compatibility_check {
            false
        } else {
            env_var("COMPATIBILITY_VERIFIER_ENABLED")
                .map(|v| parse_bool(&v))
                .or(verifier.enabled)
                .unwrap_or(true)
        };

        let log_json = cli.log_json || server.log_json.unwrap_or(false);

        Ok(Self {
            bucket,
            region,
            endpoint_url,
            bind_addr,
            compatibility_check_enabled,
            log_json,
            verbose: cli.verbose,
        })
    }
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<()> {
        validate_bucket_name("storage.bucket", &self.bucket)?;
        validate_region("storage.region", &self.region)?;
        if let Some(endpoint) = &self.endpoint_url {
            validate_url("storage.endpoint_url", endpoint)?;
        }
        validate_bind_addr("server.bind_addr", &self.bind_addr)?;
        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
