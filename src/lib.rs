pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

pub use adapters::s3::S3ObjectStore;
pub use config::{GatewayCli, GatewayConfig};
pub use crate::core::compat::{CompatibilityVerifier, DetectedVersions, VerificationResult};
pub use crate::core::gateway::StorageGateway;
pub use utils::error::{GatewayError, Result};
