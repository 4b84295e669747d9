use std::env;
use std::fmt;

pub const UNKNOWN_VERSION: &str = "unknown";

const RUNTIME_VERSION_VAR: &str = "RUNTIME_VERSION";
const CLOUD_RELEASE_VERSION_VAR: &str = "CLOUD_RELEASE_VERSION";
const CLOUD_SDK_VERSION_VAR: &str = "CLOUD_SDK_VERSION";

// Runtime lines the gateway has been validated against.
const ACCEPTED_RUNTIME_VERSIONS: &[&str] = &["3.2", "3.3", "3.4", "3.5"];

// Flat compatibility matrix: (runtime, cloud release) -> required cloud SDK.
const COMPATIBILITY_TABLE: &[(&str, &str, &str)] = &[
    ("3.2", "2023.0", "5.9.0"),
    ("3.3", "2024.0", "4.10.0"),
    ("3.4", "2024.0", "4.10.0"),
];

/// Versions of the three platform layers the service runs on, as reported
/// by the deployment environment. Undetectable versions degrade to
/// `"unknown"` and never pass verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedVersions {
    pub runtime: String,
    pub cloud: String,
    pub sdk: String,
}

impl DetectedVersions {
    pub fn new(
        runtime: impl Into<String>,
        cloud: impl Into<String>,
        sdk: impl Into<String>,
    ) -> Self {
        Self {
            runtime: runtime.into(),
            cloud: cloud.into(),
            sdk: sdk.into(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            runtime: version_from_env(RUNTIME_VERSION_VAR),
            cloud: version_from_env(CLOUD_RELEASE_VERSION_VAR),
            sdk: version_from_env(CLOUD_SDK_VERSION_VAR),
        }
    }
}

impl fmt::Display for DetectedVersions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "runtime [{}], cloud release [{}], cloud SDK [{}]",
            self.runtime, self.cloud, self.sdk
        )
    }
}

fn version_from_env(var: &str) -> String {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            tracing::warn!("Cannot determine {}, treating it as unknown", var);
            UNKNOWN_VERSION.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    Compatible,
    Incompatible { error: String, action: String },
}

impl VerificationResult {
    fn not_compatible(error: String, action: String) -> Self {
        VerificationResult::Incompatible { error, action }
    }

    pub fn is_compatible(&self) -> bool {
        matches!(self, VerificationResult::Compatible)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CompatibilityTable {
    accepted_runtimes: &'static [&'static str],
    entries: &'static [(&'static str, &'static str, &'static str)],
}

impl CompatibilityTable {
    pub const fn builtin() -> Self {
        Self {
            accepted_runtimes: ACCEPTED_RUNTIME_VERSIONS,
            entries: COMPATIBILITY_TABLE,
        }
    }

    pub fn accepted_runtimes(&self) -> &'static [&'static str] {
        self.accepted_runtimes
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str, &'static str)] {
        self.entries
    }

    fn is_accepted_runtime(&self, normalized_runtime: &str) -> bool {
        self.accepted_runtimes.contains(&normalized_runtime)
    }

    fn expected_sdk(&self, normalized_runtime: &str, normalized_cloud: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(runtime, cloud, _)| runtime == normalized_runtime && cloud == normalized_cloud)
            .map(|&(_, _, sdk)| sdk)
    }
}

pub struct CompatibilityVerifier {
    enabled: bool,
    table: CompatibilityTable,
}

impl CompatibilityVerifier {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            table: CompatibilityTable::builtin(),
        }
    }

    pub fn verify(&self, detected: &DetectedVersions) -> VerificationResult {
        if !self.enabled {
            tracing::info!(
                "Compatibility verification is disabled via compatibility_verifier.enabled=false"
            );
            return VerificationResult::Compatible;
        }

        tracing::info!("Detected versions: {}", detected);

        let runtime = normalize_version(&detected.runtime);
        if !self.table.is_accepted_runtime(&runtime) {
            return VerificationResult::not_compatible(
                format!(
                    "Runtime [{}] is not in accepted versions: {:?}",
                    detected.runtime,
                    self.table.accepted_runtimes()
                ),
                self.action(),
            );
        }

        let cloud = normalize_version(&detected.cloud);
        let expected_sdk = match self.table.expected_sdk(&runtime, &cloud) {
            Some(expected) => expected,
            None => {
                return VerificationResult::not_compatible(
                    format!(
                        "Cloud release [{}] is not compatible with runtime [{}]",
                        detected.cloud, detected.runtime
                    ),
                    self.action(),
                );
            }
        };

        if normalize_version(&detected.sdk) != normalize_version(expected_sdk) {
            return VerificationResult::not_compatible(
                format!(
                    "Cloud SDK [{}] is not compatible with runtime [{}] and cloud release [{}]. Expected version: [{}]",
                    detected.sdk, detected.runtime, detected.cloud, expected_sdk
                ),
                self.action(),
            );
        }

        VerificationResult::Compatible
    }

    fn action(&self) -> String {
        format!(
            "Change the platform dependencies to a compatible combination.\n\
             Accepted runtime versions: {:?}\n\
             See the platform compatibility matrix: [https://example.com/docs/platform/compatibility]\n\
             To disable this check, set: [compatibility_verifier.enabled=false]",
            self.table.accepted_runtimes()
        )
    }
}

/// Truncates a version to its major.minor prefix, stripping a trailing
/// `.x` wildcard segment first, so "3.4.x" and "3.4.1" both become "3.4".
/// "unknown" and empty strings pass through untouched.
pub fn normalize_version(version: &str) -> String {
    if version.is_empty() || version == UNKNOWN_VERSION {
        return version.to_string();
    }
    strip_to_major_minor(strip_wildcard(version))
}

fn strip_wildcard(version: &str) -> &str {
    if version.ends_with(".x") {
        match version.find(".x") {
            Some(idx) => &version[..idx],
            None => version,
        }
    } else {
        version
    }
}

fn strip_to_major_minor(version: &str) -> String {
    let first_dot = version.find('.');
    let second_dot = first_dot.and_then(|idx| version[idx + 1..].find('.').map(|j| idx + 1 + j));
    match second_dot {
        Some(idx) => version[..idx].to_string(),
        None => version.to_string(),
    }
}
