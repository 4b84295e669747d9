use storage_gateway::core::compat::normalize_version;
use storage_gateway::{CompatibilityVerifier, DetectedVersions, VerificationResult};

fn verify(enabled: bool, runtime: &str, cloud: &str, sdk: &str) -> VerificationResult {
    CompatibilityVerifier::new(enabled).verify(&DetectedVersions::new(runtime, cloud, sdk))
}

#[test]
fn test_normalization_is_idempotent() {
    for v in [
        "3.4.1", "3.4.x", "3.4", "3", "2023.0.3", "unknown", "", "5.9.0",
    ] {
        let once = normalize_version(v);
        assert_eq!(normalize_version(&once), once, "not idempotent for {:?}", v);
    }
}

#[test]
fn test_wildcard_stripped_before_truncation() {
    assert_eq!(normalize_version("3.4.x"), "3.4");
    assert_eq!(normalize_version("3.4.1"), "3.4");
    assert_eq!(normalize_version("3.4.x"), normalize_version("3.4.1"));
}

#[test]
fn test_disabled_check_always_passes() {
    assert!(verify(false, "3.2.1", "2023.0.3", "5.9.0").is_compatible());
    assert!(verify(false, "9.9.9", "9.9.9", "9.9.9").is_compatible());
    assert!(verify(false, "unknown", "unknown", "unknown").is_compatible());
}

#[test]
fn test_compatible_combination_passes() {
    assert!(verify(true, "3.2.1", "2023.0.3", "5.9.0").is_compatible());
    assert!(verify(true, "3.3.0", "2024.0.0", "4.10.0").is_compatible());
    assert!(verify(true, "3.4.2", "2024.0.1", "4.10.3").is_compatible());
}

#[test]
fn test_wildcard_versions_match_like_concrete_ones() {
    assert!(verify(true, "3.2.x", "2023.0.x", "5.9.x").is_compatible());
}

#[test]
fn test_unaccepted_runtime_fails() {
    match verify(true, "3.9.0", "2024.0.0", "4.10.0") {
        VerificationResult::Incompatible { error, action } => {
            assert!(error.contains("Runtime [3.9.0]"), "error was: {}", error);
            assert!(error.contains("accepted versions"), "error was: {}", error);
            assert!(action.contains("compatibility_verifier.enabled=false"));
        }
        VerificationResult::Compatible => panic!("3.9 must not be accepted"),
    }
}

#[test]
fn test_cloud_release_mismatch_fails() {
    // 3.3 requires the 2024.0 cloud release line.
    match verify(true, "3.3.0", "2023.0.0", "4.10.0") {
        VerificationResult::Incompatible { error, .. } => {
            assert!(
                error.contains("Cloud release [2023.0.0] is not compatible with runtime [3.3.0]"),
                "error was: {}",
                error
            );
        }
        VerificationResult::Compatible => panic!("cloud release mismatch must fail"),
    }
}

#[test]
fn test_runtime_without_table_entries_fails_on_cloud_step() {
    // 3.5 is accepted but has no compatibility rows yet.
    match verify(true, "3.5.0", "2024.0.0", "4.10.0") {
        VerificationResult::Incompatible { error, .. } => {
            assert!(error.contains("Cloud release"), "error was: {}", error);
        }
        VerificationResult::Compatible => panic!("runtime without table rows must fail"),
    }
}

#[test]
fn test_sdk_mismatch_fails_and_names_expected_version() {
    match verify(true, "3.3.0", "2024.0.0", "9.9.9") {
        VerificationResult::Incompatible { error, .. } => {
            assert!(error.contains("Cloud SDK [9.9.9]"), "error was: {}", error);
            assert!(error.contains("Expected version: [4.10.0]"), "error was: {}", error);
        }
        VerificationResult::Compatible => panic!("SDK mismatch must fail"),
    }
}

#[test]
fn test_unknown_versions_fail_closed() {
    assert!(!verify(true, "unknown", "2023.0.0", "5.9.0").is_compatible());
    assert!(!verify(true, "3.2.1", "unknown", "5.9.0").is_compatible());
    assert!(!verify(true, "3.2.1", "2023.0.3", "unknown").is_compatible());
    assert!(!verify(true, "unknown", "unknown", "unknown").is_compatible());
}

#[test]
fn test_detection_falls_back_to_unknown() {
    std::env::remove_var("RUNTIME_VERSION");
    std::env::remove_var("CLOUD_RELEASE_VERSION");
    std::env::set_var("CLOUD_SDK_VERSION", "5.9.0");

    let detected = DetectedVersions::from_env();
    assert_eq!(detected.runtime, "unknown");
    assert_eq!(detected.cloud, "unknown");
    assert_eq!(detected.sdk, "5.9.0");

    std::env::remove_var("CLOUD_SDK_VERSION");
}
