use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::Client as S3Client;
use clap::Parser;
use std::sync::Arc;
use storage_gateway::utils::{logger, validation::Validate};
use storage_gateway::{
    http, CompatibilityVerifier, DetectedVersions, GatewayCli, GatewayConfig, S3ObjectStore,
    StorageGateway, VerificationResult,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = GatewayCli::parse();
    let verbose = cli.verbose;

    // 解析配置
    let config = match GatewayConfig::resolve(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_logger(verbose);
    }

    tracing::info!("Starting storage-gateway");
    if verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 相容性檢查：不相容就拒絕啟動
    let verifier = CompatibilityVerifier::new(config.compatibility_check_enabled);
    match verifier.verify(&DetectedVersions::from_env()) {
        VerificationResult::Compatible => {
            tracing::info!("✅ All platform dependencies are compatible");
        }
        VerificationResult::Incompatible { error, action } => {
            tracing::error!("❌ Dependency incompatibility detected: {}", error);
            eprintln!("ERROR: {}", error);
            eprintln!("ACTION: {}", action);
            std::process::exit(1);
        }
    }

    // 建立 S3 客戶端
    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let mut builder = aws_sdk_s3::config::Builder::from(&shared_config)
        .region(Region::new(config.region.clone()));
    if let Some(endpoint) = &config.endpoint_url {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }
    let client = S3Client::from_conf(builder.build());

    let store = S3ObjectStore::new(client, config.bucket.clone());
    tracing::info!("Serving bucket [{}]", store.bucket());

    let gateway = StorageGateway::new(Arc::new(store));
    let app = http::router(http::AppState::new(gateway));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
