//! Video service binary.
//!
//! Wires up:
//! - MongoDB cache for transcripts and question sets
//! - yt-dlp subtitle extraction
//! - AWS Bedrock for question generation and answer evaluation
//! - HTTP API with bearer authentication

use std::sync::Arc;
use tracing::{error, info};
use videoservice::adapters::bedrock::BedrockModel;
use videoservice::adapters::http::{self, jwt::TokenVerifier, AppState};
use videoservice::adapters::mongo::MongoStore;
use videoservice::adapters::ytdlp::{cmd::RealYtDlpRunner, YtDlpExtractor};
use videoservice::{ServiceConfig, VideoService};

fn configure_logger(config: &ServiceConfig) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("videoservice=info,tower_http=info"));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() {
    let config = match ServiceConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    configure_logger(&config);

    // 1. Adapters
    let verifier = match TokenVerifier::from_hex_secret(&config.jwt_secret_hex) {
        Ok(v) => v,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let store = match MongoStore::connect(&config.mongo_url, &config.mongo_db).await {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to configure MongoDB client: {}", e);
            std::process::exit(1);
        }
    };

    let model = BedrockModel::from_region(
        &config.aws_region,
        config.bedrock_model_id.clone(),
        config.max_tokens,
    )
    .await;

    let extractor = YtDlpExtractor::new(
        RealYtDlpRunner::new(config.ytdlp_bin.clone()),
        config.subtitle_lang.clone(),
        config.work_dir.clone(),
        config.extract_timeout,
    );

    // 2. Application service
    let service = Arc::new(VideoService::new(extractor, store, model));

    // 3. HTTP layer
    let app = http::router(AppState {
        service,
        verifier: Arc::new(verifier),
    });

    // 4. Start server
    let bind = format!("{}:{}", config.addr, config.port);
    let listener = match tokio::net::TcpListener::bind(&bind).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind {}: {}", bind, e);
            std::process::exit(1);
        }
    };
    info!(
        addr = %bind,
        db = %config.mongo_db,
        model = %config.bedrock_model_id,
        "video service listening"
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
