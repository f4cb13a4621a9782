//! 잔고 예측 API 서버.
//!
//! 기동 시 학습된 아티팩트(스케일러 + 모델)를 로드하고,
//! 로드에 실패하면 포트를 열지 않고 즉시 종료합니다.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use forecast_api::predictor::BalancePredictor;
use forecast_api::routes::create_api_router;
use forecast_api::state::AppState;
use forecast_core::config::AppConfig;
use forecast_core::logging::{init_logging, LogConfig};
use forecast_model::ArtifactBundle;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 파일 로드 (없어도 무방)
    dotenvy::dotenv().ok();

    let config = AppConfig::load_default()?;

    // RUST_LOG가 설정돼 있으면 env-filter가 설정 파일 값을 덮어쓴다
    let log_config = LogConfig::new(&config.logging.level)
        .with_format(config.logging.format.parse().unwrap_or_default());
    init_logging(log_config).map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {e}"))?;

    // 아티팩트 로드는 바인드보다 먼저: 모델 없는 서버는 뜨지 않는다
    let bundle = match ArtifactBundle::load(&config.artifacts) {
        Ok(bundle) => bundle,
        Err(e) => {
            error!(
                dir = %config.artifacts.dir,
                "Failed to load artifacts, refusing to start: {e}"
            );
            error!("Train a model first with `forecast train`");
            std::process::exit(1);
        }
    };
    info!(
        model_id = %bundle.id,
        trained_at = %bundle.trained_at,
        r2 = bundle.metrics.r2,
        "Artifacts loaded"
    );

    let state = Arc::new(AppState::new(BalancePredictor::new(bundle)));

    let app = create_api_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Balance forecast API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

/// Graceful shutdown 시그널 대기 (Ctrl+C 또는 SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, starting graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, starting graceful shutdown...");
        }
    }
}
