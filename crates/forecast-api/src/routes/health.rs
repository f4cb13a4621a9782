//! 헬스 체크 endpoint.
//!
//! 로드밸런서나 오케스트레이션 시스템(Kubernetes 등)에서 사용됩니다.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// 헬스 체크 응답 구조체.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 전체 서비스 상태 ("healthy")
    pub status: String,
    /// API 버전
    pub version: String,
    /// 서버 업타임(초)
    pub uptime_secs: i64,
    /// 로드된 모델 학습 실행 id
    pub model_id: String,
    /// 모델 학습 시각 (ISO 8601)
    pub trained_at: String,
    /// 홀드아웃 R²
    pub holdout_r2: f64,
}

/// 단순 헬스 체크 (liveness probe).
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// 상세 헬스 체크 (readiness probe).
///
/// 예측기가 상태에 존재한다는 것 자체가 아티팩트 로드 성공을
/// 의미하므로, 모델 메타데이터를 함께 반환합니다.
pub async fn health_ready(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let bundle = state.predictor.bundle();
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_secs: (chrono::Utc::now() - state.started_at).num_seconds(),
        model_id: bundle.id.to_string(),
        trained_at: bundle.trained_at.to_rfc3339(),
        holdout_r2: bundle.metrics.r2,
    };
    (StatusCode::OK, Json(response))
}

/// 헬스 체크 라우터.
pub fn health_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(health_ready))
}
