//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/predict` - 잔고 예측

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod predict;

pub use health::{health_router, HealthResponse};
pub use predict::{predict_router, PredictRequest, PredictResponse};

/// 전체 API 라우터를 구성합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health_router())
        .merge(predict_router())
}
