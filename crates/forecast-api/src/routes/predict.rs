//! 잔고 예측 endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::error::ApiError;
use crate::state::AppState;

/// 예측 요청.
#[derive(Debug, Deserialize, Validate)]
pub struct PredictRequest {
    /// 현재 잔고
    #[validate(range(min = -1e12, max = 1e12, message = "current_balance가 허용 범위를 벗어났습니다"))]
    pub current_balance: f64,

    /// 예측 horizon (일 단위)
    #[validate(range(min = 1, max = 365, message = "horizon은 1 이상 365 이하여야 합니다"))]
    pub horizon: usize,

    /// 기준 날짜 (생략 시 오늘, UTC)
    pub reference_date: Option<NaiveDate>,
}

/// 예측 응답.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    /// 예측 잔고
    pub predicted_amount: f64,
}

/// POST /predict 핸들러.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    let reference_date = request
        .reference_date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    let predicted_amount =
        state
            .predictor
            .predict(request.current_balance, request.horizon, reference_date)?;

    info!(
        balance = request.current_balance,
        horizon = request.horizon,
        reference_date = %reference_date,
        predicted_amount,
        "Prediction request served"
    );

    Ok(Json(PredictResponse { predicted_amount }))
}

/// 예측 라우터.
pub fn predict_router() -> Router<Arc<AppState>> {
    Router::new().route("/predict", post(predict))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::state::create_test_state;

    fn app() -> Router {
        predict_router().with_state(Arc::new(create_test_state()))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_predict_returns_numeric_amount() {
        let response = app()
            .oneshot(post_json(
                r#"{"current_balance": 3200.0, "horizon": 30, "reference_date": "2024-07-15"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let predict: PredictResponse = serde_json::from_slice(&body).unwrap();
        assert!(predict.predicted_amount.is_finite());
    }

    #[tokio::test]
    async fn test_predict_is_deterministic_for_same_request() {
        let state = Arc::new(create_test_state());
        let body = r#"{"current_balance": 3200.0, "horizon": 7, "reference_date": "2024-07-15"}"#;

        let mut amounts = Vec::new();
        for _ in 0..2 {
            let app = predict_router().with_state(state.clone());
            let response = app.oneshot(post_json(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let predict: PredictResponse = serde_json::from_slice(&bytes).unwrap();
            amounts.push(predict.predicted_amount);
        }
        assert_eq!(amounts[0], amounts[1]);
    }

    #[tokio::test]
    async fn test_reference_date_is_optional() {
        let response = app()
            .oneshot(post_json(r#"{"current_balance": 1000.0, "horizon": 7}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_zero_horizon_rejected() {
        let response = app()
            .oneshot(post_json(r#"{"current_balance": 1000.0, "horizon": 0}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oversized_horizon_rejected() {
        let response = app()
            .oneshot(post_json(r#"{"current_balance": 1000.0, "horizon": 366}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_negative_horizon_rejected() {
        // usize 역직렬화 단계에서 거부된다
        let response = app()
            .oneshot(post_json(r#"{"current_balance": 1000.0, "horizon": -5}"#))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_non_numeric_horizon_rejected() {
        let response = app()
            .oneshot(post_json(r#"{"current_balance": 1000.0, "horizon": "soon"}"#))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_missing_body_rejected() {
        let response = app().oneshot(post_json("")).await.unwrap();
        assert!(response.status().is_client_error());
    }
}
