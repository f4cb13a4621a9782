//! # Forecast API
//!
//! 잔고 예측 REST API 서버.
//!
//! 학습된 아티팩트(스케일러 + 랜덤 포레스트)를 기동 시 로드하고,
//! `POST /predict`로 미래 잔고 예측값을 제공합니다.

pub mod error;
pub mod predictor;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiErrorResponse};
pub use predictor::BalancePredictor;
pub use state::AppState;
