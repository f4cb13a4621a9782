//! # Forecast Core
//!
//! 잔고 예측 시스템의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 예측 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 일별 잔고 레코드 및 학습 데이터셋 타입
//! - 피처 벡터 조립 (학습/추론 공통 경로)
//! - 설정 관리
//! - 에러 타입
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
