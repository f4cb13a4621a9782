//! 예측 시스템의 에러 타입.
//!
//! 이 모듈은 예측 시스템 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 예측 에러.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 데이터 에러 (시계열 생성, 피처 구성, CSV 파싱)
    #[error("데이터 에러: {0}")]
    Data(String),

    /// 모델 에러 (학습 실패, 품질 게이트 미달)
    #[error("모델 에러: {0}")]
    Model(String),

    /// 아티팩트 에러 (누락, 버전 불일치, 피처 폭 불일치)
    #[error("아티팩트 에러: {0}")]
    Artifact(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(String),

    /// 내부 에러
    #[error("내부 에러: {0}")]
    Internal(String),
}

/// 예측 작업을 위한 Result 타입.
pub type ForecastResult<T> = Result<T, ForecastError>;

impl ForecastError {
    /// 호출자 잘못인 에러인지 확인합니다.
    ///
    /// 클라이언트 에러는 요청 거부(4xx)로, 나머지는 서버 에러(5xx)로
    /// 매핑됩니다.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ForecastError::InvalidInput(_))
    }

    /// 서비스 기동을 막아야 하는 에러인지 확인합니다.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ForecastError::Artifact(_) | ForecastError::Config(_))
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for ForecastError {
    fn from(err: std::io::Error) -> Self {
        ForecastError::Io(err.to_string())
    }
}
