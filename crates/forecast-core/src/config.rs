//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 합성 시계열 생성 설정
    #[serde(default)]
    pub synth: SynthConfig,
    /// 학습 설정
    #[serde(default)]
    pub training: TrainingConfig,
    /// 아티팩트 저장 설정
    #[serde(default)]
    pub artifacts: ArtifactConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 합성 시계열 생성 설정.
///
/// 고정 캘린더 규칙(월세, 급여, 주말 장보기)과 일별 무작위 지출의
/// 금액 범위를 정의합니다. 모든 무작위 추출은 `seed`로 재현 가능합니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SynthConfig {
    /// 시작 잔고
    pub start_balance: Decimal,
    /// 매월 1일 월세 (차감)
    pub rent: Decimal,
    /// 매월 15일/30일 급여 (가산)
    pub salary: Decimal,
    /// 토요일 장보기 최소 금액 (포함)
    pub grocery_min: i64,
    /// 토요일 장보기 최대 금액 (미포함)
    pub grocery_max: i64,
    /// 일별 지출 최소 금액 (포함)
    pub daily_min: i64,
    /// 일별 지출 최대 금액 (미포함)
    pub daily_max: i64,
    /// 무작위 추출 시드
    pub seed: u64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            start_balance: Decimal::new(3000, 0),
            rent: Decimal::new(1500, 0),
            salary: Decimal::new(2500, 0),
            grocery_min: 100,
            grocery_max: 200,
            daily_min: 20,
            daily_max: 80,
            seed: 7,
        }
    }
}

/// 학습 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrainingConfig {
    /// 예측 horizon 집합 (일 단위)
    pub horizons: Vec<usize>,
    /// 홀드아웃 비율
    pub test_ratio: f64,
    /// 학습/홀드아웃 분할 시드 (분할 재현성 전용)
    pub split_seed: u64,
    /// 트리 개수
    pub n_trees: usize,
    /// 트리 최대 깊이
    pub max_depth: usize,
    /// 분할 최소 샘플 수
    pub min_samples_split: usize,
    /// 리프 최소 샘플 수
    pub min_samples_leaf: usize,
    /// 앙상블 시드
    pub forest_seed: u64,
    /// 홀드아웃 R² 최소 기준 (설정 시 미달 모델은 저장 거부)
    #[serde(default)]
    pub min_holdout_r2: Option<f64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            horizons: crate::domain::DEFAULT_HORIZONS.to_vec(),
            test_ratio: 0.2,
            split_seed: 42,
            n_trees: 100,
            max_depth: 10,
            min_samples_split: 5,
            min_samples_leaf: 2,
            forest_seed: 42,
            min_holdout_r2: None,
        }
    }
}

/// 아티팩트 저장 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactConfig {
    /// 아티팩트 디렉토리
    pub dir: String,
    /// 스케일러 파일명
    pub scaler_file: String,
    /// 모델 파일명
    pub model_file: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            dir: "models".to_string(),
            scaler_file: "scaler.json".to_string(),
            model_file: "model.json".to_string(),
        }
    }
}

impl ArtifactConfig {
    /// 스케일러 파일 전체 경로.
    pub fn scaler_path(&self) -> std::path::PathBuf {
        Path::new(&self.dir).join(&self.scaler_file)
    }

    /// 모델 파일 전체 경로.
    pub fn model_path(&self) -> std::path::PathBuf {
        Path::new(&self.dir).join(&self.model_file)
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("FORECAST")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 내장 기본값을 사용합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        if Path::new("config/default.toml").exists() {
            Self::load("config/default.toml")
        } else {
            Ok(Self::default())
        }
    }
}
