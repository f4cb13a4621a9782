//! 모델 아티팩트 영속화.
//!
//! 스케일러와 모델을 각각 JSON 파일로 저장합니다. 두 파일은 같은
//! 학습 실행에서 나와야 하므로 동일한 id를 공유하며, 로드 시
//! 포맷 버전 / 피처 이름 / 피처 개수를 검증하고 하나라도 어긋나면
//! 즉시 실패합니다.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use forecast_core::config::ArtifactConfig;
use forecast_core::domain::features::FEATURE_NAMES;
use forecast_core::{ForecastError, ForecastResult};

use crate::forest::RandomForestRegressor;
use crate::scaler::StandardScaler;
use crate::trainer::{ModelMetrics, TrainingOutcome};

/// 아티팩트 파일 포맷 버전.
pub const FORMAT_VERSION: u32 = 1;

/// 스케일러 아티팩트 (scaler.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub format_version: u32,
    /// 학습 실행 식별자 (모델 아티팩트와 동일해야 함)
    pub id: Uuid,
    pub trained_at: DateTime<Utc>,
    pub scaler: StandardScaler,
}

/// 모델 아티팩트 (model.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub id: Uuid,
    pub trained_at: DateTime<Utc>,
    pub metrics: ModelMetrics,
    pub forest: RandomForestRegressor,
}

/// 로드된 아티팩트 묶음.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub id: Uuid,
    pub trained_at: DateTime<Utc>,
    pub metrics: ModelMetrics,
    pub scaler: StandardScaler,
    pub forest: RandomForestRegressor,
}

impl ArtifactBundle {
    /// 학습 결과를 아티팩트 묶음으로 변환합니다.
    pub fn from_outcome(outcome: TrainingOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            trained_at: Utc::now(),
            metrics: outcome.metrics,
            scaler: outcome.scaler,
            forest: outcome.forest,
        }
    }

    /// 스케일러와 모델을 설정된 경로에 저장합니다.
    pub fn save(&self, cfg: &ArtifactConfig) -> ForecastResult<()> {
        fs::create_dir_all(&cfg.dir)?;

        let scaler_artifact = ScalerArtifact {
            format_version: FORMAT_VERSION,
            id: self.id,
            trained_at: self.trained_at,
            scaler: self.scaler.clone(),
        };
        let model_artifact = ModelArtifact {
            format_version: FORMAT_VERSION,
            id: self.id,
            trained_at: self.trained_at,
            metrics: self.metrics,
            forest: self.forest.clone(),
        };

        write_json(&cfg.scaler_path(), &scaler_artifact)?;
        write_json(&cfg.model_path(), &model_artifact)?;

        info!(
            id = %self.id,
            scaler = %cfg.scaler_path().display(),
            model = %cfg.model_path().display(),
            "Artifacts saved"
        );
        Ok(())
    }

    /// 설정된 경로에서 아티팩트를 로드하고 검증합니다.
    ///
    /// 파일 누락, 포맷 버전 불일치, 피처 이름/개수 불일치,
    /// 스케일러-모델 id 불일치는 모두 `ForecastError::Artifact`입니다.
    pub fn load(cfg: &ArtifactConfig) -> ForecastResult<Self> {
        let scaler_artifact: ScalerArtifact = read_json(&cfg.scaler_path())?;
        let model_artifact: ModelArtifact = read_json(&cfg.model_path())?;

        if scaler_artifact.format_version != FORMAT_VERSION {
            return Err(ForecastError::Artifact(format!(
                "스케일러 포맷 버전 불일치: expected {FORMAT_VERSION}, got {}",
                scaler_artifact.format_version
            )));
        }
        if model_artifact.format_version != FORMAT_VERSION {
            return Err(ForecastError::Artifact(format!(
                "모델 포맷 버전 불일치: expected {FORMAT_VERSION}, got {}",
                model_artifact.format_version
            )));
        }
        if scaler_artifact.id != model_artifact.id {
            return Err(ForecastError::Artifact(format!(
                "스케일러/모델이 서로 다른 학습 실행에서 나왔습니다: {} vs {}",
                scaler_artifact.id, model_artifact.id
            )));
        }
        if scaler_artifact.scaler.feature_names != FEATURE_NAMES {
            return Err(ForecastError::Artifact(format!(
                "피처 이름 불일치: expected {:?}, got {:?}",
                FEATURE_NAMES, scaler_artifact.scaler.feature_names
            )));
        }
        if scaler_artifact.scaler.n_features() != model_artifact.forest.n_features() {
            return Err(ForecastError::Artifact(format!(
                "스케일러/모델 피처 개수 불일치: {} vs {}",
                scaler_artifact.scaler.n_features(),
                model_artifact.forest.n_features()
            )));
        }

        info!(
            id = %scaler_artifact.id,
            trained_at = %scaler_artifact.trained_at,
            r2 = model_artifact.metrics.r2,
            "Artifacts loaded"
        );

        Ok(Self {
            id: scaler_artifact.id,
            trained_at: scaler_artifact.trained_at,
            metrics: model_artifact.metrics,
            scaler: scaler_artifact.scaler,
            forest: model_artifact.forest,
        })
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> ForecastResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> ForecastResult<T> {
    let json = fs::read_to_string(path).map_err(|e| {
        ForecastError::Artifact(format!(
            "아티팩트 파일을 읽을 수 없습니다 ({}): {e}",
            path.display()
        ))
    })?;
    serde_json::from_str(&json).map_err(|e| {
        ForecastError::Artifact(format!(
            "아티팩트 파일 파싱 실패 ({}): {e}",
            path.display()
        ))
    })
}
