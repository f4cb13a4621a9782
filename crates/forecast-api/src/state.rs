//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! Arc로 래핑되어 여러 요청 간에 안전하게 공유됩니다. 예측기는
//! 기동 시 한 번 로드되며 이후 불변입니다.

use chrono::{DateTime, Utc};

use crate::predictor::BalancePredictor;

/// 애플리케이션 공유 상태.
#[derive(Clone)]
pub struct AppState {
    /// 아티팩트 기반 잔고 예측기
    pub predictor: BalancePredictor,

    /// 서버 시작 시각 (업타임 계산용)
    pub started_at: DateTime<Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    pub fn new(predictor: BalancePredictor) -> Self {
        Self {
            predictor,
            started_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// 테스트용 상태: 작은 합성 데이터로 즉석에서 학습한 모델을 사용합니다.
#[cfg(test)]
pub fn create_test_state() -> AppState {
    use chrono::NaiveDate;
    use forecast_core::config::{SynthConfig, TrainingConfig};
    use forecast_data::{build_training_set, LedgerSynthesizer};
    use forecast_model::{train, ArtifactBundle};

    let synth = LedgerSynthesizer::new(SynthConfig::default());
    let records = synth
        .generate(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        )
        .unwrap();
    let set = build_training_set(&records, &[7, 30]).unwrap();

    let cfg = TrainingConfig {
        n_trees: 5,
        ..Default::default()
    };
    let outcome = train(&set, &cfg).unwrap();
    let bundle = ArtifactBundle::from_outcome(outcome);

    AppState::new(BalancePredictor::new(bundle))
}
