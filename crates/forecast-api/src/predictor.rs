//! 예측 서비스.
//!
//! 로드된 아티팩트를 감싸고, 요청 값을 학습 때와 동일한 순서의
//! 피처 벡터로 변환해 예측합니다.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use forecast_core::domain::features::assemble;
use forecast_core::ForecastResult;
use forecast_model::ArtifactBundle;

/// 아티팩트 기반 잔고 예측기.
#[derive(Debug, Clone)]
pub struct BalancePredictor {
    bundle: ArtifactBundle,
}

impl BalancePredictor {
    pub fn new(bundle: ArtifactBundle) -> Self {
        Self { bundle }
    }

    /// `reference_date` 기준으로 `horizon`일 뒤의 잔고를 예측합니다.
    pub fn predict(
        &self,
        current_balance: f64,
        horizon: usize,
        reference_date: NaiveDate,
    ) -> ForecastResult<f64> {
        let features = assemble(
            reference_date.day(),
            reference_date.weekday().num_days_from_monday(),
            current_balance,
            horizon,
        );
        let scaled = self.bundle.scaler.transform(&features)?;
        let predicted = self.bundle.forest.predict_one(&scaled)?;

        debug!(
            balance = current_balance,
            horizon,
            reference_date = %reference_date,
            predicted,
            "Balance predicted"
        );
        Ok(predicted)
    }

    /// 로드된 아티팩트 묶음.
    pub fn bundle(&self) -> &ArtifactBundle {
        &self.bundle
    }
}
