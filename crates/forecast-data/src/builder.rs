//! 피처/레이블 빌더.
//!
//! 일별 시계열을 순회하며 각 날짜 × 각 horizon에 대해
//! 피처 벡터와 레이블(해당 horizon 뒤의 잔고)을 만듭니다.
//! horizon을 명시적 피처로 넣어 모델 하나가 여러 예측 거리를
//! 커버합니다.

use forecast_core::{assemble, DailyRecord, ForecastError, ForecastResult, TrainingSet, FEATURE_NAMES};
use tracing::debug;

/// 시계열에서 학습 데이터셋을 생성합니다.
///
/// 길이 L의 시계열과 horizon 집합 H에 대해 정확히
/// `|H| × (L − max(H))`개의 샘플을 만듭니다. 인덱스 상한을
/// `L − max(H)`로 잡아 `i + h`가 항상 범위 안에 있도록 보장합니다.
pub fn build_training_set(
    records: &[DailyRecord],
    horizons: &[usize],
) -> ForecastResult<TrainingSet> {
    if horizons.is_empty() {
        return Err(ForecastError::InvalidInput(
            "horizon 집합이 비어 있습니다".to_string(),
        ));
    }

    let max_horizon = horizons.iter().copied().max().unwrap_or(0);
    if records.len() <= max_horizon {
        return Err(ForecastError::Data(format!(
            "시계열 길이({})가 최대 horizon({})보다 길어야 합니다",
            records.len(),
            max_horizon
        )));
    }

    let mut set = TrainingSet::new(FEATURE_NAMES.iter().map(|s| s.to_string()).collect());

    for i in 0..(records.len() - max_horizon) {
        let record = &records[i];
        for &horizon in horizons {
            let features = assemble(
                record.day_of_month(),
                record.day_of_week(),
                record.balance_f64(),
                horizon,
            );
            let label = records[i + horizon].balance_f64();
            set.push(features, label);
        }
    }

    debug!(
        days = records.len(),
        horizons = ?horizons,
        samples = set.len(),
        "Training set built"
    );

    Ok(set)
}
