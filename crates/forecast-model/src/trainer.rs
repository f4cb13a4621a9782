//! 학습 파이프라인.
//!
//! 학습 세트를 시드 기반으로 분할하고, 학습 분할에만 스케일러를
//! 적합시킨 뒤 랜덤 포레스트를 학습하고, 홀드아웃 분할로 회귀
//! 지표를 계산합니다.

use serde::{Deserialize, Serialize};
use tracing::info;

use forecast_core::config::TrainingConfig;
use forecast_core::{ForecastError, ForecastResult, TrainingSet};

use crate::forest::{ForestConfig, RandomForestRegressor};
use crate::scaler::StandardScaler;

/// 홀드아웃 분할 기준 회귀 지표.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
    /// 홀드아웃 샘플 수
    pub n_holdout: usize,
}

impl ModelMetrics {
    /// 예측값과 실제값으로 지표를 계산합니다.
    pub fn regression(actual: &[f64], predicted: &[f64]) -> ForecastResult<Self> {
        if actual.is_empty() || actual.len() != predicted.len() {
            return Err(ForecastError::Data(format!(
                "지표 계산 불가: actual {} / predicted {}",
                actual.len(),
                predicted.len()
            )));
        }

        let n = actual.len() as f64;
        let mse = actual
            .iter()
            .zip(predicted)
            .map(|(a, p)| (a - p).powi(2))
            .sum::<f64>()
            / n;
        let mae = actual
            .iter()
            .zip(predicted)
            .map(|(a, p)| (a - p).abs())
            .sum::<f64>()
            / n;

        let mean_actual = actual.iter().sum::<f64>() / n;
        let ss_tot: f64 = actual.iter().map(|a| (a - mean_actual).powi(2)).sum();
        let ss_res: f64 = actual
            .iter()
            .zip(predicted)
            .map(|(a, p)| (a - p).powi(2))
            .sum();
        let r2 = if ss_tot > 0.0 {
            1.0 - ss_res / ss_tot
        } else {
            0.0
        };

        Ok(Self {
            mse,
            rmse: mse.sqrt(),
            mae,
            r2,
            n_holdout: actual.len(),
        })
    }
}

/// 학습 결과: 스케일러 + 모델 + 홀드아웃 지표.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub scaler: StandardScaler,
    pub forest: RandomForestRegressor,
    pub metrics: ModelMetrics,
}

/// 전체 학습 파이프라인을 실행합니다.
///
/// 1. 시드 고정 셔플 분할 (test_ratio)
/// 2. 학습 분할에만 스케일러 적합
/// 3. 스케일된 학습 데이터로 포레스트 학습
/// 4. 홀드아웃 분할로 지표 계산
/// 5. `min_holdout_r2`가 설정돼 있으면 품질 게이트 검사
pub fn train(set: &TrainingSet, cfg: &TrainingConfig) -> ForecastResult<TrainingOutcome> {
    if set.is_empty() {
        return Err(ForecastError::Data("학습 세트가 비어 있습니다".into()));
    }

    let (train_set, holdout_set) = set.shuffle_split(cfg.test_ratio, cfg.split_seed);
    if train_set.is_empty() || holdout_set.is_empty() {
        return Err(ForecastError::Data(format!(
            "분할 후 샘플 부족: train {} / holdout {}",
            train_set.len(),
            holdout_set.len()
        )));
    }

    let scaler = StandardScaler::fit(&train_set)?;
    let scaled_train = scaler.transform_matrix(&train_set.features)?;
    let scaled_holdout = scaler.transform_matrix(&holdout_set.features)?;

    let mut forest = RandomForestRegressor::new(ForestConfig {
        n_trees: cfg.n_trees,
        max_depth: cfg.max_depth,
        min_samples_split: cfg.min_samples_split,
        min_samples_leaf: cfg.min_samples_leaf,
        max_features: None,
        seed: cfg.forest_seed,
    });
    forest.fit(&scaled_train, &train_set.labels)?;

    let predicted = forest.predict(&scaled_holdout)?;
    let metrics = ModelMetrics::regression(&holdout_set.labels, &predicted)?;

    info!(
        n_train = train_set.len(),
        n_holdout = holdout_set.len(),
        rmse = metrics.rmse,
        r2 = metrics.r2,
        "Model training complete"
    );

    if let Some(min_r2) = cfg.min_holdout_r2 {
        if metrics.r2 < min_r2 {
            return Err(ForecastError::Model(format!(
                "홀드아웃 R² {:.4}가 기준치 {:.4} 미만입니다",
                metrics.r2, min_r2
            )));
        }
    }

    Ok(TrainingOutcome {
        scaler,
        forest,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::domain::features::FEATURE_NAMES;

    fn patterned_set(n: usize) -> TrainingSet {
        let mut set = TrainingSet::new(FEATURE_NAMES.iter().map(|s| s.to_string()).collect());
        for i in 0..n {
            let dom = (i % 28 + 1) as f64;
            let dow = (i % 7) as f64;
            let balance = 1000.0 + 10.0 * i as f64;
            let horizon = [7.0, 30.0, 90.0][i % 3];
            // 레이블은 피처의 매끄러운 함수
            let label = balance + 5.0 * horizon - 20.0 * dow + dom;
            set.push(vec![dom, dow, balance, horizon], label);
        }
        set
    }

    fn fast_config() -> TrainingConfig {
        TrainingConfig {
            n_trees: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_train_produces_usable_model() {
        let set = patterned_set(300);
        let outcome = train(&set, &fast_config()).unwrap();

        assert!(outcome.metrics.r2 > 0.5, "R² = {}", outcome.metrics.r2);
        assert!(outcome.metrics.rmse >= 0.0);
        assert_eq!(outcome.scaler.n_features(), 4);
        assert_eq!(outcome.forest.n_trees(), 10);
    }

    #[test]
    fn test_train_is_deterministic() {
        let set = patterned_set(200);
        let cfg = fast_config();
        let a = train(&set, &cfg).unwrap();
        let b = train(&set, &cfg).unwrap();

        assert_eq!(a.metrics.rmse, b.metrics.rmse);
        assert_eq!(a.metrics.r2, b.metrics.r2);

        let x = a.scaler.transform(&[15.0, 2.0, 2000.0, 30.0]).unwrap();
        assert_eq!(
            a.forest.predict_one(&x).unwrap(),
            b.forest.predict_one(&x).unwrap()
        );
    }

    #[test]
    fn test_empty_set_rejected() {
        let set = TrainingSet::new(FEATURE_NAMES.iter().map(|s| s.to_string()).collect());
        assert!(matches!(
            train(&set, &fast_config()),
            Err(ForecastError::Data(_))
        ));
    }

    #[test]
    fn test_quality_gate_rejects_noise() {
        // 레이블이 피처와 무관한 순수 잡음이면 R² 게이트에 걸린다
        let mut set = TrainingSet::new(FEATURE_NAMES.iter().map(|s| s.to_string()).collect());
        use rand::{Rng, SeedableRng};
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
        for i in 0..200 {
            set.push(
                vec![(i % 28 + 1) as f64, (i % 7) as f64, 1000.0, 7.0],
                rng.gen_range(-1_000_000.0..1_000_000.0),
            );
        }

        let cfg = TrainingConfig {
            min_holdout_r2: Some(0.9),
            ..fast_config()
        };
        assert!(matches!(train(&set, &cfg), Err(ForecastError::Model(_))));
    }

    #[test]
    fn test_metrics_perfect_prediction() {
        let actual = vec![1.0, 2.0, 3.0];
        let m = ModelMetrics::regression(&actual, &actual).unwrap();
        assert_eq!(m.mse, 0.0);
        assert_eq!(m.mae, 0.0);
        assert_eq!(m.r2, 1.0);
    }

    #[test]
    fn test_metrics_length_mismatch() {
        assert!(ModelMetrics::regression(&[1.0, 2.0], &[1.0]).is_err());
    }
}
