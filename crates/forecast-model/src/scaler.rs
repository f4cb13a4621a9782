//! 피처 표준화 스케일러.
//!
//! 학습 분할에서 열별 평균/표준편차를 한 번 계산하고, 이후에는
//! 불변입니다. 추론 시 동일한 변환을 적용해야 모델이 학습 때 본
//! 분포와 일치합니다.

use forecast_core::{ForecastError, ForecastResult, TrainingSet};
use serde::{Deserialize, Serialize};

/// 분산이 0에 수렴하는 열 판별 기준.
const MIN_SCALE: f64 = 1e-12;

/// 열별 평균/스케일 기반 표준화 스케일러.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// 열별 평균
    pub means: Vec<f64>,
    /// 열별 스케일 (표준편차, 상수 열은 1.0)
    pub scales: Vec<f64>,
    /// 피처 이름 (학습 시점의 열 순서)
    pub feature_names: Vec<String>,
}

impl StandardScaler {
    /// 학습 데이터셋에서 스케일러를 적합합니다.
    pub fn fit(set: &TrainingSet) -> ForecastResult<Self> {
        if set.is_empty() {
            return Err(ForecastError::Data(
                "빈 데이터셋에는 스케일러를 적합할 수 없습니다".to_string(),
            ));
        }

        let n_features = set.n_features();
        let n_samples = set.len() as f64;

        let mut means = vec![0.0; n_features];
        for row in &set.features {
            for (j, value) in row.iter().enumerate() {
                means[j] += value;
            }
        }
        for mean in &mut means {
            *mean /= n_samples;
        }

        let mut scales = vec![0.0; n_features];
        for row in &set.features {
            for (j, value) in row.iter().enumerate() {
                scales[j] += (value - means[j]).powi(2);
            }
        }
        for scale in &mut scales {
            *scale = (*scale / n_samples).sqrt();
            // 상수 열은 항등 변환으로 처리
            if *scale < MIN_SCALE {
                *scale = 1.0;
            }
        }

        Ok(Self {
            means,
            scales,
            feature_names: set.feature_names.clone(),
        })
    }

    /// 피처 개수.
    pub fn n_features(&self) -> usize {
        self.means.len()
    }

    /// 피처 벡터 하나를 변환합니다.
    pub fn transform(&self, features: &[f64]) -> ForecastResult<Vec<f64>> {
        if features.len() != self.n_features() {
            return Err(ForecastError::Internal(format!(
                "피처 폭 불일치: 기대 {}, 입력 {}",
                self.n_features(),
                features.len()
            )));
        }

        Ok(features
            .iter()
            .zip(self.means.iter().zip(self.scales.iter()))
            .map(|(value, (mean, scale))| (value - mean) / scale)
            .collect())
    }

    /// 피처 행렬 전체를 변환합니다.
    pub fn transform_matrix(&self, features: &[Vec<f64>]) -> ForecastResult<Vec<Vec<f64>>> {
        features.iter().map(|row| self.transform(row)).collect()
    }

    /// 변환을 역으로 되돌립니다.
    pub fn inverse_transform(&self, scaled: &[f64]) -> ForecastResult<Vec<f64>> {
        if scaled.len() != self.n_features() {
            return Err(ForecastError::Internal(format!(
                "피처 폭 불일치: 기대 {}, 입력 {}",
                self.n_features(),
                scaled.len()
            )));
        }

        Ok(scaled
            .iter()
            .zip(self.means.iter().zip(self.scales.iter()))
            .map(|(value, (mean, scale))| value * scale + mean)
            .collect())
    }
}
