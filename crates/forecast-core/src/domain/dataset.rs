//! 학습 데이터셋.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// 피처 행렬과 레이블 벡터.
///
/// 피처/레이블 빌더가 생성하고 트레이너가 소비합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSet {
    /// 피처 이름 (열 순서와 일치)
    pub feature_names: Vec<String>,
    /// 피처 행렬 (샘플 × 피처)
    pub features: Vec<Vec<f64>>,
    /// 레이블 벡터
    pub labels: Vec<f64>,
}

impl TrainingSet {
    /// 빈 데이터셋을 생성합니다.
    pub fn new(feature_names: Vec<String>) -> Self {
        Self {
            feature_names,
            features: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// 샘플을 추가합니다.
    pub fn push(&mut self, features: Vec<f64>, label: f64) {
        debug_assert_eq!(features.len(), self.feature_names.len());
        self.features.push(features);
        self.labels.push(label);
    }

    /// 샘플 수.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// 비어 있는지 확인.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// 피처 개수.
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// 시드 셔플 후 학습/홀드아웃으로 분할합니다.
    ///
    /// 시드는 분할 재현성 전용입니다. `test_ratio`는 (0, 1) 범위를
    /// 벗어나면 0.2로 고정합니다.
    pub fn shuffle_split(&self, test_ratio: f64, seed: u64) -> (TrainingSet, TrainingSet) {
        let ratio = if test_ratio > 0.0 && test_ratio < 1.0 {
            test_ratio
        } else {
            0.2
        };

        let mut indices: Vec<usize> = (0..self.len()).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let split_idx = ((1.0 - ratio) * self.len() as f64) as usize;
        let (train_idx, test_idx) = indices.split_at(split_idx);

        let subset = |idx: &[usize]| {
            let mut set = TrainingSet::new(self.feature_names.clone());
            for &i in idx {
                set.push(self.features[i].clone(), self.labels[i]);
            }
            set
        };

        (subset(train_idx), subset(test_idx))
    }
}
