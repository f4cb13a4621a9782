//! 랜덤 포레스트 회귀 모델.
//!
//! 시드를 고정한 부트스트랩 샘플링으로 트리를 학습하고,
//! 트리 예측의 평균을 최종 예측값으로 사용합니다.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use forecast_core::{ForecastError, ForecastResult};

use crate::tree::{DecisionTree, TreeConfig};

/// 랜덤 포레스트 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestConfig {
    /// 트리 개수
    pub n_trees: usize,
    /// 트리 최대 깊이
    pub max_depth: usize,
    /// 분할 최소 샘플 수
    pub min_samples_split: usize,
    /// 리프 최소 샘플 수
    pub min_samples_leaf: usize,
    /// 분할마다 고려할 피처 수 (None = 전체 피처의 1/3, 최소 1)
    pub max_features: Option<usize>,
    /// 재현성을 위한 시드
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: 10,
            min_samples_split: 5,
            min_samples_leaf: 2,
            max_features: None,
            seed: 42,
        }
    }
}

/// 랜덤 포레스트 회귀 모델.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForestRegressor {
    config: ForestConfig,
    trees: Vec<DecisionTree>,
    n_features: usize,
}

impl RandomForestRegressor {
    /// 새 모델을 생성합니다.
    pub fn new(config: ForestConfig) -> Self {
        Self {
            config,
            trees: Vec::new(),
            n_features: 0,
        }
    }

    /// 포레스트를 학습합니다.
    ///
    /// 트리 i는 `seed.wrapping_add(i)`로 시드된 부트스트랩 샘플을
    /// 사용하므로 동일 설정 + 동일 데이터면 결과가 항상 같습니다.
    pub fn fit(&mut self, features: &[Vec<f64>], labels: &[f64]) -> ForecastResult<()> {
        if features.is_empty() {
            return Err(ForecastError::Data("학습 데이터가 비어 있습니다".into()));
        }
        if features.len() != labels.len() {
            return Err(ForecastError::Data(format!(
                "피처/레이블 개수 불일치: {} vs {}",
                features.len(),
                labels.len()
            )));
        }

        self.n_features = features[0].len();
        let max_features = self
            .config
            .max_features
            .unwrap_or_else(|| (self.n_features / 3).max(1));

        self.trees = Vec::with_capacity(self.config.n_trees);
        for i in 0..self.config.n_trees {
            let tree_seed = self.config.seed.wrapping_add(i as u64);
            let (boot_features, boot_labels) =
                bootstrap_sample(features, labels, tree_seed);

            let mut tree = DecisionTree::new(TreeConfig {
                max_depth: self.config.max_depth,
                min_samples_split: self.config.min_samples_split,
                min_samples_leaf: self.config.min_samples_leaf,
                max_features: Some(max_features),
                seed: tree_seed,
            });
            tree.fit(&boot_features, &boot_labels);
            self.trees.push(tree);
        }

        debug!(
            n_trees = self.trees.len(),
            n_samples = features.len(),
            n_features = self.n_features,
            "Random forest trained"
        );
        Ok(())
    }

    /// 샘플 하나를 예측합니다 (트리 평균).
    pub fn predict_one(&self, features: &[f64]) -> ForecastResult<f64> {
        if self.trees.is_empty() {
            return Err(ForecastError::Model(
                "학습되지 않은 모델로 예측할 수 없습니다".into(),
            ));
        }
        if features.len() != self.n_features {
            return Err(ForecastError::InvalidInput(format!(
                "피처 개수 불일치: expected {}, got {}",
                self.n_features,
                features.len()
            )));
        }

        let sum: f64 = self.trees.iter().map(|t| t.predict_one(features)).sum();
        Ok(sum / self.trees.len() as f64)
    }

    /// 여러 샘플을 예측합니다.
    pub fn predict(&self, features: &[Vec<f64>]) -> ForecastResult<Vec<f64>> {
        features.iter().map(|row| self.predict_one(row)).collect()
    }

    /// 학습 시점의 피처 개수.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// 학습된 트리 개수.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

/// 복원 추출로 부트스트랩 샘플을 만듭니다.
fn bootstrap_sample(
    features: &[Vec<f64>],
    labels: &[f64],
    seed: u64,
) -> (Vec<Vec<f64>>, Vec<f64>) {
    let n = features.len();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut boot_features = Vec::with_capacity(n);
    let mut boot_labels = Vec::with_capacity(n);
    for _ in 0..n {
        let idx = rng.gen_range(0..n);
        boot_features.push(features[idx].clone());
        boot_labels.push(labels[idx]);
    }
    (boot_features, boot_labels)
}
