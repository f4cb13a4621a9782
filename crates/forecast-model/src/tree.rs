//! 회귀 결정 트리.
//!
//! 랜덤 포레스트의 구성 요소입니다. 분산(MSE) 감소를 기준으로
//! 이진 분할을 반복하며, 시드 기반 피처 서브샘플링으로 트리 간
//! 다양성을 만듭니다.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// 결정 트리 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// 최대 깊이
    pub max_depth: usize,
    /// 분할에 필요한 최소 샘플 수
    pub min_samples_split: usize,
    /// 리프의 최소 샘플 수
    pub min_samples_leaf: usize,
    /// 분할마다 고려할 최대 피처 수 (None = 전체)
    pub max_features: Option<usize>,
    /// 재현성을 위한 시드
    pub seed: u64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            min_samples_split: 5,
            min_samples_leaf: 2,
            max_features: None,
            seed: 42,
        }
    }
}

/// 트리 노드.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// 리프: 도달한 샘플 레이블의 평균
    Leaf { value: f64, n_samples: usize },
    /// 내부 분할: `feature <= threshold`면 왼쪽
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// 회귀 결정 트리.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    config: TreeConfig,
    root: Option<Node>,
    n_features: usize,
}

impl DecisionTree {
    /// 새 트리를 생성합니다.
    pub fn new(config: TreeConfig) -> Self {
        Self {
            config,
            root: None,
            n_features: 0,
        }
    }

    /// 트리를 학습합니다.
    pub fn fit(&mut self, features: &[Vec<f64>], labels: &[f64]) {
        debug_assert_eq!(features.len(), labels.len());
        self.n_features = features.first().map(|r| r.len()).unwrap_or(0);

        let indices: Vec<usize> = (0..features.len()).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.root = Some(self.build(features, labels, &indices, 0, &mut rng));
    }

    fn build(
        &self,
        features: &[Vec<f64>],
        labels: &[f64],
        indices: &[usize],
        depth: usize,
        rng: &mut ChaCha8Rng,
    ) -> Node {
        let subset: Vec<f64> = indices.iter().map(|&i| labels[i]).collect();
        let impurity = variance(&subset);

        if depth >= self.config.max_depth
            || indices.len() < self.config.min_samples_split
            || impurity < 1e-10
        {
            return Node::Leaf {
                value: mean(&subset),
                n_samples: indices.len(),
            };
        }

        match self.best_split(features, labels, indices, impurity, rng) {
            Some((feature, threshold, left_idx, right_idx)) => {
                let left = self.build(features, labels, &left_idx, depth + 1, rng);
                let right = self.build(features, labels, &right_idx, depth + 1, rng);
                Node::Split {
                    feature,
                    threshold,
                    left: Box::new(left),
                    right: Box::new(right),
                }
            }
            None => Node::Leaf {
                value: mean(&subset),
                n_samples: indices.len(),
            },
        }
    }

    /// 최적 분할점 탐색: 분할 피처를 시드로 서브샘플링하고,
    /// 인접 고유값의 중점을 임계값 후보로 사용합니다.
    fn best_split(
        &self,
        features: &[Vec<f64>],
        labels: &[f64],
        indices: &[usize],
        parent_impurity: f64,
        rng: &mut ChaCha8Rng,
    ) -> Option<(usize, f64, Vec<usize>, Vec<usize>)> {
        let n_features = self.n_features;
        let max_features = self.config.max_features.unwrap_or(n_features).min(n_features);

        let mut feature_indices: Vec<usize> = (0..n_features).collect();
        feature_indices.shuffle(rng);
        feature_indices.truncate(max_features);

        let mut best_gain = 0.0;
        let mut best: Option<(usize, f64, Vec<usize>, Vec<usize>)> = None;

        for &feature in &feature_indices {
            let mut values: Vec<f64> = indices.iter().map(|&i| features[i][feature]).collect();
            values.sort_by(|a, b| a.total_cmp(b));
            values.dedup();

            for window in values.windows(2) {
                let threshold = (window[0] + window[1]) / 2.0;

                let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
                    .iter()
                    .partition(|&&i| features[i][feature] <= threshold);

                if left_idx.len() < self.config.min_samples_leaf
                    || right_idx.len() < self.config.min_samples_leaf
                {
                    continue;
                }

                let left_labels: Vec<f64> = left_idx.iter().map(|&i| labels[i]).collect();
                let right_labels: Vec<f64> = right_idx.iter().map(|&i| labels[i]).collect();

                let n_left = left_idx.len() as f64;
                let n_right = right_idx.len() as f64;
                let weighted = (n_left * variance(&left_labels)
                    + n_right * variance(&right_labels))
                    / (n_left + n_right);
                let gain = parent_impurity - weighted;

                if gain > best_gain {
                    best_gain = gain;
                    best = Some((feature, threshold, left_idx, right_idx));
                }
            }
        }

        best
    }

    /// 샘플 하나를 예측합니다.
    pub fn predict_one(&self, features: &[f64]) -> f64 {
        let mut node = match &self.root {
            Some(node) => node,
            None => return 0.0,
        };

        loop {
            match node {
                Node::Leaf { value, .. } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    /// 학습 시점의 피처 개수.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// 트리 깊이.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map(|n| n.depth()).unwrap_or(0)
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_data() -> (Vec<Vec<f64>>, Vec<f64>) {
        let features: Vec<Vec<f64>> = (0..100).map(|i| vec![i as f64 / 10.0]).collect();
        let labels: Vec<f64> = features
            .iter()
            .map(|f| if f[0] > 5.0 { 100.0 } else { -100.0 })
            .collect();
        (features, labels)
    }

    #[test]
    fn test_learns_step_function() {
        let (features, labels) = step_data();
        let mut tree = DecisionTree::new(TreeConfig::default());
        tree.fit(&features, &labels);

        assert!((tree.predict_one(&[2.0]) - (-100.0)).abs() < 1e-9);
        assert!((tree.predict_one(&[8.0]) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_respects_max_depth() {
        let (features, labels) = step_data();
        let mut tree = DecisionTree::new(TreeConfig {
            max_depth: 2,
            ..Default::default()
        });
        tree.fit(&features, &labels);
        assert!(tree.depth() <= 3);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let (features, labels) = step_data();
        let mut a = DecisionTree::new(TreeConfig::default());
        let mut b = DecisionTree::new(TreeConfig::default());
        a.fit(&features, &labels);
        b.fit(&features, &labels);

        for i in 0..100 {
            let x = [i as f64 / 10.0];
            assert_eq!(a.predict_one(&x), b.predict_one(&x));
        }
    }

    #[test]
    fn test_unfitted_predicts_zero() {
        let tree = DecisionTree::new(TreeConfig::default());
        assert_eq!(tree.predict_one(&[1.0]), 0.0);
    }
}
