//! # Forecast Model
//!
//! 잔고 예측 모델 파이프라인:
//! - 표준화 스케일러 ([`StandardScaler`])
//! - 결정 트리 기반 랜덤 포레스트 회귀 ([`RandomForestRegressor`])
//! - 학습/홀드아웃 평가 트레이너 ([`trainer`])
//! - 아티팩트 저장/로드 ([`artifact`])

pub mod artifact;
pub mod forest;
pub mod scaler;
pub mod trainer;
pub mod tree;

pub use artifact::{ArtifactBundle, ModelArtifact, ScalerArtifact, FORMAT_VERSION};
pub use forest::{ForestConfig, RandomForestRegressor};
pub use scaler::StandardScaler;
pub use trainer::{train, ModelMetrics, TrainingOutcome};
pub use tree::{DecisionTree, TreeConfig};
