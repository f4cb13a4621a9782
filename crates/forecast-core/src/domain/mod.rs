//! 핵심 도메인 모델.
//!
//! - 일별 잔고 레코드 ([`DailyRecord`])
//! - 학습 데이터셋 ([`TrainingSet`])
//! - 피처 벡터 조립 ([`features`])

pub mod dataset;
pub mod features;
pub mod ledger;

pub use dataset::TrainingSet;
pub use features::{assemble, DEFAULT_HORIZONS, FEATURE_NAMES};
pub use ledger::DailyRecord;
