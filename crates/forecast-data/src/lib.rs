//! # Forecast Data
//!
//! 학습 데이터 준비를 담당합니다:
//! - 캘린더 규칙 기반 합성 잔고 시계열 생성
//! - 일별 시계열 → 피처/레이블 학습 데이터셋 변환
//! - 시계열 CSV 저장/로드

pub mod builder;
pub mod storage;
pub mod synth;

pub use builder::build_training_set;
pub use storage::{load_series, save_series};
pub use synth::LedgerSynthesizer;
