//! 합성 가계부 → 학습 세트 → 학습 → 아티팩트 전체 파이프라인 테스트.

use chrono::NaiveDate;

use forecast_core::config::{ArtifactConfig, SynthConfig, TrainingConfig};
use forecast_core::domain::features::assemble;
use forecast_data::{build_training_set, LedgerSynthesizer};
use forecast_model::{train, ArtifactBundle};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_full_pipeline_synth_to_artifact() {
    // 약 1년치 합성 데이터
    let synth = LedgerSynthesizer::new(SynthConfig::default());
    let records = synth
        .generate(date(2024, 1, 1), date(2024, 12, 31))
        .unwrap();
    assert_eq!(records.len(), 366);

    let horizons = [7usize, 30, 90];
    let set = build_training_set(&records, &horizons).unwrap();
    assert_eq!(set.len(), (366 - 90) * horizons.len());

    let cfg = TrainingConfig {
        n_trees: 10,
        ..Default::default()
    };
    let outcome = train(&set, &cfg).unwrap();
    // 잔고 추세가 매끄러우므로 홀드아웃 설명력이 있어야 한다
    assert!(outcome.metrics.r2 > 0.3, "R² = {}", outcome.metrics.r2);

    // 저장 후 로드한 모델이 동일하게 예측한다
    let tmp = tempfile::tempdir().unwrap();
    let artifact_cfg = ArtifactConfig {
        dir: tmp.path().to_string_lossy().into_owned(),
        ..Default::default()
    };
    let bundle = ArtifactBundle::from_outcome(outcome);
    bundle.save(&artifact_cfg).unwrap();
    let restored = ArtifactBundle::load(&artifact_cfg).unwrap();

    let features = assemble(15, 2, 3000.0, 30);
    let scaled = bundle.scaler.transform(&features).unwrap();
    let restored_scaled = restored.scaler.transform(&features).unwrap();
    assert_eq!(scaled, restored_scaled);
    assert_eq!(
        bundle.forest.predict_one(&scaled).unwrap(),
        restored.forest.predict_one(&restored_scaled).unwrap()
    );
}

#[test]
fn test_pipeline_is_reproducible_end_to_end() {
    let run = || {
        let synth = LedgerSynthesizer::new(SynthConfig::default());
        let records = synth
            .generate(date(2024, 1, 1), date(2024, 10, 31))
            .unwrap();
        let set = build_training_set(&records, &[7, 30]).unwrap();
        let cfg = TrainingConfig {
            n_trees: 5,
            ..Default::default()
        };
        train(&set, &cfg).unwrap()
    };

    let a = run();
    let b = run();
    assert_eq!(a.metrics.rmse, b.metrics.rmse);
    assert_eq!(a.scaler, b.scaler);
}
