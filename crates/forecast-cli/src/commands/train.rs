//! 모델 학습 명령어.

use anyhow::Context;
use tracing::info;

use forecast_core::config::AppConfig;
use forecast_data::{build_training_set, load_series, LedgerSynthesizer};
use forecast_model::{train, ArtifactBundle};

use super::parse_date;

/// 커맨드라인에서 들어온 학습 설정 대체값.
#[derive(Debug, Default)]
pub struct TrainOverrides {
    /// 합성 데이터 시드 (--input 생략 시에만 의미 있음)
    pub seed: Option<u64>,
    pub output_dir: Option<String>,
    pub trees: Option<usize>,
    /// 쉼표 구분 horizon 목록 (예: "7,30,90")
    pub horizons: Option<String>,
    pub min_r2: Option<f64>,
}

/// `forecast train` 실행: CSV 또는 합성 데이터로 학습하고 아티팩트를 저장합니다.
pub fn run_train(
    config: &AppConfig,
    input: Option<&str>,
    from: &str,
    to: &str,
    overrides: TrainOverrides,
) -> anyhow::Result<()> {
    let mut training = config.training.clone();
    if let Some(trees) = overrides.trees {
        training.n_trees = trees;
    }
    if let Some(min_r2) = overrides.min_r2 {
        training.min_holdout_r2 = Some(min_r2);
    }
    if let Some(raw) = &overrides.horizons {
        training.horizons = raw
            .split(',')
            .map(|s| {
                s.trim()
                    .parse::<usize>()
                    .map_err(|e| anyhow::anyhow!("잘못된 horizon '{s}': {e}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
    }

    let mut artifacts = config.artifacts.clone();
    if let Some(dir) = overrides.output_dir {
        artifacts.dir = dir;
    }

    let records = match input {
        Some(path) => {
            let records = load_series(path).context("입력 CSV 로드 실패")?;
            info!(path, n_records = records.len(), "Loaded series from CSV");
            records
        }
        None => {
            let from = parse_date(from)?;
            let to = parse_date(to)?;
            let mut synth_config = config.synth.clone();
            if let Some(seed) = overrides.seed {
                synth_config.seed = seed;
            }
            let synthesizer = LedgerSynthesizer::new(synth_config);
            let records = synthesizer
                .generate(from, to)
                .context("합성 시계열 생성 실패")?;
            info!(n_records = records.len(), "Synthetic series generated");
            records
        }
    };

    let set =
        build_training_set(&records, &training.horizons).context("학습 세트 구성 실패")?;
    println!(
        "학습 세트: {}개 샘플 (horizons: {:?})",
        set.len(),
        training.horizons
    );

    let outcome = train(&set, &training).context("모델 학습 실패")?;

    println!("✅ 모델 학습 완료");
    println!("  홀드아웃 샘플: {}", outcome.metrics.n_holdout);
    println!("  RMSE: {:.2}", outcome.metrics.rmse);
    println!("  MAE:  {:.2}", outcome.metrics.mae);
    println!("  R²:   {:.4}", outcome.metrics.r2);

    let bundle = ArtifactBundle::from_outcome(outcome);
    bundle.save(&artifacts).context("아티팩트 저장 실패")?;

    println!("  아티팩트: {}", artifacts.dir);
    println!("    - {}", artifacts.scaler_path().display());
    println!("    - {}", artifacts.model_path().display());
    Ok(())
}
