//! 일회성 예측 명령어.

use anyhow::Context;
use chrono::Datelike;

use forecast_core::config::AppConfig;
use forecast_core::domain::features::assemble;
use forecast_model::ArtifactBundle;

use super::parse_date;

/// `forecast predict` 실행: 저장된 아티팩트를 로드해 예측값을 출력합니다.
pub fn run_predict(
    config: &AppConfig,
    balance: f64,
    horizon: usize,
    date: Option<&str>,
    model_dir: Option<&str>,
) -> anyhow::Result<()> {
    if horizon == 0 || horizon > 365 {
        anyhow::bail!("horizon은 1 이상 365 이하여야 합니다 (입력: {horizon})");
    }

    let reference_date = match date {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };

    let mut artifacts = config.artifacts.clone();
    if let Some(dir) = model_dir {
        artifacts.dir = dir.to_string();
    }

    let bundle = ArtifactBundle::load(&artifacts)
        .context("아티팩트 로드 실패 (먼저 `forecast train`을 실행하세요)")?;

    let features = assemble(
        reference_date.day(),
        reference_date.weekday().num_days_from_monday(),
        balance,
        horizon,
    );
    let scaled = bundle.scaler.transform(&features)?;
    let predicted = bundle.forest.predict_one(&scaled)?;

    println!("📈 잔고 예측");
    println!("  모델: {} ({})", bundle.id, bundle.trained_at.to_rfc3339());
    println!("  기준 날짜: {reference_date}");
    println!("  현재 잔고: {balance:.2}");
    println!("  {horizon}일 뒤 예측 잔고: {predicted:.2}");
    Ok(())
}
