//! 합성 잔고 시계열 생성 명령어.

use anyhow::Context;
use tracing::info;

use forecast_core::config::AppConfig;
use forecast_data::{save_series, LedgerSynthesizer};

use super::parse_date;

/// `forecast synth` 실행: 설정된 규칙으로 시계열을 생성해 CSV로 저장합니다.
pub fn run_synth(
    config: &AppConfig,
    from: &str,
    to: &str,
    output: &str,
    start_balance: Option<&str>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let from = parse_date(from)?;
    let to = parse_date(to)?;

    let mut synth_config = config.synth.clone();
    if let Some(balance) = start_balance {
        synth_config.start_balance = balance
            .parse()
            .map_err(|e| anyhow::anyhow!("잘못된 시작 잔고 '{balance}': {e}"))?;
    }
    if let Some(seed) = seed {
        synth_config.seed = seed;
    }

    let synthesizer = LedgerSynthesizer::new(synth_config);
    let records = synthesizer
        .generate(from, to)
        .context("합성 시계열 생성 실패")?;

    save_series(output, &records).context("CSV 저장 실패")?;
    info!(n_records = records.len(), output, "Synthetic series saved");

    println!("✅ 합성 가계부 시계열 생성 완료");
    println!("  기간: {from} ~ {to} ({}일)", records.len());
    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        println!("  시작 잔고: {}", first.balance);
        println!("  종료 잔고: {}", last.balance);
    }
    println!("  출력: {output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_data::load_series;
    use rust_decimal::Decimal;

    #[test]
    fn test_run_synth_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ledger.csv");
        let output = output.to_string_lossy().into_owned();

        let config = AppConfig::default();
        run_synth(&config, "2024-01-01", "2024-01-31", &output, None, Some(42)).unwrap();

        let records = load_series(&output).unwrap();
        assert_eq!(records.len(), 31);
    }

    #[test]
    fn test_run_synth_start_balance_override() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ledger.csv");
        let output = output.to_string_lossy().into_owned();

        let config = AppConfig::default();
        run_synth(
            &config,
            "2024-01-02",
            "2024-01-02",
            &output,
            Some("10000"),
            Some(1),
        )
        .unwrap();

        // 1월 2일 하루: 일상 지출 [20, 80)만 차감된다
        let records = load_series(&output).unwrap();
        let balance = records[0].balance;
        assert!(balance > Decimal::new(9920, 0));
        assert!(balance <= Decimal::new(9980, 0));
    }

    #[test]
    fn test_run_synth_bad_date_rejected() {
        let config = AppConfig::default();
        let result = run_synth(&config, "01-01-2024", "2024-01-31", "out.csv", None, None);
        assert!(result.is_err());
    }
}
