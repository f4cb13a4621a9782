//! 합성 잔고 시계열 생성기.
//!
//! 고정 캘린더 규칙에 확률적 지출을 더해 일별 잔고 시계열을
//! 생성합니다. 규칙은 매일 아래 순서로 누적 적용됩니다:
//!
//! 1. 매월 1일: 월세 차감
//! 2. 매월 15일/30일: 급여 가산
//! 3. 토요일: 장보기 지출 차감 (균등 난수)
//! 4. 매일: 일상 지출 차감 (균등 난수)
//!
//! 잔고에 하한은 없으며 음수가 될 수 있습니다. 모든 난수는
//! 명시적 시드로 추출되어 동일 시드면 동일 시계열이 나옵니다.

use chrono::{Datelike, NaiveDate};
use forecast_core::{DailyRecord, ForecastError, ForecastResult, SynthConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use tracing::debug;

/// 캘린더 규칙 기반 잔고 시계열 생성기.
#[derive(Debug, Clone)]
pub struct LedgerSynthesizer {
    config: SynthConfig,
}

impl LedgerSynthesizer {
    /// 새 생성기를 만듭니다.
    pub fn new(config: SynthConfig) -> Self {
        Self { config }
    }

    /// 기본 설정으로 생성기를 만듭니다.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SynthConfig {
            seed,
            ..Default::default()
        })
    }

    /// `from`부터 `to`까지 (양끝 포함) 하루에 한 레코드씩 생성합니다.
    pub fn generate(&self, from: NaiveDate, to: NaiveDate) -> ForecastResult<Vec<DailyRecord>> {
        if from > to {
            return Err(ForecastError::InvalidInput(format!(
                "시작일({})이 종료일({})보다 늦습니다",
                from, to
            )));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let mut balance = self.config.start_balance;
        let mut records = Vec::new();
        let mut date = from;

        loop {
            balance += self.daily_delta(date, &mut rng);
            records.push(DailyRecord::new(date, balance));

            if date == to {
                break;
            }
            date = date
                .succ_opt()
                .ok_or_else(|| ForecastError::Data(format!("달력 범위 초과: {}", date)))?;
        }

        debug!(
            from = %from,
            to = %to,
            days = records.len(),
            seed = self.config.seed,
            "Synthetic ledger generated"
        );

        Ok(records)
    }

    /// 하루치 잔고 변화량을 계산합니다.
    fn daily_delta(&self, date: NaiveDate, rng: &mut ChaCha8Rng) -> Decimal {
        let mut delta = Decimal::ZERO;

        // 규칙 적용 순서는 고정: 월세 → 급여 → 장보기 → 일상 지출
        if date.day() == 1 {
            delta -= self.config.rent;
        }
        if date.day() == 15 || date.day() == 30 {
            delta += self.config.salary;
        }
        if date.weekday().num_days_from_monday() == 5 {
            let grocery = rng.gen_range(self.config.grocery_min..self.config.grocery_max);
            delta -= Decimal::from(grocery);
        }
        let daily = rng.gen_range(self.config.daily_min..self.config.daily_max);
        delta -= Decimal::from(daily);

        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn generate_march() -> Vec<DailyRecord> {
        // 2024-03-01은 금요일: 1일/15일 모두 평일
        LedgerSynthesizer::with_seed(42)
            .generate(date(2024, 2, 28), date(2024, 3, 31))
            .unwrap()
    }

    fn delta_on(records: &[DailyRecord], target: NaiveDate) -> Decimal {
        let idx = records.iter().position(|r| r.date == target).unwrap();
        records[idx].balance - records[idx - 1].balance
    }

    #[test]
    fn test_one_record_per_day_in_order() {
        let records = generate_march();
        assert_eq!(records.len(), 33);
        for pair in records.windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    #[test]
    fn test_rent_applied_on_first() {
        let records = generate_march();
        let delta = delta_on(&records, date(2024, 3, 1));
        // 월세 1500 + 일상 지출 [20, 80)
        assert!(delta <= dec!(-1520));
        assert!(delta >= dec!(-1579));
    }

    #[test]
    fn test_salary_applied_on_fifteenth() {
        let records = generate_march();
        let delta = delta_on(&records, date(2024, 3, 15));
        // 급여 2500 − 일상 지출 [20, 80)
        assert!(delta >= dec!(2421));
        assert!(delta <= dec!(2480));
    }

    #[test]
    fn test_salary_applied_on_thirtieth() {
        let records = generate_march();
        // 2024-03-30은 토요일: 급여 − 장보기 [100, 200) − 일상 지출 [20, 80)
        let delta = delta_on(&records, date(2024, 3, 30));
        assert!(delta >= dec!(2221));
        assert!(delta <= dec!(2380));
    }

    #[test]
    fn test_plain_weekday_spend_range() {
        let records = generate_march();
        // 2024-03-05 화요일: 일상 지출만
        let delta = delta_on(&records, date(2024, 3, 5));
        assert!(delta <= dec!(-20));
        assert!(delta >= dec!(-79));
    }

    #[test]
    fn test_saturday_grocery_spend() {
        let records = generate_march();
        // 2024-03-09 토요일: 장보기 + 일상 지출
        let delta = delta_on(&records, date(2024, 3, 9));
        assert!(delta <= dec!(-120));
        assert!(delta >= dec!(-279));
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = LedgerSynthesizer::with_seed(7)
            .generate(date(2024, 1, 1), date(2024, 6, 30))
            .unwrap();
        let b = LedgerSynthesizer::with_seed(7)
            .generate(date(2024, 1, 1), date(2024, 6, 30))
            .unwrap();
        let c = LedgerSynthesizer::with_seed(8)
            .generate(date(2024, 1, 1), date(2024, 6, 30))
            .unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = LedgerSynthesizer::with_seed(1).generate(date(2024, 2, 1), date(2024, 1, 1));
        assert!(matches!(result, Err(ForecastError::InvalidInput(_))));
    }

    #[test]
    fn test_balance_may_go_negative() {
        let synth = LedgerSynthesizer::new(SynthConfig {
            start_balance: dec!(100),
            seed: 3,
            ..Default::default()
        });
        let records = synth.generate(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        assert!(records.iter().any(|r| r.balance < Decimal::ZERO));
    }
}
