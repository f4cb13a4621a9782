//! 일별 잔고 레코드.

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 특정 날짜의 계좌 잔고.
///
/// 합성기가 날짜순으로 생성하며, 생성 후에는 불변입니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// 날짜
    pub date: NaiveDate,
    /// 해당 날짜의 마감 잔고 (음수 가능)
    pub balance: Decimal,
}

impl DailyRecord {
    /// 새 레코드를 생성합니다.
    pub fn new(date: NaiveDate, balance: Decimal) -> Self {
        Self { date, balance }
    }

    /// 일자 (1–31).
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    /// 요일 (0=월요일 … 5=토요일, 6=일요일).
    pub fn day_of_week(&self) -> u32 {
        self.date.weekday().num_days_from_monday()
    }

    /// 토요일 여부.
    pub fn is_saturday(&self) -> bool {
        self.day_of_week() == 5
    }

    /// 잔고를 피처용 f64로 변환합니다.
    ///
    /// Decimal은 원장 정확도를 위해 유지하고, 모델 경계에서만
    /// 부동소수점으로 내립니다.
    pub fn balance_f64(&self) -> f64 {
        self.balance.to_f64().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_accessors() {
        // 2024-03-02는 토요일
        let record = DailyRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            Decimal::new(1000, 0),
        );
        assert_eq!(record.day_of_month(), 2);
        assert_eq!(record.day_of_week(), 5);
        assert!(record.is_saturday());

        // 2024-03-04는 월요일
        let monday = DailyRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            Decimal::new(1000, 0),
        );
        assert_eq!(monday.day_of_week(), 0);
        assert!(!monday.is_saturday());
    }

    #[test]
    fn test_balance_f64() {
        let record = DailyRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Decimal::new(-12345, 2),
        );
        assert!((record.balance_f64() - (-123.45)).abs() < 1e-9);
    }
}
