//! 시계열 CSV 저장/로드.
//!
//! 외부 표 형식 데이터 소스와의 접점입니다. 형식은
//! `date,balance` 헤더를 가진 단순 CSV이며, 합성기로 만든 시계열을
//! 보관했다가 트레이너가 다시 읽는 용도로 사용됩니다.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use forecast_core::{DailyRecord, ForecastError, ForecastResult};
use rust_decimal::Decimal;
use tracing::info;

const HEADER: &str = "date,balance";

/// 시계열을 CSV 파일로 저장합니다.
pub fn save_series<P: AsRef<Path>>(path: P, records: &[DailyRecord]) -> ForecastResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut out = String::with_capacity(records.len() * 24);
    out.push_str(HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&format!("{},{}\n", record.date, record.balance));
    }

    fs::write(path, out)?;
    info!(path = %path.display(), rows = records.len(), "Series saved");
    Ok(())
}

/// CSV 파일에서 시계열을 로드합니다.
///
/// 날짜 순서가 어긋나 있으면 데이터 에러로 거부합니다.
pub fn load_series<P: AsRef<Path>>(path: P) -> ForecastResult<Vec<DailyRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        ForecastError::Data(format!("시계열 파일을 읽을 수 없습니다 {}: {}", path.display(), e))
    })?;

    let mut records: Vec<DailyRecord> = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        if line_no == 0 {
            if line.trim() != HEADER {
                return Err(ForecastError::Data(format!(
                    "알 수 없는 CSV 헤더: {:?}",
                    line
                )));
            }
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let parse_err = |what: &str| {
            ForecastError::Data(format!("{} 파싱 실패 ({}행): {:?}", what, line_no + 1, line))
        };

        let (date_str, balance_str) = line
            .split_once(',')
            .ok_or_else(|| parse_err("CSV 행"))?;
        let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
            .map_err(|_| parse_err("날짜"))?;
        let balance =
            Decimal::from_str(balance_str.trim()).map_err(|_| parse_err("잔고"))?;

        if let Some(last) = records.last() {
            if date <= last.date {
                return Err(ForecastError::Data(format!(
                    "날짜 순서가 어긋났습니다: {} 다음에 {}",
                    last.date, date
                )));
            }
        }

        records.push(DailyRecord::new(date, balance));
    }

    info!(path = %path.display(), rows = records.len(), "Series loaded");
    Ok(records)
}
