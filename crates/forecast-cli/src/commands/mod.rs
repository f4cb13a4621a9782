//! CLI 명령어 구현 모듈.

pub mod predict;
pub mod synth;
pub mod train;

/// YYYY-MM-DD 형식의 날짜를 파싱합니다.
pub fn parse_date(s: &str) -> anyhow::Result<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("잘못된 날짜 형식 '{s}' (YYYY-MM-DD 필요): {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("2024-03-15").unwrap();
        assert_eq!(date, chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("15/03/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }
}
