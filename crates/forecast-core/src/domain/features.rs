//! 피처 벡터 조립.
//!
//! 스케일러와 모델에 전달되는 피처 순서는 학습 시점과 추론 시점에
//! 정확히 일치해야 합니다. 순서가 어긋나도 에러 없이 엉터리 예측이
//! 나오기 때문에, 학습 빌더와 예측 서비스가 모두 이 모듈의
//! [`assemble`]만 사용하도록 강제합니다. 아티팩트 로드 시점에
//! [`FEATURE_NAMES`]와의 일치 여부를 한 번 더 검증합니다.

/// 정규 피처 순서.
pub const FEATURE_NAMES: [&str; 4] = ["day_of_month", "day_of_week", "balance", "horizon"];

/// 기본 예측 horizon 집합 (일 단위).
pub const DEFAULT_HORIZONS: [usize; 3] = [7, 30, 90];

/// 피처 개수.
pub const FEATURE_WIDTH: usize = FEATURE_NAMES.len();

/// 원시 피처 벡터를 정규 순서로 조립합니다.
pub fn assemble(day_of_month: u32, day_of_week: u32, balance: f64, horizon: usize) -> Vec<f64> {
    vec![
        day_of_month as f64,
        day_of_week as f64,
        balance,
        horizon as f64,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_order() {
        let features = assemble(15, 3, 5000.0, 30);
        assert_eq!(features, vec![15.0, 3.0, 5000.0, 30.0]);
        assert_eq!(features.len(), FEATURE_WIDTH);
    }

    #[test]
    fn test_feature_names_width() {
        assert_eq!(FEATURE_NAMES.len(), 4);
        assert_eq!(FEATURE_NAMES[2], "balance");
    }
}
