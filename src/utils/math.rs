//! 수학 관련 유틸리티
//!
//! 슬라이딩 윈도우 통계 함수 제공

/// 값을 범위 내로 제한
pub fn clamp<T: PartialOrd>(value: T, min_value: T, max_value: T) -> T {
  if value < min_value {
    min_value
  } else if value > max_value {
    max_value
  } else {
    value
  }
}

/// 최소값 (빈 슬라이스는 None)
pub fn min_of<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
  values.into_iter().fold(None, |acc, v| match acc {
    Some(m) if m <= v => Some(m),
    _ => Some(v),
  })
}

/// 최대값 (빈 슬라이스는 None)
pub fn max_of<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
  values.into_iter().fold(None, |acc, v| match acc {
    Some(m) if m >= v => Some(m),
    _ => Some(v),
  })
}

/// 단순 이동평균. 결과 길이 = values.len() - period + 1
pub fn rolling_average(values: &[f64], period: usize) -> Vec<f64> {
  if period == 0 || values.len() < period {
    return Vec::new();
  }

  values
    .windows(period)
    .map(|w| w.iter().sum::<f64>() / period as f64)
    .collect()
}
