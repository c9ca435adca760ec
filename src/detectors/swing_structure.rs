/**
* filename : swing_structure
* author : HAMA
* date: 2025. 6. 2.
* description: 3봉 연속 고점/저점 갱신 (반전 해석)
**/

use crate::models::candle::CandleSeries;
use crate::signals::signal_types::{Signal, SignalSource};
use super::Detector;

/// 연속 고점 상승은 천장, 연속 저점 하락은 바닥으로 본다.
#[derive(Debug, Clone, Default)]
pub struct SwingStructureDetector;

impl SwingStructureDetector {
  pub fn new() -> Self {
    SwingStructureDetector
  }
}

impl Detector for SwingStructureDetector {
  fn name(&self) -> &str {
    "SwingStructure"
  }

  fn source(&self) -> SignalSource {
    SignalSource::SwingStructure
  }

  fn evaluate(&self, series: &CandleSeries) -> Vec<Signal> {
    let (latest, prev, prev2) = match (series.from_end(1), series.from_end(2), series.from_end(3)) {
      (Some(a), Some(b), Some(c)) => (a, b, c),
      _ => return Vec::new(),
    };

    let higher_highs = latest.high > prev.high && prev.high > prev2.high;
    let lower_lows = latest.low < prev.low && prev.low < prev2.low;

    // 고점과 저점이 함께 확장되면 방향 없음
    match (higher_highs, lower_lows) {
      (true, false) => vec![Signal::sell(SignalSource::SwingStructure)],
      (false, true) => vec![Signal::buy(SignalSource::SwingStructure)],
      _ => Vec::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::detectors::test_support::{flat, series};

  #[test]
  fn test_higher_highs_sell() {
    let s = series(&[
      (10.0, 10.5, 9.5, 10.2),
      (10.2, 10.8, 9.9, 10.6),
      (10.6, 11.2, 10.1, 11.0),
    ]);
    assert_eq!(SwingStructureDetector::new().evaluate(&s), vec![Signal::sell(SignalSource::SwingStructure)]);
  }

  #[test]
  fn test_lower_lows_buy() {
    let s = series(&[
      (10.0, 10.5, 9.5, 9.8),
      (9.8, 10.0, 9.2, 9.4),
      (9.4, 9.6, 8.9, 9.0),
    ]);
    assert_eq!(SwingStructureDetector::new().evaluate(&s), vec![Signal::buy(SignalSource::SwingStructure)]);
  }

  #[test]
  fn test_expanding_range_is_ignored() {
    let mut ohlc = vec![(100.0, 100.0, 100.0, 100.0); 17];
    ohlc.push((100.0, 101.0, 99.0, 100.0));
    ohlc.push((100.0, 102.0, 98.0, 100.0));
    assert!(SwingStructureDetector::new().evaluate(&series(&ohlc)).is_empty());
  }

  #[test]
  fn test_equal_highs_are_not_strict() {
    let s = series(&[
      (10.0, 10.5, 9.5, 10.2),
      (10.2, 10.5, 9.9, 10.4),
      (10.4, 11.0, 10.1, 10.9),
    ]);
    assert!(SwingStructureDetector::new().evaluate(&s).is_empty());
    assert!(SwingStructureDetector::new().evaluate(&flat(17, 3.0)).is_empty());
  }
}
