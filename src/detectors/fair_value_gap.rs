/**
* filename : fair_value_gap
* author : HAMA
* date: 2025. 6. 2.
* description: 3봉 가격 불균형(FVG) 탐지
**/

use serde::Serialize;

use crate::models::candle::CandleSeries;
use crate::signals::signal_types::{Signal, SignalSource};
use super::Detector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GapKind {
  Bullish,
  Bearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FairValueGap {
  pub kind: GapKind,
  /// 갭을 완성한 봉의 인덱스
  pub index: usize,
  pub lower: f64,
  pub upper: f64,
}

/// FVG 는 방향 투표 없이 신뢰도에만 기여한다.
#[derive(Debug, Clone, Default)]
pub struct FairValueGapDetector;

impl FairValueGapDetector {
  pub fn new() -> Self {
    FairValueGapDetector
  }

  /// 오래된 봉부터 스캔하여 가장 최근의 갭 반환
  pub fn latest_gap(&self, series: &CandleSeries) -> Option<FairValueGap> {
    let candles = series.candles();
    let mut found = None;

    for i in 3..candles.len() {
      let before = &candles[i - 2];
      let current = &candles[i];

      if before.high < current.low {
        found = Some(FairValueGap {
          kind: GapKind::Bullish,
          index: i,
          lower: before.high,
          upper: current.low,
        });
      } else if before.low > current.high {
        found = Some(FairValueGap {
          kind: GapKind::Bearish,
          index: i,
          lower: current.high,
          upper: before.low,
        });
      }
    }

    found
  }
}

impl Detector for FairValueGapDetector {
  fn name(&self) -> &str {
    "FVG"
  }

  fn source(&self) -> SignalSource {
    SignalSource::FairValueGap
  }

  fn evaluate(&self, series: &CandleSeries) -> Vec<Signal> {
    match self.latest_gap(series) {
      Some(_) => vec![Signal::neutral(SignalSource::FairValueGap)],
      None => Vec::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::detectors::test_support::{flat, series};

  #[test]
  fn test_bullish_gap() {
    let s = series(&[
      (10.0, 10.5, 9.5, 10.0),
      (10.0, 10.5, 9.5, 10.0),
      (10.0, 11.0, 9.8, 10.8),
      (10.8, 12.0, 10.7, 11.8),
      (11.8, 12.2, 11.2, 12.0),
    ]);

    let gap = FairValueGapDetector::new().latest_gap(&s).unwrap();
    assert_eq!(gap.kind, GapKind::Bullish);
    assert_eq!(gap.index, 4);
    assert_eq!((gap.lower, gap.upper), (11.0, 11.2));

    let signals = FairValueGapDetector::new().evaluate(&s);
    assert_eq!(signals, vec![Signal::neutral(SignalSource::FairValueGap)]);
  }

  #[test]
  fn test_latest_gap_wins() {
    // 인덱스 3 하락 갭, 인덱스 5 상승 갭
    let s = series(&[
      (20.0, 20.5, 19.5, 20.0),
      (20.0, 20.5, 19.5, 20.0),
      (20.0, 20.5, 19.5, 20.0),
      (19.0, 19.2, 18.5, 18.8),
      (18.8, 19.6, 18.6, 19.5),
      (19.5, 20.5, 19.3, 20.2),
    ]);

    let gap = FairValueGapDetector::new().latest_gap(&s).unwrap();
    assert_eq!(gap.kind, GapKind::Bullish);
    assert_eq!(gap.index, 5);
  }

  #[test]
  fn test_bearish_gap() {
    let s = series(&[
      (20.0, 20.5, 19.5, 20.0),
      (20.0, 20.5, 19.5, 20.0),
      (20.0, 20.5, 19.5, 20.0),
      (19.0, 19.2, 18.5, 18.8),
    ]);

    let gap = FairValueGapDetector::new().latest_gap(&s).unwrap();
    assert_eq!(gap.kind, GapKind::Bearish);
    assert_eq!((gap.lower, gap.upper), (19.2, 19.5));
  }

  #[test]
  fn test_gap_at_index_two_is_not_scanned() {
    let s = series(&[
      (10.0, 10.5, 9.5, 10.0),
      (10.5, 11.0, 10.2, 10.8),
      (11.0, 12.0, 10.8, 11.8),
    ]);
    assert!(FairValueGapDetector::new().latest_gap(&s).is_none());
  }

  #[test]
  fn test_overlapping_ranges_emit_nothing() {
    assert!(FairValueGapDetector::new().evaluate(&flat(20, 5.0)).is_empty());
  }
}
