/**
* filename : mod
* author : HAMA
* date: 2025. 6. 2.
* description: 오실레이터/구조 탐지기 공통 인터페이스
**/

pub mod oscillator;
pub mod support_resistance;
pub mod order_block;
pub mod fair_value_gap;
pub mod swing_structure;

pub use oscillator::StochasticDetector;
pub use support_resistance::SupportResistanceDetector;
pub use order_block::OrderBlockDetector;
pub use fair_value_gap::{FairValueGap, FairValueGapDetector, GapKind};
pub use swing_structure::SwingStructureDetector;

use std::fmt::Debug;

use crate::config::EngineConfig;
use crate::models::candle::CandleSeries;
use crate::signals::signal_types::{Signal, SignalSource};

/// 캔들 시리즈에 대한 순수 함수 탐지기
///
/// 조건이 성립하지 않으면 빈 벡터를 반환한다 (0 가중치 신호를 만들지 않음).
pub trait Detector: Debug + Send + Sync {
  fn name(&self) -> &str;

  fn source(&self) -> SignalSource;

  fn evaluate(&self, series: &CandleSeries) -> Vec<Signal>;
}

/// 기본 구조 탐지기 4종. 오실레이터는 엔진이 따로 돌린다.
pub fn default_detectors(config: &EngineConfig) -> Vec<Box<dyn Detector>> {
  vec![
    Box::new(SupportResistanceDetector::new(config.level_window, config.level_tolerance)),
    Box::new(OrderBlockDetector::new()),
    Box::new(FairValueGapDetector::new()),
    Box::new(SwingStructureDetector::new()),
  ]
}

#[cfg(test)]
pub(crate) mod test_support {
  use crate::models::candle::{Candle, CandleSeries};

  /// (open, high, low, close) 목록으로 시리즈 생성
  pub fn series(ohlc: &[(f64, f64, f64, f64)]) -> CandleSeries {
    let candles = ohlc
      .iter()
      .enumerate()
      .map(|(i, &(open, high, low, close))| Candle::new(i as i64 * 60_000, open, high, low, close, None))
      .collect();
    CandleSeries::new(candles).unwrap()
  }

  pub fn flat(len: usize, price: f64) -> CandleSeries {
    series(&vec![(price, price, price, price); len])
  }
}
