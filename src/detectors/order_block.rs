/**
* filename : order_block
* author : HAMA
* date: 2025. 6. 2.
* description: 최근 3봉 오더블럭 패턴
**/

use crate::models::candle::CandleSeries;
use crate::signals::signal_types::{Signal, SignalSource};
use super::Detector;

#[derive(Debug, Clone, Default)]
pub struct OrderBlockDetector;

impl OrderBlockDetector {
  pub fn new() -> Self {
    OrderBlockDetector
  }
}

impl Detector for OrderBlockDetector {
  fn name(&self) -> &str {
    "OrderBlock"
  }

  fn source(&self) -> SignalSource {
    SignalSource::OrderBlock
  }

  fn evaluate(&self, series: &CandleSeries) -> Vec<Signal> {
    let (latest, prev, prev2) = match (series.from_end(1), series.from_end(2), series.from_end(3)) {
      (Some(a), Some(b), Some(c)) => (a, b, c),
      _ => return Vec::new(),
    };

    let mut signals = Vec::new();

    // 두 봉 전 상승 갭 이후 음봉 마감
    if prev.low > prev2.high && latest.is_bearish() {
      signals.push(Signal::sell(SignalSource::OrderBlock));
    }
    // 두 봉 전 하락 갭 이후 양봉 마감
    if prev.high < prev2.low && latest.is_bullish() {
      signals.push(Signal::buy(SignalSource::OrderBlock));
    }

    signals
  }
}
