/**
* filename : support_resistance
* author : HAMA
* date: 2025. 6. 2.
* description: 롤링 지지/저항 근접 탐지
**/

use crate::models::candle::CandleSeries;
use crate::signals::signal_types::{Signal, SignalSource};
use crate::utils::math::{max_of, min_of};
use super::Detector;

#[derive(Debug, Clone)]
pub struct SupportResistanceDetector {
  name: String,
  window: usize,
  tolerance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levels {
  pub support: f64,
  pub resistance: f64,
}

impl SupportResistanceDetector {
  pub fn new(window: usize, tolerance: f64) -> Self {
    SupportResistanceDetector {
      name: format!("SR-{}", window),
      window,
      tolerance,
    }
  }

  /// 최근 window 봉(현재 포함)의 최저가/최고가
  pub fn levels(&self, series: &CandleSeries) -> Option<Levels> {
    let window = series.tail(self.window);
    Some(Levels {
      support: min_of(window.iter().map(|c| c.low))?,
      resistance: max_of(window.iter().map(|c| c.high))?,
    })
  }
}

impl Default for SupportResistanceDetector {
  fn default() -> Self {
    SupportResistanceDetector::new(10, 0.01)
  }
}

impl Detector for SupportResistanceDetector {
  fn name(&self) -> &str {
    &self.name
  }

  fn source(&self) -> SignalSource {
    SignalSource::SupportResistance
  }

  fn evaluate(&self, series: &CandleSeries) -> Vec<Signal> {
    let levels = match self.levels(series) {
      Some(levels) => levels,
      None => return Vec::new(),
    };

    // 범위가 없는 구간에는 지지/저항이 없음
    if levels.resistance <= levels.support {
      return Vec::new();
    }

    let price = series.latest().close;
    let mut signals = Vec::new();

    if price <= levels.support * (1.0 + self.tolerance) {
      signals.push(Signal::buy(SignalSource::SupportResistance));
    }
    if price >= levels.resistance * (1.0 - self.tolerance) {
      signals.push(Signal::sell(SignalSource::SupportResistance));
    }

    signals
  }
}
