/**
* filename : oscillator
* author : HAMA
* date: 2025. 6. 2.
* description: 스토캐스틱 과매수/과매도 탐지
**/

use crate::error::EngineError;
use crate::indicators::{StochasticOscillator, StochasticValue};
use crate::models::candle::CandleSeries;
use crate::signals::signal_types::{Signal, SignalSource};

/// 오실레이터 단계. 엔진이 한 번 계산한 값을 보고서와 투표에 함께 쓴다.
#[derive(Debug, Clone)]
pub struct StochasticDetector {
  oscillator: StochasticOscillator,
  oversold_threshold: f64,
  overbought_threshold: f64,
}

impl StochasticDetector {
  pub fn new(window: usize, smooth_window: usize, oversold: f64, overbought: f64) -> Self {
    StochasticDetector {
      oscillator: StochasticOscillator::new(window, smooth_window),
      oversold_threshold: oversold,
      overbought_threshold: overbought,
    }
  }

  pub fn name(&self) -> &str {
    self.oscillator.name()
  }

  /// 최신 %K/%D. 캔들이 부족하면 InsufficientData
  pub fn read(&self, series: &CandleSeries) -> Result<StochasticValue, EngineError> {
    self.oscillator.latest(series.candles())
  }

  /// %K, %D 가 모두 임계값을 넘을 때만 신호
  pub fn classify(&self, value: StochasticValue) -> Option<Signal> {
    if value.k < self.oversold_threshold && value.d < self.oversold_threshold {
      Some(Signal::buy(SignalSource::Oscillator))
    } else if value.k > self.overbought_threshold && value.d > self.overbought_threshold {
      Some(Signal::sell(SignalSource::Oscillator))
    } else {
      None
    }
  }
}

impl Default for StochasticDetector {
  fn default() -> Self {
    StochasticDetector::new(14, 3, 20.0, 80.0)
  }
}
