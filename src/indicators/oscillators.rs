/**
* filename : oscillators
* author : HAMA
* date: 2025. 6. 2.
* description: 스토캐스틱 오실레이터 (%K / %D)
**/

use serde::Serialize;

use crate::error::EngineError;
use crate::models::candle::Candle;
use crate::utils::math::{max_of, min_of, rolling_average};

/// 고저 범위가 0 인 구간의 %K
pub const NEUTRAL_K: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StochasticValue {
  pub k: f64,
  pub d: f64,
}

#[derive(Debug, Clone)]
pub struct StochasticOscillator {
  name: String,
  window: usize,
  smooth_window: usize,
}

impl StochasticOscillator {
  pub fn new(window: usize, smooth_window: usize) -> Self {
    StochasticOscillator {
      name: format!("Stoch-{}-{}", window, smooth_window),
      window,
      smooth_window,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// 최신 %D 를 구하는 데 필요한 최소 캔들 수
  pub fn min_periods(&self) -> usize {
    self.window + self.smooth_window - 1
  }

  /// 인덱스 window-1 부터의 %K 시리즈
  pub fn k_series(&self, candles: &[Candle]) -> Vec<f64> {
    if self.window == 0 || candles.len() < self.window {
      return Vec::new();
    }

    candles
      .windows(self.window)
      .map(|w| {
        let lowest = min_of(w.iter().map(|c| c.low)).unwrap_or(0.0);
        let highest = max_of(w.iter().map(|c| c.high)).unwrap_or(0.0);
        let range = highest - lowest;
        let close = w[w.len() - 1].close;

        // 변동 없는 구간은 중립값
        if range <= 0.0 {
          NEUTRAL_K
        } else {
          100.0 * (close - lowest) / range
        }
      })
      .collect()
  }

  /// 인덱스 window+smooth-2 부터의 %D 시리즈
  pub fn d_series(&self, k_values: &[f64]) -> Vec<f64> {
    rolling_average(k_values, self.smooth_window)
  }

  /// 최신 %K, %D 쌍
  pub fn latest(&self, candles: &[Candle]) -> Result<StochasticValue, EngineError> {
    if self.smooth_window == 0 || candles.len() < self.min_periods() {
      return Err(EngineError::InsufficientData {
        required: self.min_periods(),
        actual: candles.len(),
      });
    }

    let k_values = self.k_series(candles);
    let d_values = self.d_series(&k_values);

    match (k_values.last(), d_values.last()) {
      (Some(&k), Some(&d)) => Ok(StochasticValue { k, d }),
      _ => Err(EngineError::InsufficientData {
        required: self.min_periods(),
        actual: candles.len(),
      }),
    }
  }
}

impl Default for StochasticOscillator {
  fn default() -> Self {
    StochasticOscillator::new(14, 3)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn candle(i: i64, high: f64, low: f64, close: f64) -> Candle {
    Candle::new(i, close, high, low, close, None)
  }

  #[test]
  fn test_flat_range_is_neutral() {
    let candles: Vec<Candle> = (0..20).map(|i| candle(i, 10.0, 10.0, 10.0)).collect();
    let stoch = StochasticOscillator::default();

    let value = stoch.latest(&candles).unwrap();
    assert_eq!(value.k, NEUTRAL_K);
    assert_eq!(value.d, NEUTRAL_K);
  }

  #[test]
  fn test_k_formula() {
    // 범위 [0, 10] 고정, 종가만 변경
    let mut candles: Vec<Candle> = (0..3).map(|i| candle(i, 10.0, 1.0, 5.0)).collect();
    candles.push(candle(3, 10.0, 1.0, 2.8));
    let stoch = StochasticOscillator::new(3, 2);

    let k = stoch.k_series(&candles);
    assert_eq!(k.len(), 2);
    assert!((k[0] - 100.0 * 4.0 / 9.0).abs() < 1e-9);
    assert!((k[1] - 100.0 * 1.8 / 9.0).abs() < 1e-9);

    let value = stoch.latest(&candles).unwrap();
    assert!((value.d - (k[0] + k[1]) / 2.0).abs() < 1e-9);
  }

  #[test]
  fn test_series_lengths() {
    let candles: Vec<Candle> = (0..17).map(|i| candle(i, 11.0 + i as f64, 9.0, 10.0 + i as f64)).collect();
    let stoch = StochasticOscillator::default();

    let k = stoch.k_series(&candles);
    assert_eq!(k.len(), 4);
    assert_eq!(stoch.d_series(&k).len(), 2);
    assert!(k.iter().all(|v| (0.0..=100.0).contains(v)));
  }

  #[test]
  fn test_insufficient_data() {
    let candles: Vec<Candle> = (0..15).map(|i| candle(i, 11.0, 9.0, 10.0)).collect();
    let stoch = StochasticOscillator::default();

    assert!(matches!(
      stoch.latest(&candles),
      Err(EngineError::InsufficientData { required: 16, actual: 15 })
    ));
  }
}
