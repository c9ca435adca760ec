/**
* filename : recommendation
* author : HAMA
* date: 2025. 6. 3.
* description: 방향/모드에 따른 진입, 손절, 익절 가격 계산
**/

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::models::candle::{Candle, CandleSeries};
use crate::utils::math::{max_of, min_of};
use super::signal_types::{AggregateResult, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradingMode {
  Scalp,
  Swing,
}

impl FromStr for TradingMode {
  type Err = EngineError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "scalp" | "scalping" => Ok(TradingMode::Scalp),
      "swing" => Ok(TradingMode::Swing),
      other => Err(EngineError::ParseError(format!("Unknown trading mode: {}", other))),
    }
  }
}

impl fmt::Display for TradingMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TradingMode::Scalp => f.write_str("Scalp"),
      TradingMode::Swing => f.write_str("Swing"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
  pub direction: Direction,
  pub entry_price: f64,
  pub stop_loss: f64,
  pub take_profit: f64,
  pub confidence_percent: u8,
  pub mode: TradingMode,
}

#[derive(Debug, Clone)]
pub struct RecommendationBuilder {
  scalp_stop_pct: f64,
  scalp_target_pct: f64,
  reward_risk: f64,
  swing_lookback: usize,
}

impl RecommendationBuilder {
  pub fn new(config: &EngineConfig) -> Self {
    RecommendationBuilder {
      scalp_stop_pct: config.scalp_stop_pct,
      scalp_target_pct: config.scalp_target_pct,
      reward_risk: config.reward_risk,
      swing_lookback: config.swing_lookback,
    }
  }

  pub fn build(&self, aggregate: &AggregateResult, series: &CandleSeries, mode: TradingMode) -> Recommendation {
    let entry = series.latest().close;
    // 방향 불명확 시에도 우세한 쪽 기준으로 레벨 계산
    let is_buy = aggregate.leaning() == Direction::Buy;

    let (stop_loss, take_profit) = match mode {
      TradingMode::Scalp => self.scalp_levels(entry, is_buy),
      TradingMode::Swing => self.swing_levels(entry, is_buy, series.tail(self.swing_lookback)),
    };

    Recommendation {
      direction: aggregate.direction,
      entry_price: entry,
      stop_loss,
      take_profit,
      confidence_percent: aggregate.confidence_percent,
      mode,
    }
  }

  fn scalp_levels(&self, entry: f64, is_buy: bool) -> (f64, f64) {
    if is_buy {
      (entry * (1.0 - self.scalp_stop_pct), entry * (1.0 + self.scalp_target_pct))
    } else {
      (entry * (1.0 + self.scalp_stop_pct), entry * (1.0 - self.scalp_target_pct))
    }
  }

  fn swing_levels(&self, entry: f64, is_buy: bool, window: &[Candle]) -> (f64, f64) {
    let stop = if is_buy {
      swing_low(window, entry)
    } else {
      swing_high(window, entry)
    };

    // 스윙 포인트가 없으면 스캘핑 손절폭 사용
    let stop = stop.unwrap_or_else(|| self.scalp_levels(entry, is_buy).0);
    let risk = (entry - stop).abs();

    let target = if is_buy {
      entry + self.reward_risk * risk
    } else {
      entry - self.reward_risk * risk
    };

    if target > 0.0 {
      (stop, target)
    } else {
      self.scalp_levels(entry, is_buy)
    }
  }
}

impl Default for RecommendationBuilder {
  fn default() -> Self {
    RecommendationBuilder::new(&EngineConfig::default())
  }
}

/// 진입가 아래의 가장 최근 3봉 피벗 저점, 없으면 윈도우 최저가
fn swing_low(window: &[Candle], entry: f64) -> Option<f64> {
  let pivot = (1..window.len().saturating_sub(1)).rev().find_map(|i| {
    let low = window[i].low;
    let is_pivot = low < window[i - 1].low && low < window[i + 1].low;
    if is_pivot && low < entry { Some(low) } else { None }
  });

  pivot.or_else(|| min_of(window.iter().map(|c| c.low)).filter(|low| *low < entry))
}

/// 진입가 위의 가장 최근 3봉 피벗 고점, 없으면 윈도우 최고가
fn swing_high(window: &[Candle], entry: f64) -> Option<f64> {
  let pivot = (1..window.len().saturating_sub(1)).rev().find_map(|i| {
    let high = window[i].high;
    let is_pivot = high > window[i - 1].high && high > window[i + 1].high;
    if is_pivot && high > entry { Some(high) } else { None }
  });

  pivot.or_else(|| max_of(window.iter().map(|c| c.high)).filter(|high| *high > entry))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::signals::signal_types::{Signal, SignalSource};
  use crate::signals::signal_analyzer::SignalAnalyzer;
  use rstest::rstest;

  fn series_from(points: &[(f64, f64, f64)]) -> CandleSeries {
    // (high, low, close)
    let candles = points
      .iter()
      .enumerate()
      .map(|(i, &(high, low, close))| Candle::new(i as i64, close, high, low, close, None))
      .collect();
    CandleSeries::new(candles).unwrap()
  }

  fn aggregate(signals: Vec<Signal>) -> AggregateResult {
    SignalAnalyzer::new().aggregate(signals)
  }

  #[rstest]
  #[case("scalp", TradingMode::Scalp)]
  #[case("Scalping", TradingMode::Scalp)]
  #[case(" swing ", TradingMode::Swing)]
  fn test_parse_mode(#[case] text: &str, #[case] mode: TradingMode) {
    assert_eq!(text.parse::<TradingMode>().unwrap(), mode);
  }

  #[test]
  fn test_parse_unknown_mode() {
    assert!(matches!("position".parse::<TradingMode>(), Err(EngineError::ParseError(_))));
  }

  #[test]
  fn test_scalp_buy_levels() {
    let series = series_from(&[(101.0, 99.0, 100.0), (101.0, 99.0, 100.0)]);
    let rec = RecommendationBuilder::default().build(
      &aggregate(vec![Signal::buy(SignalSource::Oscillator)]),
      &series,
      TradingMode::Scalp,
    );

    assert_eq!(rec.direction, Direction::Buy);
    assert_eq!(rec.entry_price, 100.0);
    assert!((rec.stop_loss - 99.5).abs() < 1e-9);
    assert!((rec.take_profit - 101.0).abs() < 1e-9);
    assert_eq!(rec.confidence_percent, 25);
  }

  #[test]
  fn test_unclear_tie_defaults_to_sell_levels() {
    let series = series_from(&[(101.0, 99.0, 100.0), (101.0, 99.0, 100.0)]);
    let rec = RecommendationBuilder::default().build(&aggregate(vec![]), &series, TradingMode::Scalp);

    assert_eq!(rec.direction, Direction::Unclear);
    assert!(rec.take_profit < rec.entry_price && rec.entry_price < rec.stop_loss);
  }

  #[test]
  fn test_unclear_uses_higher_side() {
    let series = series_from(&[(101.0, 99.0, 100.0), (101.0, 99.0, 100.0)]);
    let mut result = aggregate(vec![]);
    result.buy_score = 0.5;

    let rec = RecommendationBuilder::default().build(&result, &series, TradingMode::Scalp);
    assert!(rec.stop_loss < rec.entry_price && rec.entry_price < rec.take_profit);
  }

  #[test]
  fn test_swing_buy_uses_pivot_low() {
    // 인덱스 2 가 피벗 저점 (95)
    let series = series_from(&[
      (101.0, 98.0, 100.0),
      (100.0, 97.0, 98.0),
      (99.0, 95.0, 96.0),
      (102.0, 97.0, 101.0),
      (104.0, 100.0, 103.0),
    ]);
    let rec = RecommendationBuilder::default().build(
      &aggregate(vec![Signal::buy(SignalSource::OrderBlock)]),
      &series,
      TradingMode::Swing,
    );

    assert_eq!(rec.stop_loss, 95.0);
    assert!((rec.take_profit - (103.0 + 2.0 * 8.0)).abs() < 1e-9);
  }

  #[test]
  fn test_swing_sell_uses_pivot_high() {
    let series = series_from(&[
      (101.0, 98.0, 100.0),
      (106.0, 100.0, 104.0),
      (103.0, 99.0, 100.0),
      (101.0, 96.0, 97.0),
    ]);
    let rec = RecommendationBuilder::default().build(
      &aggregate(vec![Signal::sell(SignalSource::OrderBlock)]),
      &series,
      TradingMode::Swing,
    );

    assert_eq!(rec.stop_loss, 106.0);
    assert!((rec.take_profit - (97.0 - 2.0 * 9.0)).abs() < 1e-9);
  }

  #[test]
  fn test_swing_falls_back_when_no_level_below_entry() {
    // 최신 종가가 윈도우 최저가와 같음
    let series = series_from(&[(101.0, 100.0, 100.0), (100.0, 99.0, 99.0), (99.0, 98.0, 98.0)]);
    let rec = RecommendationBuilder::default().build(
      &aggregate(vec![Signal::buy(SignalSource::SupportResistance)]),
      &series,
      TradingMode::Swing,
    );

    assert!((rec.stop_loss - 98.0 * 0.995).abs() < 1e-9);
    assert!(rec.stop_loss < rec.entry_price && rec.entry_price < rec.take_profit);
  }
}
