/**
* filename : report
* author : HAMA
* date: 2025. 6. 3.
* description: 평가 결과 요약 (메시지 프론트엔드 전달용)
**/

use serde::Serialize;

use crate::indicators::StochasticValue;
use crate::utils::format_timestamp;
use super::recommendation::Recommendation;
use super::signal_types::{AggregateResult, SignalDirection};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
  pub recommendation: Recommendation,
  pub aggregate: AggregateResult,
  pub stochastic: StochasticValue,
  /// 마지막 캔들 시각 (에포크 밀리초)
  pub as_of: i64,
}

impl EvaluationReport {
  /// 결과 요약 텍스트
  pub fn summary(&self) -> String {
    let rec = &self.recommendation;
    let mut lines = vec![
      format!("=== {} Analysis ===", rec.mode),
      format!("As of: {}", format_timestamp(self.as_of, "%Y-%m-%d %H:%M UTC")),
      format!("Direction: {}", rec.direction),
      format!("Confidence: {}%", rec.confidence_percent),
      format!("Entry: {:.2}", rec.entry_price),
      format!("Stop Loss: {:.2}", rec.stop_loss),
      format!("Take Profit: {:.2}", rec.take_profit),
      format!("Stochastic: K = {:.2}, D = {:.2}", self.stochastic.k, self.stochastic.d),
    ];

    if self.aggregate.contributing_signals.is_empty() {
      lines.push("Signals: none".to_string());
    } else {
      lines.push("Signals:".to_string());
      for signal in &self.aggregate.contributing_signals {
        let side = match signal.direction {
          SignalDirection::Buy => "buy",
          SignalDirection::Sell => "sell",
          SignalDirection::Neutral => "imbalance",
        };
        lines.push(format!("  - {} ({}, weight {})", signal.source, side, signal.weight));
      }
    }

    lines.join("\n")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::signals::recommendation::TradingMode;
  use crate::signals::signal_types::{Direction, Signal, SignalSource};

  #[test]
  fn test_summary_lists_signals() {
    let report = EvaluationReport {
      recommendation: Recommendation {
        direction: Direction::Sell,
        entry_price: 2350.0,
        stop_loss: 2361.75,
        take_profit: 2326.5,
        confidence_percent: 38,
        mode: TradingMode::Scalp,
      },
      aggregate: AggregateResult {
        direction: Direction::Sell,
        confidence_percent: 38,
        buy_score: 0.0,
        sell_score: 1.5,
        contributing_signals: vec![
          Signal::sell(SignalSource::Oscillator),
          Signal::sell(SignalSource::SwingStructure),
          Signal::neutral(SignalSource::FairValueGap),
        ],
      },
      stochastic: StochasticValue { k: 91.234, d: 85.0 },
      as_of: 86_400_000,
    };

    let text = report.summary();
    assert!(text.contains("=== Scalp Analysis ==="));
    assert!(text.contains("As of: 1970-01-02 00:00 UTC"));
    assert!(text.contains("Direction: SELL"));
    assert!(text.contains("Confidence: 38%"));
    assert!(text.contains("K = 91.23, D = 85.00"));
    assert!(text.contains("Fair Value Gap (imbalance, weight 0.5)"));
  }
}
