/**
* filename : signal_analyzer
* author : HAMA
* date: 2025. 6. 2.
* description: 가중 투표 집계
**/

use crate::utils::math::clamp;
use super::signal_types::{AggregateResult, Direction, Signal, SignalDirection, SignalSource};

#[derive(Debug, Clone)]
pub struct SignalAnalyzer {
  max_score: f64,
}

impl SignalAnalyzer {
  pub fn new() -> Self {
    SignalAnalyzer {
      max_score: SignalSource::max_score(),
    }
  }

  // 신호 목록을 하나의 방향과 신뢰도로 정리
  pub fn aggregate(&self, signals: Vec<Signal>) -> AggregateResult {
    let mut buy_score = 0.0;
    let mut sell_score = 0.0;

    for signal in &signals {
      match signal.direction {
        SignalDirection::Buy => buy_score += signal.weight,
        SignalDirection::Sell => sell_score += signal.weight,
        // 방향 없는 신호는 표시용으로만 유지
        SignalDirection::Neutral => {}
      }
    }

    let direction = if buy_score > sell_score {
      Direction::Buy
    } else if sell_score > buy_score {
      Direction::Sell
    } else {
      Direction::Unclear
    };

    let dominant = f64::max(buy_score, sell_score);
    let confidence = (dominant / self.max_score * 100.0).round();
    let confidence_percent = clamp(confidence, 0.0, 100.0) as u8;

    AggregateResult {
      direction,
      confidence_percent,
      buy_score,
      sell_score,
      contributing_signals: signals,
    }
  }
}

impl Default for SignalAnalyzer {
  fn default() -> Self {
    SignalAnalyzer::new()
  }
}
