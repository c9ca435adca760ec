/**
* filename : signal_types
* author : HAMA
* date: 2025. 6. 2.
* description:
**/

use std::fmt;
use serde::{Deserialize, Serialize};

/// 신호를 낸 탐지기
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalSource {
  Oscillator,
  SupportResistance,
  OrderBlock,
  FairValueGap,
  SwingStructure,
}

impl SignalSource {
  pub const ALL: [SignalSource; 5] = [
    SignalSource::Oscillator,
    SignalSource::SupportResistance,
    SignalSource::OrderBlock,
    SignalSource::FairValueGap,
    SignalSource::SwingStructure,
  ];

  /// 고정 가중치 테이블
  pub fn weight(&self) -> f64 {
    match self {
      SignalSource::Oscillator => 1.0,
      SignalSource::SupportResistance => 1.0,
      SignalSource::OrderBlock => 1.0,
      SignalSource::FairValueGap => 0.5,
      SignalSource::SwingStructure => 0.5,
    }
  }

  /// 모든 가중치의 합 (신뢰도 분모)
  pub fn max_score() -> f64 {
    SignalSource::ALL.iter().map(|s| s.weight()).sum()
  }

  pub fn label(&self) -> &'static str {
    match self {
      SignalSource::Oscillator => "Stochastic",
      SignalSource::SupportResistance => "Support/Resistance",
      SignalSource::OrderBlock => "Order Block",
      SignalSource::FairValueGap => "Fair Value Gap",
      SignalSource::SwingStructure => "Swing Structure",
    }
  }
}

impl fmt::Display for SignalSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// 개별 신호의 방향. Neutral 은 방향 집계에 포함되지 않음
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalDirection {
  Buy,
  Sell,
  Neutral,
}

/// 최종 판단 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
  Buy,
  Sell,
  Unclear,
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      Direction::Buy => "BUY",
      Direction::Sell => "SELL",
      Direction::Unclear => "UNCLEAR",
    };
    f.write_str(text)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
  pub source: SignalSource,
  pub direction: SignalDirection,
  pub weight: f64,
}

impl Signal {
  /// 가중치 테이블의 값으로 신호 생성
  pub fn new(source: SignalSource, direction: SignalDirection) -> Self {
    Signal {
      source,
      direction,
      weight: source.weight(),
    }
  }

  pub fn buy(source: SignalSource) -> Self {
    Signal::new(source, SignalDirection::Buy)
  }

  pub fn sell(source: SignalSource) -> Self {
    Signal::new(source, SignalDirection::Sell)
  }

  pub fn neutral(source: SignalSource) -> Self {
    Signal::new(source, SignalDirection::Neutral)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
  pub direction: Direction,
  pub confidence_percent: u8,
  pub buy_score: f64,
  pub sell_score: f64,
  pub contributing_signals: Vec<Signal>,
}

impl AggregateResult {
  /// 레벨 계산에 쓸 방향. 동점이면 매도
  pub fn leaning(&self) -> Direction {
    match self.direction {
      Direction::Unclear if self.buy_score > self.sell_score => Direction::Buy,
      Direction::Unclear => Direction::Sell,
      other => other,
    }
  }
}
