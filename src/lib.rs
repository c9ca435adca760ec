//! 캔들 시그널 분석 엔진
//!
//! 스토캐스틱 오실레이터와 구조 탐지기(지지/저항, 오더블럭, FVG, 스윙 구조)의
//! 가중 투표로 매수/매도 추천과 진입/손절/익절 가격을 계산합니다.

pub mod config;
pub mod detectors;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod market_data;
pub mod models;
pub mod signals;
pub mod utils;

// 핵심 타입 재노출
pub use crate::engine::{evaluate_from_provider, SignalEngine};
pub use crate::error::EngineError;
pub use crate::models::candle::{Candle, CandleSeries, RawCandle, RawField};
pub use crate::signals::{
    AggregateResult, Direction, EvaluationReport, Recommendation, Signal, SignalDirection, SignalSource, TradingMode,
};
pub use crate::detectors::Detector;
pub use crate::market_data::CandleProvider;

/// 버전 정보
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 결과 타입 별칭
pub type Result<T> = std::result::Result<T, EngineError>;
