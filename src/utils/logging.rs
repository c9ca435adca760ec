//! 로깅 유틸리티
//!
//! 로그 초기화 및 유틸리티 함수 제공

use env_logger::Builder;
use log::LevelFilter;
use std::env;

use crate::error::EngineError;
use crate::signals::{EvaluationReport, Signal};

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// 로깅 시스템 초기화
///
/// RUST_LOG 가 설정되어 있으면 설정 파일의 레벨보다 우선한다.
pub fn init(default_level: &str) -> Result<(), EngineError> {
    let mut builder = Builder::from_default_env();

    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());

    builder
        .filter_level(parse_level(&log_level))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| EngineError::ConfigError(format!("Failed to initialize logger: {}", e)))?;

    log::info!("로깅 시스템 초기화 완료: 레벨 = {}", log_level);

    Ok(())
}

/// 탐지기 투표 로그
pub fn log_signal(detector: &str, signal: &Signal) {
    log::debug!("신호 발생: {} - 방향: {:?} - 가중치: {}", detector, signal.direction, signal.weight);
}

/// 평가 결과 로그
pub fn log_evaluation(report: &EvaluationReport) {
    let rec = &report.recommendation;
    log::info!(
        "평가 완료: 방향: {:?} - 신뢰도: {}% - 진입: {} - 손절: {} - 익절: {} - 모드: {:?}",
        rec.direction, rec.confidence_percent, rec.entry_price, rec.stop_loss, rec.take_profit, rec.mode
    );
}

/// 오류 로그
pub fn log_error(context: &str, error: &EngineError) {
    log::error!("오류 발생 - {}: {}", context, error);
}
