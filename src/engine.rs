/**
* filename : engine
* author : HAMA
* date: 2025. 6. 3.
* description: 캔들 시리즈 -> 탐지기 -> 집계 -> 추천
**/

use crate::config::{EngineConfig, ProviderConfig};
use crate::detectors::{default_detectors, Detector, StochasticDetector};
use crate::error::EngineError;
use crate::market_data::CandleProvider;
use crate::models::candle::CandleSeries;
use crate::signals::{EvaluationReport, Recommendation, RecommendationBuilder, SignalAnalyzer, TradingMode};
use crate::utils::logging;

/// 시그널 분석 엔진
///
/// 상태를 갖지 않으며 같은 입력에는 항상 같은 결과를 반환한다.
#[derive(Debug)]
pub struct SignalEngine {
    min_candles: usize,
    oscillator: StochasticDetector,
    detectors: Vec<Box<dyn Detector>>,
    analyzer: SignalAnalyzer,
    builder: RecommendationBuilder,
}

impl SignalEngine {
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: &EngineConfig) -> Self {
        SignalEngine {
            min_candles: config.min_candles(),
            oscillator: StochasticDetector::new(
                config.stochastic_window,
                config.stochastic_smooth,
                config.oversold,
                config.overbought,
            ),
            detectors: default_detectors(config),
            analyzer: SignalAnalyzer::new(),
            builder: RecommendationBuilder::new(config),
        }
    }

    /// 탐지기 추가 (집계 로직 변경 없이 확장)
    pub fn with_detector(mut self, detector: Box<dyn Detector>) -> Self {
        self.detectors.push(detector);
        self
    }

    pub fn evaluate(&self, series: &CandleSeries, mode: TradingMode) -> Result<Recommendation, EngineError> {
        self.evaluate_detailed(series, mode).map(|report| report.recommendation)
    }

    pub fn evaluate_detailed(&self, series: &CandleSeries, mode: TradingMode) -> Result<EvaluationReport, EngineError> {
        if series.len() < self.min_candles {
            return Err(EngineError::InsufficientData {
                required: self.min_candles,
                actual: series.len(),
            });
        }

        // 보고서와 오실레이터 투표가 같은 값을 쓴다
        let stochastic = self.oscillator.read(series)?;

        let mut signals = Vec::new();
        if let Some(signal) = self.oscillator.classify(stochastic) {
            logging::log_signal(self.oscillator.name(), &signal);
            signals.push(signal);
        }
        for detector in &self.detectors {
            for signal in detector.evaluate(series) {
                logging::log_signal(detector.name(), &signal);
                signals.push(signal);
            }
        }

        let aggregate = self.analyzer.aggregate(signals);
        let recommendation = self.builder.build(&aggregate, series, mode);

        let report = EvaluationReport {
            recommendation,
            aggregate,
            stochastic,
            as_of: series.latest().timestamp,
        };
        logging::log_evaluation(&report);

        Ok(report)
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        SignalEngine::with_config(&EngineConfig::default())
    }
}

/// 제공자에서 캔들을 받아 평가. 제공자 오류는 그대로 전달한다.
pub async fn evaluate_from_provider(
    engine: &SignalEngine,
    provider: &dyn CandleProvider,
    provider_config: &ProviderConfig,
    mode: TradingMode,
) -> Result<EvaluationReport, EngineError> {
    let series = provider
        .fetch_candles(&provider_config.symbol, &provider_config.interval, provider_config.output_size)
        .await?;

    engine.evaluate_detailed(&series, mode)
}
