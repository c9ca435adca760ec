/**
* filename : twelve_data
* author : HAMA
* date: 2025. 6. 3.
* description: Twelve Data time_series REST 캔들 제공자
**/

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::ProviderConfig;
use crate::error::EngineError;
use crate::models::candle::{CandleSeries, RawCandle};
use super::normalize::normalize;
use super::provider::CandleProvider;

#[derive(Debug, Deserialize)]
struct TimeSeriesResponse {
    #[serde(default)]
    values: Option<Vec<RawCandle>>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub struct TwelveDataProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TwelveDataProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, EngineError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| EngineError::ConfigError("Twelve Data API key is not set (TD_API_KEY)".to_string()))?;

        let mut builder = Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| EngineError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(TwelveDataProvider {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

/// time_series 응답 본문을 시리즈로 변환. 값은 최신순으로 내려온다.
pub fn parse_time_series(body: &str) -> Result<CandleSeries, EngineError> {
    let response: TimeSeriesResponse = serde_json::from_str(body)
        .map_err(|e| EngineError::DataUnavailable(format!("Malformed provider response: {}", e)))?;

    match response.values {
        // 장 마감 등으로 빈 목록이 올 수 있다
        Some(values) if values.is_empty() => Err(EngineError::DataUnavailable(format!(
            "no candles returned ({})",
            response.status.unwrap_or_else(|| "unknown".to_string())
        ))),
        Some(values) => normalize(&values),
        None => {
            let status = response.status.unwrap_or_else(|| "unknown".to_string());
            let message = response.message.unwrap_or_else(|| "response has no values".to_string());
            Err(EngineError::DataUnavailable(format!("{} ({})", message, status)))
        }
    }
}

#[async_trait]
impl CandleProvider for TwelveDataProvider {
    async fn fetch_candles(&self, symbol: &str, interval: &str, limit: usize) -> Result<CandleSeries, EngineError> {
        let url = format!("{}/time_series", self.base_url);
        log::debug!("캔들 요청: {} {} (limit {})", symbol, interval, limit);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol.to_string()),
                ("interval", interval.to_string()),
                ("apikey", self.api_key.clone()),
                ("outputsize", limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                log::error!("Twelve Data 요청 실패: {}", e);
                EngineError::DataUnavailable(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            log::error!("Twelve Data 응답 오류: {}", response.status());
            return Err(EngineError::DataUnavailable(format!("Provider returned {}", response.status())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| EngineError::DataUnavailable(format!("Failed to read response: {}", e)))?;

        parse_time_series(&body)
    }
}
