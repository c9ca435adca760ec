/**
* filename : candle
* author : HAMA
* date: 2025. 6. 2.
* description: 캔들 및 캔들 시리즈 모델
**/

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// 에포크 밀리초
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<f64>,
}

impl Candle {
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: Option<f64>) -> Self {
        Candle {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// 가격이 모두 양의 유한값이고 high/low 가 시가/종가를 감싸는지 확인
    pub fn is_valid(&self) -> bool {
        let prices = [self.open, self.high, self.low, self.close];
        if prices.iter().any(|p| !p.is_finite() || *p <= 0.0) {
            return false;
        }
        if let Some(volume) = self.volume {
            if !volume.is_finite() || volume < 0.0 {
                return false;
            }
        }

        self.high >= self.open.max(self.close) && self.low <= self.open.min(self.close)
    }

    pub fn is_bullish(&self) -> bool {
        self.open < self.close
    }

    pub fn is_bearish(&self) -> bool {
        self.open > self.close
    }
}

/// 프로바이더가 숫자 또는 문자열로 내려주는 필드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
}

impl RawField {
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            RawField::Number(n) => *n,
            RawField::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        if value.is_finite() { Some(value) } else { None }
    }

    pub fn as_timestamp_ms(&self) -> Option<i64> {
        match self {
            RawField::Number(n) if n.is_finite() => Some(*n as i64),
            RawField::Number(_) => None,
            RawField::Text(s) => crate::utils::parse_timestamp_ms(s),
        }
    }
}

impl From<f64> for RawField {
    fn from(value: f64) -> Self {
        RawField::Number(value)
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        RawField::Text(value.to_string())
    }
}

/// 정규화 전의 원본 캔들 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCandle {
    #[serde(alias = "datetime")]
    pub timestamp: RawField,
    pub open: RawField,
    pub high: RawField,
    pub low: RawField,
    pub close: RawField,
    #[serde(default)]
    pub volume: Option<RawField>,
}

impl RawCandle {
    pub fn new(
        timestamp: impl Into<RawField>,
        open: impl Into<RawField>,
        high: impl Into<RawField>,
        low: impl Into<RawField>,
        close: impl Into<RawField>,
        volume: Option<RawField>,
    ) -> Self {
        RawCandle {
            timestamp: timestamp.into(),
            open: open.into(),
            high: high.into(),
            low: low.into(),
            close: close.into(),
            volume,
        }
    }

    /// 숫자 변환. 변환 실패 시 None
    pub fn coerce(&self) -> Option<Candle> {
        let volume = match &self.volume {
            Some(raw) => Some(raw.as_f64()?),
            None => None,
        };

        Some(Candle {
            timestamp: self.timestamp.as_timestamp_ms()?,
            open: self.open.as_f64()?,
            high: self.high.as_f64()?,
            low: self.low.as_f64()?,
            close: self.close.as_f64()?,
            volume,
        })
    }
}

/// 시간 오름차순으로 정렬된 단일 종목 캔들 시리즈
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    /// 이미 정렬된 캔들로 시리즈 생성. 불변식 위반 시 MalformedInput
    pub fn new(candles: Vec<Candle>) -> Result<Self, EngineError> {
        if candles.is_empty() {
            return Err(EngineError::MalformedInput("candle series is empty".to_string()));
        }

        if let Some(bad) = candles.iter().find(|c| !c.is_valid()) {
            return Err(EngineError::MalformedInput(format!(
                "candle at {} violates price invariants",
                bad.timestamp
            )));
        }

        if let Some(pair) = candles.windows(2).find(|w| w[0].timestamp >= w[1].timestamp) {
            return Err(EngineError::MalformedInput(format!(
                "timestamps not strictly ascending at {}",
                pair[1].timestamp
            )));
        }

        Ok(CandleSeries { candles })
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn latest(&self) -> &Candle {
        // 생성 시 비어있지 않음이 보장됨
        &self.candles[self.candles.len() - 1]
    }

    /// 최신 캔들 기준 n 번째 (1 = 최신)
    pub fn from_end(&self, n: usize) -> Option<&Candle> {
        if n == 0 || n > self.candles.len() {
            return None;
        }
        self.candles.get(self.candles.len() - n)
    }

    /// 최근 n 개 캔들 (시리즈가 짧으면 전체)
    pub fn tail(&self, n: usize) -> &[Candle] {
        let start = self.candles.len().saturating_sub(n);
        &self.candles[start..]
    }
}
