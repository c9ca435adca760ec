use async_trait::async_trait;
use mockall::automock;

use crate::error::EngineError;
use crate::models::candle::CandleSeries;

/// 캔들 데이터 제공자 인터페이스
///
/// 실패는 `EngineError::DataUnavailable` 로 반환한다.
#[automock]
#[async_trait]
pub trait CandleProvider: Send + Sync {
    /// 심볼/인터벌의 최근 캔들 조회
    async fn fetch_candles(&self, symbol: &str, interval: &str, limit: usize) -> Result<CandleSeries, EngineError>;
}
