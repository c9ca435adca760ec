/**
* filename : normalize
* author : HAMA
* date: 2025. 6. 2.
* description: 원본 캔들 레코드 검증 및 정렬
**/

use crate::error::EngineError;
use crate::models::candle::{Candle, CandleSeries, RawCandle};

/// 원본 레코드를 정규화된 시리즈로 변환
///
/// 변환 실패 또는 가격 불변식 위반 행은 버린다. 시간 오름차순으로 정렬하고
/// 중복 타임스탬프는 입력에서 나중에 나온 행을 유지한다.
pub fn normalize(raw: &[RawCandle]) -> Result<CandleSeries, EngineError> {
    let mut candles: Vec<Candle> = raw
        .iter()
        .filter_map(RawCandle::coerce)
        .filter(Candle::is_valid)
        .collect();

    let discarded = raw.len() - candles.len();
    if discarded > 0 {
        log::warn!("유효하지 않은 캔들 {}개 제외 (전체 {}개)", discarded, raw.len());
    }

    if candles.is_empty() {
        return Err(EngineError::MalformedInput(format!(
            "no usable candles among {} records",
            raw.len()
        )));
    }

    // 안정 정렬: 같은 타임스탬프는 입력 순서 유지
    candles.sort_by_key(|c| c.timestamp);
    let candles = dedup_keep_last(candles);

    CandleSeries::new(candles)
}

fn dedup_keep_last(sorted: Vec<Candle>) -> Vec<Candle> {
    let mut result: Vec<Candle> = Vec::with_capacity(sorted.len());
    for candle in sorted {
        match result.last_mut() {
            Some(last) if last.timestamp == candle.timestamp => *last = candle,
            _ => result.push(candle),
        }
    }
    result
}
