//! 시간 관련 유틸리티
//!
//! 타임스탬프 변환 및 파싱 함수 제공

pub mod logging;
pub mod math;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// 타임스탬프(밀리초)를 DateTime<Utc>로 변환
pub fn timestamp_to_datetime(timestamp_ms: i64) -> DateTime<Utc> {
  Utc.timestamp_millis_opt(timestamp_ms).single().unwrap_or_default()
}

/// DateTime<Utc>를 타임스탬프(밀리초)로 변환
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> i64 {
  dt.timestamp_millis()
}

/// 타임스탬프(밀리초)를 포맷팅된 문자열로 변환
pub fn format_timestamp(timestamp_ms: i64, format: &str) -> String {
  timestamp_to_datetime(timestamp_ms).format(format).to_string()
}

/// 프로바이더 시간 문자열을 밀리초 타임스탬프로 변환
///
/// 정수, `%Y-%m-%d %H:%M:%S`, `%Y-%m-%d`, RFC 3339 순서로 시도한다.
/// 시간대 정보가 없는 값은 UTC 로 간주한다.
pub fn parse_timestamp_ms(value: &str) -> Option<i64> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }

  if let Ok(ms) = value.parse::<i64>() {
    return Some(ms);
  }

  if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
    return Some(datetime_to_timestamp(Utc.from_utc_datetime(&naive)));
  }

  if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
    let naive = date.and_hms_opt(0, 0, 0)?;
    return Some(datetime_to_timestamp(Utc.from_utc_datetime(&naive)));
  }

  DateTime::parse_from_rfc3339(value)
    .ok()
    .map(|dt| datetime_to_timestamp(dt.with_timezone(&Utc)))
}
