use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::EngineError;
use crate::models::candle::{CandleSeries, RawCandle, RawField};
use super::normalize::normalize;
use super::provider::CandleProvider;

/// 단일 CSV 파일 캔들 제공자 (심볼/인터벌은 파일로 고정)
pub struct CsvCandleProvider {
    path: PathBuf,
    delimiter: u8,
}

impl CsvCandleProvider {
    /// 구분자는 csv 와 같이 단일 바이트
    pub fn new(path: PathBuf, delimiter: u8) -> Self {
        Self { path, delimiter }
    }

    pub fn load_raw(&self) -> Result<Vec<RawCandle>, EngineError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| EngineError::DataUnavailable(format!("Failed to open {}: {}", self.path.display(), e)))?;

        let mut rows = Vec::new();
        for rec in rdr.deserialize() {
            let row: CsvRow = rec.map_err(|e| EngineError::DataUnavailable(format!("Malformed CSV row: {}", e)))?;
            rows.push(RawCandle {
                timestamp: RawField::Text(row.timestamp),
                open: RawField::Text(row.open),
                high: RawField::Text(row.high),
                low: RawField::Text(row.low),
                close: RawField::Text(row.close),
                volume: row.volume.filter(|v| !v.is_empty()).map(RawField::Text),
            });
        }
        Ok(rows)
    }
}

#[async_trait]
impl CandleProvider for CsvCandleProvider {
    async fn fetch_candles(&self, _symbol: &str, _interval: &str, limit: usize) -> Result<CandleSeries, EngineError> {
        let series = normalize(&self.load_raw()?)?;
        if limit == 0 || series.len() <= limit {
            return Ok(series);
        }
        CandleSeries::new(series.tail(limit).to_vec())
    }
}

#[derive(serde::Deserialize)]
struct CsvRow {
    #[serde(alias = "datetime")]
    timestamp: String,
    open: String,
    high: String,
    low: String,
    close: String,
    #[serde(default)]
    volume: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("signal_engine_{}_{}.csv", name, std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_and_limit() {
        let path = write_temp(
            "limit",
            "datetime,open,high,low,close,volume\n\
             2024-05-01 12:00:00,3,4,2,3.5,10\n\
             2024-05-01 10:00:00,1,2,0.5,1.5,\n\
             2024-05-01 11:00:00,2,3,1,2.5,7\n",
        );
        let provider = CsvCandleProvider::new(path.clone(), b',');

        let all = provider.fetch_candles("XAU/USD", "1h", 0).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all.candles()[0].volume, None);

        let last_two = provider.fetch_candles("XAU/USD", "1h", 2).await.unwrap();
        assert_eq!(last_two.len(), 2);
        assert_eq!(last_two.latest().close, 3.5);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_semicolon_delimiter() {
        let path = write_temp(
            "semicolon",
            "timestamp;open;high;low;close\n\
             1714557600000;1;2;0.5;1.5\n\
             1714561200000;2;3;1;2.5\n",
        );
        let provider = CsvCandleProvider::new(path.clone(), b';');

        let series = provider.fetch_candles("XAU/USD", "1h", 0).await.unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.latest().close, 2.5);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let provider = CsvCandleProvider::new(PathBuf::from("/nonexistent/candles.csv"), b',');
        let result = provider.fetch_candles("XAU/USD", "1h", 50).await;
        assert!(matches!(result, Err(EngineError::DataUnavailable(_))));
    }
}
