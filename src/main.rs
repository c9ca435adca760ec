/**
* filename : main
* author : HAMA
* date: 2025. 6. 3.
* description:
**/

use std::path::PathBuf;

use signal_engine::config::Config;
use signal_engine::market_data::{CandleProvider, CsvCandleProvider, TwelveDataProvider};
use signal_engine::utils::logging;
use signal_engine::{evaluate_from_provider, SignalEngine, TradingMode};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 설정 로드
    let config = Config::load()?;

    // 로깅 초기화
    logging::init(&config.logging.level)?;
    log::info!("시그널 엔진 시작 (v{})", signal_engine::VERSION);

    // 명령줄 인수: [scalp|swing] [--csv <path>]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = match args.first().filter(|a| !a.starts_with("--")) {
        Some(text) => text.parse::<TradingMode>()?,
        None => TradingMode::Scalp,
    };
    let csv_path = args
        .iter()
        .position(|a| a == "--csv")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);

    let provider: Box<dyn CandleProvider> = match csv_path {
        Some(path) => {
            log::info!("CSV 데이터 사용: {}", path.display());
            Box::new(CsvCandleProvider::new(path, b','))
        }
        None => {
            log::info!("Twelve Data 사용: {} {}", config.provider.symbol, config.provider.interval);
            Box::new(TwelveDataProvider::new(&config.provider)?)
        }
    };

    let engine = SignalEngine::new(&config.engine)?;

    match evaluate_from_provider(&engine, provider.as_ref(), &config.provider, mode).await {
        Ok(report) => {
            println!("{}", report.summary());
            Ok(())
        }
        Err(e) => {
            logging::log_error("평가 실패", &e);
            Err(e.into())
        }
    }
}
