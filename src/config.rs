/**
* filename : config
* author : HAMA
* date: 2025. 6. 2.
* description:
**/

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::EngineError;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub symbol: String,
    pub interval: String,
    pub output_size: usize,
    pub timeout_ms: Option<u64>,
}

/// 엔진 상수. 기본값은 스토캐스틱 14/3, 지지/저항 10봉 윈도우
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub stochastic_window: usize,
    pub stochastic_smooth: usize,
    pub oversold: f64,
    pub overbought: f64,
    pub level_window: usize,
    pub level_tolerance: f64,
    pub scalp_stop_pct: f64,
    pub scalp_target_pct: f64,
    pub reward_risk: f64,
    pub swing_lookback: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    /// Load configuration from config.json, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.json"))
    }

    /// 파일 입출력은 IoError, JSON 오류는 SerializationError
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut cfg = if config_path.exists() {
            let mut file = File::open(config_path)?;

            let mut contents = String::new();
            file.read_to_string(&mut contents)?;

            serde_json::from_str::<Config>(&contents)?
        } else {
            Config::default()
        };

        // environment overrides
        cfg.apply_env_overrides();
        cfg.engine.validate()?;
        Ok(cfg)
    }

    /// Apply environment variable overrides for sensitive/runtime fields
    fn apply_env_overrides(&mut self) {
        use std::env;
        if let Ok(v) = env::var("TD_API_KEY") { if !v.is_empty() { self.provider.api_key = Some(v); } }
        if let Ok(v) = env::var("TD_BASE_URL") { if !v.is_empty() { self.provider.base_url = v; } }
        if let Ok(v) = env::var("SIGNAL_SYMBOL") { if !v.is_empty() { self.provider.symbol = v; } }
        if let Ok(v) = env::var("SIGNAL_INTERVAL") { if !v.is_empty() { self.provider.interval = v; } }
    }
}

impl EngineConfig {
    /// 최소 필요 캔들 수 (룩백 + 스무딩)
    pub fn min_candles(&self) -> usize {
        self.stochastic_window + self.stochastic_smooth
    }

    pub fn validate(&self) -> Result<()> {
        let windows = [
            ("stochastic_window", self.stochastic_window),
            ("stochastic_smooth", self.stochastic_smooth),
            ("level_window", self.level_window),
            ("swing_lookback", self.swing_lookback),
        ];
        for (name, value) in windows {
            if value == 0 {
                return Err(EngineError::ConfigError(format!("{} must be greater than zero", name)));
            }
        }

        let ratios = [
            ("level_tolerance", self.level_tolerance),
            ("scalp_stop_pct", self.scalp_stop_pct),
            ("scalp_target_pct", self.scalp_target_pct),
            ("reward_risk", self.reward_risk),
        ];
        for (name, value) in ratios {
            if !(value.is_finite() && value > 0.0) {
                return Err(EngineError::ConfigError(format!("{} must be positive", name)));
            }
        }
        if self.scalp_stop_pct >= 1.0 || self.scalp_target_pct >= 1.0 {
            return Err(EngineError::ConfigError("scalp percentages must be below 1.0".to_string()));
        }

        if !(0.0..=100.0).contains(&self.oversold)
            || !(0.0..=100.0).contains(&self.overbought)
            || self.oversold >= self.overbought
        {
            return Err(EngineError::ConfigError(format!(
                "invalid oscillator thresholds: oversold {} / overbought {}",
                self.oversold, self.overbought
            )));
        }

        Ok(())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: "https://api.twelvedata.com".to_string(),
            api_key: None,
            symbol: "XAU/USD".to_string(),
            interval: "1h".to_string(),
            output_size: 50,
            timeout_ms: Some(10_000),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            stochastic_window: 14,
            stochastic_smooth: 3,
            oversold: 20.0,
            overbought: 80.0,
            level_window: 10,
            level_tolerance: 0.01,
            scalp_stop_pct: 0.005,
            scalp_target_pct: 0.01,
            reward_risk: 2.0,
            swing_lookback: 14,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}
