use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use wealthspectrum_ai::AnalystConfig;
use wealthspectrum_core::sunburst::LayoutConfig;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Layout used when a request does not carry its own config.
    pub layout: LayoutConfig,
    pub analyst: AnalystConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8088)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(60_000),
            layout: LayoutConfig::default(),
            analyst: AnalystConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("WS_LISTEN_ADDR") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid WS_LISTEN_ADDR: {}", raw))?,
            Err(_) => defaults.listen_addr,
        };
        let cors_allow = std::env::var("WS_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("WS_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60_000);

        let mut layout = defaults.layout;
        if let Ok(raw) = std::env::var("WS_CANVAS_SIZE") {
            layout.canvas_size = raw
                .parse()
                .with_context(|| format!("Invalid WS_CANVAS_SIZE: {}", raw))?;
        }
        if let Ok(raw) = std::env::var("WS_PAD_ANGLE") {
            layout.pad_angle = raw
                .parse()
                .with_context(|| format!("Invalid WS_PAD_ANGLE: {}", raw))?;
        }
        layout.validate()?;

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            layout,
            analyst: AnalystConfig::from_env(),
        })
    }
}
