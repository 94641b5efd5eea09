use log::{info, warn};
use std::env;
use std::time::Duration;

const DEFAULT_GATEWAY_URL: &str = "http://localhost:18000";
const DEFAULT_REVEAL_DELAY_MS: u64 = 50;

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub gateway_url: String,
    /// Pause between revealing consecutive score cards.
    pub reveal_delay: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
        }
    }
}

impl BoardConfig {
    pub fn load() -> Self {
        let defaults = BoardConfig::default();

        let gateway_url = env::var("BOARD_GATEWAY_URL").unwrap_or_else(|_| {
            info!("BOARD_GATEWAY_URL not set, using default: {}", defaults.gateway_url);
            defaults.gateway_url.clone()
        });

        let reveal_delay = match env::var("BOARD_REVEAL_DELAY_MS").map(|v| v.parse::<u64>()) {
            Ok(Ok(ms)) => Duration::from_millis(ms),
            Ok(Err(e)) => {
                warn!("Invalid BOARD_REVEAL_DELAY_MS value: {e}");
                defaults.reveal_delay
            }
            Err(_) => defaults.reveal_delay,
        };

        BoardConfig {
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
            reveal_delay,
        }
    }

    pub fn without_delay(mut self) -> Self {
        self.reveal_delay = Duration::ZERO;
        self
    }
}
