use log::{info, warn};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

pub struct GatewayConfig {
    pub port: u16,
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub league_id: u32,
    pub season: u32,
    pub timeout_secs: u64,
}

impl GatewayConfig {
    pub fn load() -> Self {
        let defaults = GatewayConfig::default();

        let api_key = env::var("FOOTBALL_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        if api_key.is_none() {
            warn!("FOOTBALL_API_KEY not set, every upstream call will fail");
        }

        GatewayConfig {
            port: try_load("GATEWAY_PORT", defaults.port),
            api_key,
            api_base_url: try_load("FOOTBALL_API_BASE_URL", defaults.api_base_url)
                .trim_end_matches('/')
                .to_string(),
            league_id: try_load("FOOTBALL_LEAGUE_ID", defaults.league_id),
            season: try_load("FOOTBALL_SEASON", defaults.season),
            timeout_secs: try_load("UPSTREAM_TIMEOUT_SECS", defaults.timeout_secs),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            port: 18000,
            api_key: None,
            api_base_url: String::from("https://v3.football.api-sports.io"),
            league_id: 39,
            season: 2025,
            timeout_secs: 10,
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value: {e}, using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
