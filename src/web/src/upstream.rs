use crate::config::GatewayConfig;
use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

pub const API_KEY_HEADER: &str = "x-apisports-key";

/// Some image hosts refuse clients that do not look like a browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("FOOTBALL_API_KEY is not configured")]
    MissingCredential,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{target} answered {status}")]
    Status { status: u16, target: String },

    #[error("response is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// One read against the sports API: a path plus its query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamQuery {
    pub path: &'static str,
    pub params: Vec<(&'static str, String)>,
}

impl UpstreamQuery {
    pub fn fixtures_by_round(league_id: u32, season: u32, round: &str) -> Self {
        UpstreamQuery {
            path: "/fixtures",
            params: vec![
                ("league", league_id.to_string()),
                ("season", season.to_string()),
                ("round", round.to_string()),
            ],
        }
    }

    pub fn rounds(league_id: u32, season: u32, current_only: bool) -> Self {
        let mut params = vec![("league", league_id.to_string()), ("season", season.to_string())];
        if current_only {
            params.push(("current", String::from("true")));
        }

        UpstreamQuery {
            path: "/fixtures/rounds",
            params,
        }
    }

    pub fn lineups(fixture_id: &str) -> Self {
        UpstreamQuery {
            path: "/fixtures/lineups",
            params: vec![("fixture", fixture_id.to_string())],
        }
    }

    pub fn events(fixture_id: &str) -> Self {
        UpstreamQuery {
            path: "/fixtures/events",
            params: vec![("fixture", fixture_id.to_string())],
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RelayedImage {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait SportsApi: Send + Sync {
    async fn get_json(&self, query: &UpstreamQuery) -> Result<Value, UpstreamError>;
}

#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch_image(&self, url: &str) -> Result<RelayedImage, UpstreamError>;
}

/// reqwest-backed client for api-sports and arbitrary image hosts.
pub struct ApiSportsClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiSportsClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(ApiSportsClient {
            http,
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl SportsApi for ApiSportsClient {
    async fn get_json(&self, query: &UpstreamQuery) -> Result<Value, UpstreamError> {
        let api_key = self.api_key.as_deref().ok_or(UpstreamError::MissingCredential)?;

        let url = format!("{}{}", self.base_url, query.path);
        debug!("upstream GET {} {:?}", url, query.params);

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .query(&query.params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                target: query.path.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ImageFetcher for ApiSportsClient {
    async fn fetch_image(&self, url: &str) -> Result<RelayedImage, UpstreamError> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                target: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await?.to_vec();

        Ok(RelayedImage { content_type, bytes })
    }
}
