use crate::models::{ApiEnvelope, Fixture, MatchDetail};
use crate::source::BoardDataSource;
use crate::{BoardConfig, BoardError, BoardResult};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Talks to the gateway routes over HTTP.
pub struct GatewayClient {
    http: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(config: &BoardConfig) -> BoardResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(GatewayClient {
            http,
            base_url: config.gateway_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> BoardResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url} {query:?}");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl BoardDataSource for GatewayClient {
    async fn rounds(&self, current_only: bool) -> BoardResult<Vec<String>> {
        let query: Vec<(&str, String)> = if current_only {
            vec![("current", String::from("true"))]
        } else {
            Vec::new()
        };

        let envelope: ApiEnvelope<String> = self.get_json("/api/football/rounds", &query).await?;
        Ok(envelope.response)
    }

    async fn fixtures(&self, round: &str) -> BoardResult<Vec<Fixture>> {
        let envelope: ApiEnvelope<Fixture> = self
            .get_json("/api/football/fixtures", &[("round", round.to_string())])
            .await?;
        Ok(envelope.response)
    }

    async fn match_detail(&self, fixture_id: u64) -> BoardResult<MatchDetail> {
        self.get_json("/api/football/match", &[("fixtureId", fixture_id.to_string())])
            .await
    }

    async fn image(&self, url: &str) -> BoardResult<Vec<u8>> {
        let response = self
            .http
            .get(format!("{}/api/proxy", self.base_url))
            .query(&[("url", url)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::Status {
                status: status.as_u16(),
                path: String::from("/api/proxy"),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
