use crate::upstream::{ImageFetcher, RelayedImage, SportsApi, UpstreamError, UpstreamQuery};
use crate::{GatewayAppData, GatewayConfig, GatewayServer};
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Canned upstream keyed by path, recording every query it sees.
#[derive(Default)]
pub struct FakeUpstream {
    bodies: HashMap<&'static str, Value>,
    images: HashMap<String, RelayedImage>,
    queries: Mutex<Vec<UpstreamQuery>>,
}

impl FakeUpstream {
    pub fn with_body(mut self, path: &'static str, body: Value) -> Self {
        self.bodies.insert(path, body);
        self
    }

    pub fn with_image(mut self, url: &str, content_type: Option<&str>, bytes: &[u8]) -> Self {
        self.images.insert(
            url.to_string(),
            RelayedImage {
                content_type: content_type.map(str::to_string),
                bytes: bytes.to_vec(),
            },
        );
        self
    }

    pub fn queries(&self) -> Vec<UpstreamQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn router(self: &Arc<Self>) -> Router {
        let data = GatewayAppData {
            api: self.clone(),
            images: self.clone(),
            config: Arc::new(GatewayConfig::default()),
        };

        GatewayServer::new(data).router()
    }
}

#[async_trait]
impl SportsApi for FakeUpstream {
    async fn get_json(&self, query: &UpstreamQuery) -> Result<Value, UpstreamError> {
        self.queries.lock().unwrap().push(query.clone());

        self.bodies
            .get(query.path)
            .cloned()
            .ok_or_else(|| UpstreamError::Status {
                status: 502,
                target: query.path.to_string(),
            })
    }
}

#[async_trait]
impl ImageFetcher for FakeUpstream {
    async fn fetch_image(&self, url: &str) -> Result<RelayedImage, UpstreamError> {
        self.images.get(url).cloned().ok_or_else(|| UpstreamError::Status {
            status: 404,
            target: url.to_string(),
        })
    }
}

pub async fn send(router: Router, uri: &str) -> Response<Body> {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
