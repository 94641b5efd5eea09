mod common;
mod config;
mod error;
mod fixtures;
mod r#match;
mod proxy;
mod rounds;
mod routes;
mod upstream;

#[cfg(test)]
mod fake;

pub use config::GatewayConfig;
pub use error::{ApiError, ApiResult};
pub use upstream::{
    ApiSportsClient, ImageFetcher, RelayedImage, SportsApi, UpstreamError, UpstreamQuery,
};

use crate::routes::ServerRoutes;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

pub struct GatewayServer {
    data: GatewayAppData,
}

impl GatewayServer {
    pub fn new(data: GatewayAppData) -> Self {
        GatewayServer { data }
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET]);

        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    }))
                    .layer(cors),
            )
            .with_state(self.data.clone())
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let port = self.data.config.port;
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
            e
        })?;

        info!("listen at: http://localhost:{}", port);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("gateway stopped");

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

pub struct GatewayAppData {
    pub api: Arc<dyn SportsApi>,
    pub images: Arc<dyn ImageFetcher>,
    pub config: Arc<GatewayConfig>,
}

impl GatewayAppData {
    pub fn new(config: GatewayConfig) -> Result<Self, UpstreamError> {
        let client = Arc::new(ApiSportsClient::new(&config)?);

        Ok(GatewayAppData {
            api: client.clone(),
            images: client,
            config: Arc::new(config),
        })
    }
}

impl Clone for GatewayAppData {
    fn clone(&self) -> Self {
        GatewayAppData {
            api: Arc::clone(&self.api),
            images: Arc::clone(&self.images),
            config: Arc::clone(&self.config),
        }
    }
}
