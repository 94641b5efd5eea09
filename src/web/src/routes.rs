use crate::common::default_handler::default_handler;
use crate::GatewayAppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<GatewayAppData> {
        Router::<GatewayAppData>::new()
            .merge(crate::fixtures::routes::routes())
            .merge(crate::rounds::routes::routes())
            .merge(crate::r#match::routes::routes())
            .merge(crate::proxy::routes::routes())
            .fallback(default_handler)
    }
}
