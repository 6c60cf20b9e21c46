use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Router,
};
use folio_core_contact_contracts::ContactFeatureService;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::middlewares::rate_limit::RateLimiter;

mod middlewares;
mod models;
mod routes;

pub use crate::middlewares::{client_ip::RealIpConfig, rate_limit::RateLimitConfig};

/// Maximum accepted request body size.
const REQUEST_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: SocketAddr,
    /// Origins allowed by the CORS layer. Empty allows any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: RateLimitConfig,
    pub real_ip: Option<Arc<RealIpConfig>>,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactFeatureService,
{
    pub fn new(contact: Contact, config: RestServerConfig) -> Self {
        Self { contact, config }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.config.addr;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind to {addr}"))?;
        self.serve_on(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn serve_on(self, listener: TcpListener) -> anyhow::Result<()> {
        let router = self.router();
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let Self { contact, config } = self;

        let cors = cors_layer(&config.allowed_origins);
        let limiter = Arc::new(RateLimiter::new(config.rate_limit));

        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::contact::router(contact.into()))
            .layer(DefaultBodyLimit::max(REQUEST_BODY_LIMIT));

        let router = middlewares::rate_limit::add(router, limiter);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        let router = middlewares::client_ip::add(router, config.real_ip);
        let router = middlewares::panic_handler::add(router);
        router.layer(cors)
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .inspect_err(|_| warn!(%origin, "ignoring invalid cors origin"))
                .ok()
        })
        .collect::<Vec<_>>();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(origins))
    }
}
