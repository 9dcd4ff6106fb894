use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::config::EngineConfig;
use crate::web::api::{create_router, AppState};
use crate::RouteEngine;

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub enable_cors: bool,
    /// Start with the bundled Gujarat network instead of an empty one
    pub load_preset: bool,
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            static_dir: "web".to_string(),
            enable_cors: true,
            load_preset: true,
            engine: EngineConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Builds the engine the server starts with
    pub fn build_engine(&self) -> RouteEngine {
        if self.load_preset {
            RouteEngine::gujarat_preset(self.engine.clone())
        } else {
            RouteEngine::with_config(Default::default(), self.engine.clone())
        }
    }
}

/// Assemble the router: API routes, static frontend, optional CORS
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .merge(create_router())
        // Static file serving for the web frontend
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT])
            .allow_headers([header::CONTENT_TYPE]);

        app = app.layer(ServiceBuilder::new().layer(cors).into_inner());
    }

    app
}

/// Start the web server with the given configuration
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(config.build_engine());
    let app = build_app(state, &config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("City router listening on http://{}", addr);
    info!("Serving static files from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
