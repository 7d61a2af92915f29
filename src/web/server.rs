use axum::{
    http::{header, Method},
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory of a frontend to serve at `/`, if any
    pub static_dir: Option<String>,
    pub enable_cors: bool,
    pub max_sessions: usize,
    /// Largest graph a session may hold
    pub max_vertices: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            static_dir: None,
            enable_cors: true,
            max_sessions: 1000,
            max_vertices: 2000,
        }
    }
}

/// Build the application router for a configuration
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state =
        AppState::with_max_sessions(config.max_sessions).with_max_vertices(config.max_vertices);

    let mut app = create_router();
    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }
    let mut app = app.with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app = app.layer(ServiceBuilder::new().layer(cors).into_inner());
    }

    app
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    log::info!("all-pairs server listening on http://{}", addr);
    if let Some(dir) = &config.static_dir {
        log::info!("serving static files from {}", dir);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
