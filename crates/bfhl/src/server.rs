use crate::prelude::*;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bfhl_core::api::{self, ApiResponse, BFHL_PATH, HEALTH_PATH};
use bfhl_core::identity::Clock;
use bfhl_core::record::Processor;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "BFHL_HOST", default_value = "0.0.0.0")]
    host: String,
}

/// Wraps an [`ApiResponse`] so axum can send it.
struct Reply(ApiResponse);

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.body.is_null() {
            status.into_response()
        } else {
            (status, Json(self.0.body)).into_response()
        }
    }
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);
    let processor = Arc::new(global.processor());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::AddrInUse => Error::AddrInUse(options.port),
            _ => Error::Bind {
                addr: addr.clone(),
                reason: e.to_string(),
            },
        })?;

    log::info!("Server running at http://{addr}/");
    log::info!("API endpoint: http://{addr}{BFHL_PATH}");
    log::info!("Health check: http://{addr}{HEALTH_PATH}");

    axum::serve(listener, router(processor))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    log::info!("Process terminated");

    Ok(())
}

/// Build the application router around a shared processor.
pub fn router<C: Clock + 'static>(processor: Arc<Processor<C>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(HEALTH_PATH, get(health_handler).fallback(fallback_handler))
        .route(BFHL_PATH, post(bfhl_handler::<C>).fallback(fallback_handler))
        .fallback(fallback_handler)
        .layer(cors)
        .with_state(processor)
}

async fn health_handler() -> Reply {
    log::debug!("GET {HEALTH_PATH}");
    Reply(api::health())
}

async fn bfhl_handler<C: Clock + 'static>(
    State(processor): State<Arc<Processor<C>>>,
    body: Bytes,
) -> Reply {
    let response = api::handle_bfhl(processor.as_ref(), &body);
    log::debug!("POST {BFHL_PATH} -> {}", response.status);
    Reply(response)
}

async fn fallback_handler(method: Method, uri: axum::http::Uri) -> Reply {
    log::debug!("{method} {uri} -> fallback");

    if method == Method::OPTIONS {
        Reply(ApiResponse::ok(serde_json::Value::Null))
    } else {
        Reply(api::not_found())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for SIGINT: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => log::info!("SIGINT received, shutting down gracefully"),
        _ = terminate => log::info!("SIGTERM received, shutting down gracefully"),
    }
}
