//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create Axum Router with the dispatch handler
//! - Wire up middleware (tracing, request ID, request timeout)
//! - Bind server to listener and drain on shutdown
//! - Route → validate → compute → format, once per request

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::compute::{Compute, NativeCompute};
use crate::config::ServiceConfig;
use crate::http::argument::{validate, NumericArgument};
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::http::response::{ApiResponse, Computed};
use crate::resilience::ComputeRunner;
use crate::routing::{RouteMatch, Router as RouteTable};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub runner: ComputeRunner,
}

/// HTTP server for the numeric API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a server backed by the native computation provider.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_compute(config, Arc::new(NativeCompute))
    }

    /// Create a server backed by `compute`.
    pub fn with_compute(config: ServiceConfig, compute: Arc<dyn Compute>) -> Self {
        let state = AppState {
            routes: Arc::new(RouteTable::standard()),
            runner: ComputeRunner::new(compute, &config.compute),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            compute_timeout_ms = self.config.compute.timeout_ms,
            max_concurrent = self.config.compute.max_concurrent,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Route, validate, compute, format.
async fn dispatch(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> ApiResponse {
    let path = uri.path();
    let request_id = request_id(&headers);

    tracing::info!(request_id = %request_id, path = %path, "Request received");

    let (kind, token) = match state.routes.route(path) {
        RouteMatch::Found { kind, token } => (kind, token),
        RouteMatch::NoMatch => {
            tracing::debug!(request_id = %request_id, path = %path, "No route matched");
            return ApiResponse::NotFound;
        }
    };

    // Root is the only route without a computation.
    let Some(computation) = kind.computation() else {
        return ApiResponse::Greeting;
    };

    let number = match validate(token) {
        NumericArgument::Valid(n) => n,
        NumericArgument::Invalid(reason) => {
            tracing::debug!(request_id = %request_id, token = %token, ?reason, "Rejected argument");
            return ApiResponse::InvalidNumber;
        }
    };

    match state.runner.evaluate(computation, number).await {
        Ok(value) => ApiResponse::Computed(Computed { number, value }),
        Err(e) => {
            tracing::error!(request_id = %request_id, operation = %computation, number, error = %e, "Computation failed");
            ApiResponse::ComputeFailed(e)
        }
    }
}
