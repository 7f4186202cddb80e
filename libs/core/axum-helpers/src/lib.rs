//! # Axum Helpers
//!
//! Shared HTTP plumbing for the catalog services.
//!
//! - **[`errors`]**: [`AppError`], the single place failures become HTTP responses
//! - **[`extractors`]**: lenient request extractors ([`OptionalJson`], [`IdQuery`])
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(api_routes)?.merge(health_router(app_info!()));
//! create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{IdQuery, OptionalJson};
pub use http::{cors_layer_from_env, security_headers};
pub use server::{
    HealthCheckFuture, ShutdownCoordinator, create_production_app, create_router, health_router,
    run_health_checks, shutdown_signal,
};
