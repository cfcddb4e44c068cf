mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::auth::JwtValidator;
use crate::features::geocoding::{routes as geocoding_routes, GeocodingService, NominatimClient};
use crate::features::health::{routes as health_routes, HealthState};
use crate::features::prayer_times::clients::JakimClient;
use crate::features::prayer_times::routes as prayer_times_routes;
use crate::features::prayer_times::services::{
    FallbackTable, PrayerTimeCache, PrayerTimeFetcher, PrayerTimeService, TokioSleeper,
};
use crate::features::progress::{routes as progress_routes, ProgressService};
use crate::features::zones::{routes as zones_routes, ZoneResolver};
use crate::shared::clock::{Clock, SystemClock};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use std::time::Instant;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    let started_at = Instant::now();

    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}, environment={}",
        worker_threads,
        std::process::id(),
        config.app.environment
    );
    tracing::info!("Configuration loaded successfully");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // Zones
    let zone_resolver = Arc::new(ZoneResolver::jakim().map_err(|e| anyhow::anyhow!(e))?);
    tracing::info!(
        "Zone resolver initialized with {} zones",
        zone_resolver.zones().len()
    );

    // Prayer times: cache -> JAKIM (with retries) -> fallback table
    let jakim_client = Arc::new(
        JakimClient::new(&config.jakim.base_url, &config.app.user_agent)
            .map_err(|e| anyhow::anyhow!("Failed to build JAKIM client: {}", e))?,
    );
    let fetcher = PrayerTimeFetcher::new(
        jakim_client,
        Arc::new(TokioSleeper),
        Arc::clone(&zone_resolver),
        &config.jakim,
    );
    let prayer_time_service = Arc::new(PrayerTimeService::new(
        Arc::clone(&zone_resolver),
        fetcher,
        PrayerTimeCache::new(config.cache.prayer_times_ttl, Arc::clone(&clock)),
        FallbackTable::new(Arc::clone(&zone_resolver)),
        Arc::clone(&clock),
    ));
    tracing::info!(
        "Prayer time service initialized (upstream: {}, timeout: {:?}, retries: {}, cache ttl: {:?})",
        config.jakim.base_url,
        config.jakim.timeout,
        config.jakim.retries,
        config.cache.prayer_times_ttl
    );

    // Geocoding proxy
    let nominatim_client = Arc::new(
        NominatimClient::new(&config.nominatim.base_url, &config.app.user_agent)
            .map_err(|e| anyhow::anyhow!("Failed to build Nominatim client: {}", e))?,
    );
    let geocoding_service = Arc::new(GeocodingService::new(
        nominatim_client,
        config.nominatim.timeout,
    ));
    tracing::info!("Geocoding service initialized");

    // Auth + progress
    let jwt_validator = Arc::new(JwtValidator::new(
        &config.auth.jwt_secret,
        config.auth.jwt_leeway,
    ));
    let progress_service = Arc::new(ProgressService::new(
        Arc::clone(&zone_resolver),
        Arc::clone(&clock),
    ));
    tracing::info!("Auth configuration initialized");

    let health_state = Arc::new(HealthState {
        started_at,
        environment: config.app.environment.clone(),
        prayer_times: Arc::clone(&prayer_time_service),
        clock: Arc::clone(&clock),
    });

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Build swagger router
    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Protected routes (require JWT authentication)
    let protected_routes = Router::new()
        .merge(progress_routes::routes(progress_service))
        .route_layer(axum::middleware::from_fn_with_state(
            jwt_validator,
            middleware::auth_middleware,
        ));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(health_routes::routes(health_state))
        .merge(zones_routes::routes(Arc::clone(&zone_resolver)))
        .merge(prayer_times_routes::routes(prayer_time_service))
        .merge(geocoding_routes::routes(geocoding_service));

    let app = Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
