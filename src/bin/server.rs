use std::{env, fs::OpenOptions, net::SocketAddr, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use axum::middleware;
#[cfg(debug_assertions)]
use gelir_gider::logging_middleware;
#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{
    EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt,
};

use gelir_gider::{ApiClient, AppState, PaginationConfig, build_router, graceful_shutdown};

/// The web server for the Gelir/Gider admin panel.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The base URL of the REST API that stores the data.
    #[arg(long, env = "API_URL", default_value = "http://127.0.0.1:8000")]
    api_url: String,

    /// The port to serve the admin panel from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Set cookies without the `Secure` attribute.
    ///
    /// The server speaks plain HTTP. Browsers only accept secure cookies over
    /// HTTP from localhost, so use this flag when the panel is reached at
    /// another address without a TLS terminating proxy in front of it.
    #[arg(long, env = "INSECURE_COOKIES")]
    insecure_cookies: bool,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let secret = env::var("SECRET").expect("The environment variable 'SECRET' must be set");

    let api = ApiClient::new(&args.api_url).expect("Could not create the API client");
    let app_state = AppState::new(&secret, api, PaginationConfig::default())
        .with_secure_cookies(!args.insecure_cookies);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(app_state));

    #[cfg(debug_assertions)]
    let router = router
        .layer(middleware::from_fn(logging_middleware))
        .layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {addr}, using the API at {}", args.api_url);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Server stopped unexpectedly");
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file))
        .with_filter(filter::LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged where they are handled.
        .on_failure(());

    router.layer(tracing_layer)
}
