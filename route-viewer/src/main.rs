use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use route_viewer::autocomplete::StationDirectory;
use route_viewer::backend::BackendClient;
use route_viewer::config::ViewerConfig;
use route_viewer::timeline::RailwayPalette;
use route_viewer::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ViewerConfig::from_env();
    info!(
        api = %config.api_base_url,
        layout = ?config.layout,
        stale_policy = ?config.stale_policy,
        "starting route viewer"
    );

    let backend = BackendClient::new(config.backend()).expect("Failed to create search client");

    // Autocomplete degrades to plain inputs if this fails
    let stations = StationDirectory::load(&backend).await;

    let addr = config.bind_addr;
    let state = AppState::new(backend, stations, RailwayPalette::tokyo(), config);
    let app = create_router(state);

    let listener = TcpListener::bind(addr).await.expect("Failed to bind listener");
    info!("listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    info!("route viewer stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
