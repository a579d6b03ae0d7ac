use adminkit::rest::{serve, RequestState};
use compliance::controllers::AppStores;
use compliance::data;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() {
    let stores = AppStores::new();
    data::seed(&stores);
    let state = RequestState::new(Arc::new(stores.hub()));

    let addr: SocketAddr = std::env::var("COMPLIANCE_BIND")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()
        .unwrap_or_else(|err| {
            adminkit::error!("invalid COMPLIANCE_BIND: {}", err);
            std::process::exit(2);
        });

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    if let Err(err) = serve(state, addr, None, Some(CorsLayer::permissive()), shutdown_rx).await {
        adminkit::error!("server failed: {}", err);
        std::process::exit(1);
    }
}
