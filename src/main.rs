use boring_me::suggest::GeminiSuggester;
use boring_me::{resolve_data_dir, router, AppState, Store};
use std::{env, net::SocketAddr, sync::Arc};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let store = Store::open(resolve_data_dir()).await?;

    let suggester = GeminiSuggester::from_env();
    if !suggester.has_api_key() {
        warn!("no Gemini API key configured; task suggestions will be unavailable");
    }

    let state = AppState::new(store, Arc::new(suggester));
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
