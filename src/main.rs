use std::sync::Arc;

use mentor_profile::api::router;
use mentor_profile::config::AppConfig;
use mentor_profile::graphql::GraphqlHttpClient;
use mentor_profile::state::AppState;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "mentor_profile=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;
    let client = GraphqlHttpClient::new(config.graphql.clone())?;
    info!("using GraphQL backend at {}", config.graphql.endpoint);

    let addr = config.bind_addr;
    let state = AppState {
        config,
        client: Arc::new(client),
    };

    let app = router(state);

    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
