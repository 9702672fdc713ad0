use todo_api::{config, routes, state};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_api=info,tower_http=info".into()),
        )
        .init();

    let config = config::Config::from_env();

    let state = state::AppState::new();

    let app = routes::routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .expect("failed to bind listener");

    tracing::info!("listening on http://{}", config.addr());

    axum::serve(listener, app).await.expect("server error");
}
