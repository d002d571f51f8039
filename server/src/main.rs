use server::fixtures::Fixtures;
use server::routes;
use server::state::AppState;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let static_dir =
        std::env::var("STATIC_DIR").unwrap_or_else(|_| "client/dist".into());

    let state = AppState::new(Fixtures::dev(), static_dir);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "tiller harness listening");
    axum::serve(listener, app).await.expect("server failed");
}
