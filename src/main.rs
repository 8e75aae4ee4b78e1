use slotpick_api::config;
use slotpick_api::database::Database;
use slotpick_api::handlers::{self, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL / DB_* variables.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Slotpick API in {:?} mode", config.environment);

    // Connectivity check before accepting traffic. A dead database at startup
    // is fatal: exit non-zero so supervisors notice.
    let database = match Database::connect(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Database connection error: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = database.ping().await {
        tracing::error!("Database connectivity check failed: {}", e);
        std::process::exit(1);
    }
    tracing::info!("Connected to database successfully");

    let app = handlers::router(AppState {
        pool: database.pool().clone(),
    });

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Slotpick API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
