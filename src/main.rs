use std::sync::Arc;

use anyhow::Result;
use quotery::application::dto::HrefBuilder;
use quotery::application::services::{ApplicationDeps, ApplicationServices};
use quotery::config::AppConfig;
use quotery::infrastructure::{
    database,
    repositories::{
        PostgresAuthorReadRepository, PostgresAuthorWriteRepository,
        PostgresCategoryReadRepository, PostgresCategoryWriteRepository,
        PostgresQuoteReadRepository, PostgresQuoteWriteRepository, PostgresSlugCounterStore,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use quotery::presentation::http::{routes::build_router, state::HttpState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let author_read = Arc::new(PostgresAuthorReadRepository::new(pool.clone()));
    let category_read = Arc::new(PostgresCategoryReadRepository::new(pool.clone()));

    let deps = ApplicationDeps {
        author_write_repo: Arc::new(PostgresAuthorWriteRepository::new(pool.clone())),
        author_read_repo: author_read.clone(),
        author_slug_index: author_read,
        category_write_repo: Arc::new(PostgresCategoryWriteRepository::new(pool.clone())),
        category_read_repo: category_read.clone(),
        category_slug_index: category_read,
        quote_write_repo: Arc::new(PostgresQuoteWriteRepository::new(pool.clone())),
        quote_read_repo: Arc::new(PostgresQuoteReadRepository::new(pool.clone())),
        slug_counters: Arc::new(PostgresSlugCounterStore::new(pool.clone())),
        clock: Arc::new(SystemClock),
        slugger: Arc::new(DefaultSlugGenerator),
        hrefs: HrefBuilder::new(config.public_base_url()),
    };

    let services = Arc::new(ApplicationServices::new(deps));
    let state = HttpState { services };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
