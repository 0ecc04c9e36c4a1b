// src/main.rs
use anyhow::Result;
use inkpost::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        storage::ImageStore,
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, Ports, Repositories},
};
use inkpost::config::AppConfig;
use inkpost::infrastructure::{
    database,
    repositories::{PostgresCategoryRepository, PostgresPostRepository, PostgresUserRepository},
    security::{Argon2PasswordHasher, BiscuitTokenManager},
    storage::LocalImageStore,
    time::SystemClock,
    util::RegexSlugGenerator,
};
use inkpost::presentation::http::{
    routes::{RouterConfig, build_router},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const MAX_DB_CONNECTIONS: u32 = 16;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), MAX_DB_CONNECTIONS).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database migrations applied");

    let repos = Repositories {
        posts: Arc::new(PostgresPostRepository::new(pool.clone())),
        categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        users: Arc::new(PostgresUserRepository::new(pool)),
    };

    let image_store = LocalImageStore::new(config.upload_dir());
    image_store.ensure_root().await?;

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let image_store: Arc<dyn ImageStore> = Arc::new(image_store);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(RegexSlugGenerator);

    let ports = Ports {
        password_hasher,
        token_manager,
        image_store,
        clock,
        slugger,
    };

    let services = Arc::new(ApplicationServices::new(
        repos,
        ports,
        config.post_ownership(),
    ));
    let state = HttpState { services };

    let app = build_router(state, RouterConfig::from(&config));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(policy = ?config.post_ownership(), "listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
