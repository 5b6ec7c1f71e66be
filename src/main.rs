//! Accidents server - entry point.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use accidents::adapters::auth::{HmacPasswordEncoder, InMemorySessionStore, StaticUserStore};
use accidents::adapters::http::{app_router, AppServices, SessionCookie};
use accidents::adapters::memory::{
    InMemoryAccidentRepository, InMemoryAccidentTypeRepository, InMemoryDatabase,
    InMemoryRuleRepository,
};
use accidents::adapters::postgres::{
    self, PostgresAccidentRepository, PostgresAccidentTypeRepository, PostgresRuleRepository,
};
use accidents::application::{
    AccidentService, AccidentTypeService, LoginHandler, RuleService,
};
use accidents::config::{AppConfig, ConfigError, DatabaseConfig, StorageBackend};
use accidents::ports::{AccidentRepository, AccidentTypeRepository, RuleRepository};

const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid listen address: {0}")]
    Address(#[from] std::net::AddrParseError),

    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

struct Repositories {
    accidents: Arc<dyn AccidentRepository>,
    accident_types: Arc<dyn AccidentTypeRepository>,
    rules: Arc<dyn RuleRepository>,
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    init_tracing(&config);
    tracing::info!(environment = ?config.server.environment, "Starting accidents server");

    let repos = open_storage(&config.database).await?;

    let encoder = Arc::new(HmacPasswordEncoder::new(config.auth.password_pepper.clone()));
    let roles = config.auth.role_list().map_err(ConfigError::from)?;
    let users = StaticUserStore::new().with_user(
        encoder.as_ref(),
        config.auth.username.clone(),
        &config.auth.password,
        roles,
    );
    tracing::info!(
        accounts = users.user_count(),
        username = %config.auth.username,
        "User store ready"
    );
    let sessions = Arc::new(InMemorySessionStore::new(config.auth.session_idle_timeout()));
    spawn_session_purge(sessions.clone());

    let services = AppServices {
        accidents: Arc::new(AccidentService::new(
            repos.accidents,
            repos.accident_types.clone(),
        )),
        accident_types: Arc::new(AccidentTypeService::new(repos.accident_types)),
        rules: Arc::new(RuleService::new(repos.rules)),
        login: Arc::new(LoginHandler::new(
            Arc::new(users),
            encoder,
            sessions.clone(),
        )),
        sessions,
    };

    let app = app_router(
        services,
        SessionCookie::new(config.auth.session_cookie.clone()),
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn open_storage(config: &DatabaseConfig) -> Result<Repositories, StartupError> {
    match config.storage {
        StorageBackend::Postgres => {
            let pool = postgres::connect(config).await?;
            if config.run_migrations {
                postgres::run_migrations(&pool).await?;
            }
            Ok(Repositories {
                accidents: Arc::new(PostgresAccidentRepository::new(pool.clone())),
                accident_types: Arc::new(PostgresAccidentTypeRepository::new(pool.clone())),
                rules: Arc::new(PostgresRuleRepository::new(pool)),
            })
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            let db = InMemoryDatabase::seeded().await;
            Ok(Repositories {
                accidents: Arc::new(InMemoryAccidentRepository::new(db.clone())),
                accident_types: Arc::new(InMemoryAccidentTypeRepository::new(db.clone())),
                rules: Arc::new(InMemoryRuleRepository::new(db)),
            })
        }
    }
}

fn spawn_session_purge(sessions: Arc<InMemorySessionStore>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let purged = sessions.purge_expired().await;
            if purged > 0 {
                tracing::debug!(purged, "Purged expired sessions");
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
