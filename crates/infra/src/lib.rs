mod config;
mod repos;

use anyhow::Context;
pub use config::{Config, PoolConfig, PostgresConfig};
pub use repos::{
    ICompanyRepo, InMemoryCompanyRepo, PostgresCompanyRepo, RepoError, RepoErrorKind, Repos,
};
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use std::path::Path;
use tracing::info;

#[derive(Clone)]
pub struct RegistryContext {
    pub repos: Repos,
    pub config: Config,
}

impl RegistryContext {
    /// Connects to postgres and runs the migrations. The context is only
    /// returned when the schema is up to date.
    pub async fn create(config: Config) -> anyhow::Result<Self> {
        let pool = connect(&config.postgres).await?;
        run_migration(&pool, &config.postgres.migrations_dir_path).await?;

        Ok(Self {
            repos: Repos::create_postgres(pool),
            config,
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<RegistryContext> {
    RegistryContext::create(Config::new()).await
}

fn connect_options(config: &PostgresConfig) -> anyhow::Result<PgConnectOptions> {
    match &config.connection_string {
        Some(connection_string) => connection_string
            .parse::<PgConnectOptions>()
            .context("Invalid DATABASE_URL"),
        None => Ok(PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.dbname)
            .ssl_mode(PgSslMode::Disable)),
    }
}

async fn connect(config: &PostgresConfig) -> anyhow::Result<PgPool> {
    let options = connect_options(config)?;

    info!("DB CHECKING CONNECTION ...");
    let pool = PgPoolOptions::new()
        .max_connections(config.pool.max_open_conns)
        .min_connections(config.pool.max_idle_conns)
        .connect_with(options)
        .await
        .context("Postgres credentials must be set and valid")?;
    info!("DB CHECKING CONNECTION ... [done]");

    Ok(pool)
}

/// Applies all pending migrations found in `migrations_dir_path`.
/// Having nothing to apply is not an error.
pub async fn run_migration(pool: &PgPool, migrations_dir_path: &Path) -> anyhow::Result<()> {
    let migrator = Migrator::new(migrations_dir_path)
        .await
        .with_context(|| {
            format!(
                "Unable to read migrations from: {}",
                migrations_dir_path.display()
            )
        })?;
    migrator
        .run(pool)
        .await
        .context("Unable to run migrations")?;
    info!(
        "Migrations from {} are applied",
        migrations_dir_path.display()
    );
    Ok(())
}
