mod company;
mod shared;

pub use company::{ICompanyRepo, InMemoryCompanyRepo, PostgresCompanyRepo};
pub use shared::repo::{RepoError, RepoErrorKind};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub companies: Arc<dyn ICompanyRepo>,
    pool: Option<PgPool>,
}

impl Repos {
    pub fn create_postgres(pool: PgPool) -> Self {
        Self {
            companies: Arc::new(PostgresCompanyRepo::new(pool.clone())),
            pool: Some(pool),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            companies: Arc::new(InMemoryCompanyRepo::new()),
            pool: None,
        }
    }

    /// Closes the connection pool, waiting for checked out connections
    /// to be returned.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
