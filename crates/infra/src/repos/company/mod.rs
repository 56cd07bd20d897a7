mod inmemory;
mod postgres;

pub use inmemory::InMemoryCompanyRepo;
pub use postgres::PostgresCompanyRepo;

use crate::repos::shared::repo::RepoError;
use company_registry_domain::{Company, ID};

/// Storage for `Company`s. Every operation addresses exactly one row
/// by its id and fails when that is not what happened.
#[async_trait::async_trait]
pub trait ICompanyRepo: Send + Sync {
    async fn insert(&self, company: &Company) -> Result<(), RepoError>;
    /// Replaces all mutable fields of the stored `Company` with the same id
    async fn save(&self, company: &Company) -> Result<(), RepoError>;
    async fn delete(&self, company_id: &ID) -> Result<(), RepoError>;
    async fn find(&self, company_id: &ID) -> Result<Company, RepoError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repos::shared::repo::RepoErrorKind, Config, RegistryContext};

    /// Creates an inmemory context and a postgres context when
    /// `DATABASE_URL` is set
    async fn create_contexts() -> Vec<RegistryContext> {
        let mut contexts = vec![RegistryContext::create_inmemory()];
        if std::env::var("DATABASE_URL").is_ok() {
            let mut config = Config::new();
            config.postgres.migrations_dir_path =
                concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations").into();
            contexts.push(
                RegistryContext::create(config)
                    .await
                    .expect("To connect to postgres"),
            );
        }
        contexts
    }

    fn acme() -> Company {
        Company::new(None, "Acme".into(), "".into(), 5, true, "LLC".into())
    }

    #[tokio::test]
    async fn create_and_find() {
        for ctx in create_contexts().await {
            let company = acme();

            assert!(ctx.repos.companies.insert(&company).await.is_ok());

            let res = ctx.repos.companies.find(&company.id).await.unwrap();
            assert_eq!(res, company);
        }
    }

    #[tokio::test]
    async fn insert_with_existing_id_fails() {
        for ctx in create_contexts().await {
            let company = acme();
            assert!(ctx.repos.companies.insert(&company).await.is_ok());

            let mut duplicate = company.clone();
            duplicate.name = "Other".into();
            let err = ctx.repos.companies.insert(&duplicate).await.unwrap_err();
            assert_eq!(err.kind(), RepoErrorKind::Database);

            // Uniqueness keeps lookups unambiguous
            let res = ctx.repos.companies.find(&company.id).await.unwrap();
            assert_eq!(res, company);
        }
    }

    #[tokio::test]
    async fn update() {
        for ctx in create_contexts().await {
            let mut company = acme();
            assert!(ctx.repos.companies.insert(&company).await.is_ok());

            company.name = "Acme Corp".into();
            company.description = "Makes anvils".into();
            company.amount_of_employees = 42;
            company.registered = false;
            company.company_type = "Corporation".into();

            assert!(ctx.repos.companies.save(&company).await.is_ok());

            let res = ctx.repos.companies.find(&company.id).await.unwrap();
            assert_eq!(res, company);
        }
    }

    #[tokio::test]
    async fn update_unknown_company_affects_no_rows() {
        for ctx in create_contexts().await {
            let company = acme();
            let err = ctx.repos.companies.save(&company).await.unwrap_err();
            assert_eq!(err.kind(), RepoErrorKind::NotFound);
            assert_eq!(err.to_string(), "expected to affect 1 row, affected 0");
        }
    }

    #[tokio::test]
    async fn delete() {
        for ctx in create_contexts().await {
            let company = acme();
            assert!(ctx.repos.companies.insert(&company).await.is_ok());

            assert!(ctx.repos.companies.delete(&company.id).await.is_ok());

            let err = ctx.repos.companies.find(&company.id).await.unwrap_err();
            assert_eq!(err.kind(), RepoErrorKind::NotFound);

            // Deleting twice affects no rows the second time
            let err = ctx.repos.companies.delete(&company.id).await.unwrap_err();
            assert_eq!(err.kind(), RepoErrorKind::NotFound);
        }
    }

    #[tokio::test]
    async fn find_unknown_company() {
        for ctx in create_contexts().await {
            let err = ctx.repos.companies.find(&ID::new()).await.unwrap_err();
            assert_eq!(err.kind(), RepoErrorKind::NotFound);
            assert_eq!(err.to_string(), "company not found");
        }
    }

    #[tokio::test]
    async fn find_with_many_matching_rows_is_ambiguous() {
        let company = acme();
        let repo = InMemoryCompanyRepo::with_companies(vec![company.clone(), company.clone()]);

        let err = repo.find(&company.id).await.unwrap_err();
        assert_eq!(err.kind(), RepoErrorKind::AmbiguousResult);
        assert_eq!(err.to_string(), "more than one company found");
    }
}
