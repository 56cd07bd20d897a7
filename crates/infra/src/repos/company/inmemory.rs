use super::ICompanyRepo;
use crate::repos::shared::{
    inmemory_repo::*,
    repo::{ensure_single_row_affected, expect_single_row, RepoError, RepoErrorKind},
};
use company_registry_domain::{Company, ID};

pub struct InMemoryCompanyRepo {
    companies: std::sync::Mutex<Vec<Company>>,
}

impl InMemoryCompanyRepo {
    pub fn new() -> Self {
        Self {
            companies: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Seeds the repo without any uniqueness checks
    #[cfg(test)]
    pub(crate) fn with_companies(companies: Vec<Company>) -> Self {
        Self {
            companies: std::sync::Mutex::new(companies),
        }
    }
}

impl Default for InMemoryCompanyRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for InMemoryCompanyRepo {
    async fn insert(&self, company: &Company) -> Result<(), RepoError> {
        if insert(company, &self.companies) == 0 {
            return Err(RepoError::new(
                RepoErrorKind::Database,
                format!(
                    "duplicate key value violates unique constraint: id {} already exists",
                    company.id
                ),
            ));
        }
        Ok(())
    }

    async fn save(&self, company: &Company) -> Result<(), RepoError> {
        ensure_single_row_affected(save(company, &self.companies))
    }

    async fn delete(&self, company_id: &ID) -> Result<(), RepoError> {
        ensure_single_row_affected(delete(company_id, &self.companies))
    }

    async fn find(&self, company_id: &ID) -> Result<Company, RepoError> {
        expect_single_row(find(company_id, &self.companies))
    }
}
