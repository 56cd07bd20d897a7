use super::ICompanyRepo;
use crate::repos::shared::repo::{
    ensure_single_row_affected, ensure_single_row_inserted, expect_single_row, RepoError,
};
use company_registry_domain::{Company, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresCompanyRepo {
    pool: PgPool,
}

impl PostgresCompanyRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRaw {
    id: Uuid,
    name: String,
    description: String,
    amount_of_employees: i32,
    registered: bool,
    #[sqlx(rename = "type")]
    company_type: String,
}

impl From<CompanyRaw> for Company {
    fn from(e: CompanyRaw) -> Self {
        Self {
            id: e.id.into(),
            name: e.name,
            description: e.description,
            amount_of_employees: e.amount_of_employees,
            registered: e.registered,
            company_type: e.company_type,
        }
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for PostgresCompanyRepo {
    async fn insert(&self, company: &Company) -> Result<(), RepoError> {
        let rows_affected = sqlx::query(
            r#"
            INSERT INTO company(id, name, description, amount_of_employees, registered, "type")
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(company.id.inner_ref())
        .bind(&company.name)
        .bind(&company.description)
        .bind(company.amount_of_employees)
        .bind(company.registered)
        .bind(&company.company_type)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert company: {:?}. DB returned error: {:?}",
                company, e
            );
            e
        })?
        .rows_affected();

        ensure_single_row_inserted(rows_affected)
    }

    async fn save(&self, company: &Company) -> Result<(), RepoError> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE company
            SET name = $2,
            description = $3,
            amount_of_employees = $4,
            registered = $5,
            "type" = $6
            WHERE id = $1
            "#,
        )
        .bind(company.id.inner_ref())
        .bind(&company.name)
        .bind(&company.description)
        .bind(company.amount_of_employees)
        .bind(company.registered)
        .bind(&company.company_type)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save company: {:?}. DB returned error: {:?}",
                company, e
            );
            e
        })?
        .rows_affected();

        ensure_single_row_affected(rows_affected)
    }

    async fn delete(&self, company_id: &ID) -> Result<(), RepoError> {
        let rows_affected = sqlx::query(
            r#"
            DELETE FROM company
            WHERE id = $1
            "#,
        )
        .bind(company_id.inner_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete company with id: {:?} failed. DB returned error: {:?}",
                company_id, e
            );
            e
        })?
        .rows_affected();

        ensure_single_row_affected(rows_affected)
    }

    async fn find(&self, company_id: &ID) -> Result<Company, RepoError> {
        let companies: Vec<CompanyRaw> = sqlx::query_as(
            r#"
            SELECT id, name, description, amount_of_employees, registered, "type"
            FROM company
            WHERE id = $1
            ORDER BY id
            "#,
        )
        .bind(company_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find company with id: {:?} failed. DB returned error: {:?}",
                company_id, e
            );
            e
        })?;

        expect_single_row(companies).map(Company::from)
    }
}
