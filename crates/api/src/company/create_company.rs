use crate::{
    error::RegistryError,
    shared::{
        auth::protect_route,
        guard::Guard,
        response::json_response,
        usecase::{execute, UseCase},
    },
};
use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use company_registry_api_structs::create_company::*;
use company_registry_domain::{Company, CompanyValidationError};
use company_registry_infra::{RegistryContext, RepoError};
use tracing::info;

pub async fn create_company_controller(
    http_req: HttpRequest,
    body: web::Bytes,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    protect_route(&http_req, &ctx)?;
    let body: RequestBody = Guard::against_malformed_body(&body)?;
    info!("CreateCompany request: {:?}", body);

    let usecase = CreateCompanyUseCase {
        name: body.name,
        description: body.description,
        amount_of_employees: body.amount_of_employees,
        registered: body.registered,
        company_type: body.company_type,
    };

    execute(usecase, &ctx)
        .await
        .map(|company| {
            info!("CreateCompany created: {}", company.id);
            json_response(
                StatusCode::OK,
                &APIResponse::new("Company created", company),
            )
        })
        .map_err(RegistryError::from)
}

#[derive(Debug)]
pub struct CreateCompanyUseCase {
    pub name: String,
    pub description: String,
    pub amount_of_employees: i32,
    pub registered: bool,
    pub company_type: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidCompany(CompanyValidationError),
    Storage(RepoError),
}

impl From<UseCaseError> for RegistryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCompany(e) => Self::BadClientData(e.to_string()),
            UseCaseError::Storage(e) => Self::InternalError(e.to_string()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCompanyUseCase {
    type Response = Company;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCompany";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        let company = Company::new(
            None,
            self.name.clone(),
            self.description.clone(),
            self.amount_of_employees,
            self.registered,
            self.company_type.clone(),
        );
        company.validate().map_err(UseCaseError::InvalidCompany)?;

        ctx.repos
            .companies
            .insert(&company)
            .await
            .map_err(UseCaseError::Storage)?;

        Ok(company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usecase(name: &str, amount_of_employees: i32) -> CreateCompanyUseCase {
        CreateCompanyUseCase {
            name: name.into(),
            description: "".into(),
            amount_of_employees,
            registered: true,
            company_type: "LLC".into(),
        }
    }

    #[actix_web::test]
    async fn creates_company_with_new_id() {
        let ctx = RegistryContext::create_inmemory();

        let company = execute(usecase("Acme", 5), &ctx).await.unwrap();
        assert!(!company.id.is_nil());

        let stored = ctx.repos.companies.find(&company.id).await.unwrap();
        assert_eq!(stored, company);
    }

    #[actix_web::test]
    async fn rejects_invalid_company_without_storing_it() {
        let ctx = RegistryContext::create_inmemory();

        let res = execute(usecase("Acme", 0), &ctx).await;
        assert!(matches!(
            res,
            Err(UseCaseError::InvalidCompany(
                CompanyValidationError::InvalidAmountOfEmployees
            ))
        ));
    }
}
