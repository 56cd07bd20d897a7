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
use company_registry_api_structs::patch_company::*;
use company_registry_domain::{Company, CompanyValidationError, ID};
use company_registry_infra::{RegistryContext, RepoError};
use tracing::info;

pub async fn patch_company_controller(
    http_req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    protect_route(&http_req, &ctx)?;
    let company_id = Guard::against_malformed_id(&path)?;
    info!("PatchCompany id: {}", company_id);
    let body: RequestBody = Guard::against_malformed_body(&body)?;
    info!("PatchCompany request: {:?}", body);

    let usecase = PatchCompanyUseCase {
        company_id,
        name: body.name,
        description: body.description,
        amount_of_employees: body.amount_of_employees,
        registered: body.registered,
        company_type: body.company_type,
    };

    execute(usecase, &ctx)
        .await
        .map(|company| {
            info!("PatchCompany changed: {}", company.id);
            json_response(
                StatusCode::OK,
                &APIResponse::new("Company patched", company),
            )
        })
        .map_err(RegistryError::from)
}

#[derive(Debug)]
pub struct PatchCompanyUseCase {
    pub company_id: ID,
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
            // An unknown id is reported as an internal error as well
            UseCaseError::Storage(e) => Self::InternalError(e.to_string()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for PatchCompanyUseCase {
    type Response = Company;

    type Error = UseCaseError;

    const NAME: &'static str = "PatchCompany";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        let company = Company {
            id: self.company_id,
            name: self.name.clone(),
            description: self.description.clone(),
            amount_of_employees: self.amount_of_employees,
            registered: self.registered,
            company_type: self.company_type.clone(),
        };
        company.validate().map_err(UseCaseError::InvalidCompany)?;

        ctx.repos
            .companies
            .save(&company)
            .await
            .map_err(UseCaseError::Storage)?;

        Ok(company)
    }
}
