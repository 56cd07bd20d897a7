use crate::{
    error::RegistryError,
    shared::{
        guard::Guard,
        response::json_response,
        usecase::{execute, UseCase},
    },
};
use actix_web::{http::StatusCode, web, HttpResponse};
use company_registry_api_structs::get_company::*;
use company_registry_domain::{Company, ID};
use company_registry_infra::{RegistryContext, RepoError};
use tracing::info;

pub async fn get_company_controller(
    path: web::Path<String>,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    info!("GetCompany id: {}", path);
    let company_id = Guard::against_malformed_id(&path)?;

    let usecase = GetCompanyUseCase { company_id };

    execute(usecase, &ctx)
        .await
        .map(|company| {
            info!("GetCompany found: {}", company.id);
            json_response(StatusCode::OK, &APIResponse::new("Company found", company))
        })
        .map_err(RegistryError::from)
}

#[derive(Debug)]
pub struct GetCompanyUseCase {
    pub company_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    Storage(RepoError),
}

impl From<UseCaseError> for RegistryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Storage(e) => Self::InternalError(e.to_string()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCompanyUseCase {
    type Response = Company;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCompany";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .companies
            .find(&self.company_id)
            .await
            .map_err(UseCaseError::Storage)
    }
}
