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
use company_registry_api_structs::delete_company::*;
use company_registry_domain::ID;
use company_registry_infra::{RegistryContext, RepoError};
use tracing::info;

pub async fn delete_company_controller(
    http_req: HttpRequest,
    path: web::Path<String>,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    protect_route(&http_req, &ctx)?;
    let company_id = Guard::against_malformed_id(&path)?;
    info!("DeleteCompany id: {}", company_id);

    let usecase = DeleteCompanyUseCase { company_id };

    execute(usecase, &ctx)
        .await
        .map(|company_id| {
            info!("DeleteCompany deleted: {}", company_id);
            json_response(
                StatusCode::OK,
                &APIResponse::new("Company deleted", company_id),
            )
        })
        .map_err(RegistryError::from)
}

#[derive(Debug)]
pub struct DeleteCompanyUseCase {
    pub company_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    Storage(RepoError),
}

impl From<UseCaseError> for RegistryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            // An unknown id is reported as an internal error as well
            UseCaseError::Storage(e) => Self::InternalError(e.to_string()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteCompanyUseCase {
    type Response = ID;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteCompany";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .companies
            .delete(&self.company_id)
            .await
            .map_err(UseCaseError::Storage)?;

        Ok(self.company_id)
    }
}
