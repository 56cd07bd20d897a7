use crate::shared::response::json_response;
use actix_web::{http::StatusCode, HttpResponse};
use company_registry_api_structs::ResponseStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("{0}")]
    InternalError(String),
    #[error("{0}")]
    BadClientData(String),
    #[error("{0}")]
    Unauthorized(String),
}

impl actix_web::error::ResponseError for RegistryError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        json_response(
            status_code,
            &ResponseStatus::new(status_code.as_u16(), self.to_string()),
        )
    }
}
