use crate::dtos::CompanyDTO;
use crate::ResponseStatus;
use company_registry_domain::{Company, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyResponse {
    pub status: ResponseStatus,
    pub company: CompanyDTO,
}

impl CompanyResponse {
    pub fn new(message: &str, company: Company) -> Self {
        Self {
            status: ResponseStatus::ok(message),
            company: CompanyDTO::new(company),
        }
    }
}

/// Body shared by the create and patch endpoints
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CompanyRequestBody {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub amount_of_employees: i32,
    pub registered: bool,
    #[serde(rename = "type")]
    pub company_type: String,
}

pub mod create_company {
    use super::*;

    pub type RequestBody = CompanyRequestBody;

    pub type APIResponse = CompanyResponse;
}

pub mod patch_company {
    use super::*;

    pub type RequestBody = CompanyRequestBody;

    pub type APIResponse = CompanyResponse;
}

pub mod get_company {
    use super::*;

    pub type APIResponse = CompanyResponse;
}

pub mod delete_company {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
    pub struct APIResponse {
        pub error_code: u16,
        pub message: String,
        pub id: ID,
    }

    impl APIResponse {
        pub fn new(message: &str, id: ID) -> Self {
            let status = ResponseStatus::ok(message);
            Self {
                error_code: status.error_code,
                message: status.message,
                id,
            }
        }
    }
}
