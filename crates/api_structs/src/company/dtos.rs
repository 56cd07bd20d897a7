use company_registry_domain::{Company, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CompanyDTO {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub amount_of_employees: i32,
    pub registered: bool,
    #[serde(rename = "type")]
    pub company_type: String,
}

impl CompanyDTO {
    pub fn new(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            description: company.description,
            amount_of_employees: company.amount_of_employees,
            registered: company.registered,
            company_type: company.company_type,
        }
    }
}
