use crate::error::RegistryError;
use company_registry_domain::ID;
use serde::de::DeserializeOwned;

pub struct Guard {}

impl Guard {
    pub fn against_malformed_id(val: &str) -> Result<ID, RegistryError> {
        val.parse()
            .map_err(|e| RegistryError::BadClientData(format!("{}", e)))
    }

    pub fn against_malformed_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, RegistryError> {
        serde_json::from_slice(body).map_err(|e| RegistryError::BadClientData(format!("{}", e)))
    }
}
