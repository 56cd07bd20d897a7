use crate::shared::entity::{Entity, ID};
use thiserror::Error;

pub const NAME_MAX_LENGTH: usize = 15;
pub const DESCRIPTION_MAX_LENGTH: usize = 300;

/// A `Company` is the single resource exposed by the registry.
///
/// It is addressed only by its `id`, which is assigned once when the
/// `Company` is created and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub amount_of_employees: i32,
    pub registered: bool,
    pub company_type: String,
}

#[derive(Error, Debug, PartialEq)]
pub enum CompanyValidationError {
    #[error("name must not be empty and not more than {0} characters")]
    InvalidName(usize),
    #[error("description must not be more than {0} characters")]
    InvalidDescription(usize),
    #[error("amount of employees must be more than 0")]
    InvalidAmountOfEmployees,
}

impl Company {
    /// Creates a new `Company`. A fresh `ID` is minted when no id, or the nil id,
    /// is given.
    pub fn new(
        id: Option<ID>,
        name: String,
        description: String,
        amount_of_employees: i32,
        registered: bool,
        company_type: String,
    ) -> Self {
        let id = match id {
            Some(id) if !id.is_nil() => id,
            _ => ID::new(),
        };

        Self {
            id,
            name,
            description,
            amount_of_employees,
            registered,
            company_type,
        }
    }

    /// Rules are checked in order and the first one that fails is reported.
    pub fn validate(&self) -> Result<(), CompanyValidationError> {
        let name_len = self.name.chars().count();
        if name_len == 0 || name_len > NAME_MAX_LENGTH {
            return Err(CompanyValidationError::InvalidName(NAME_MAX_LENGTH));
        }
        if self.description.chars().count() > DESCRIPTION_MAX_LENGTH {
            return Err(CompanyValidationError::InvalidDescription(
                DESCRIPTION_MAX_LENGTH,
            ));
        }
        if self.amount_of_employees <= 0 {
            return Err(CompanyValidationError::InvalidAmountOfEmployees);
        }
        Ok(())
    }
}

impl Entity for Company {
    fn id(&self) -> &ID {
        &self.id
    }
}
