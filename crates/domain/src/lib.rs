mod company;
mod shared;

pub use company::{Company, CompanyValidationError, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH};
pub use shared::entity::{Entity, InvalidIDError, ID};
