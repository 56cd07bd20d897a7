pub mod auth;
pub mod guard;
pub mod response;
pub mod usecase;
