use crate::error::RegistryError;
use actix_web::{http::header, HttpRequest};
use company_registry_infra::RegistryContext;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info};

/// Claims of a verified token. They are not inspected any further,
/// possession of a token signed with the server secret is enough.
pub type Claims = serde_json::Map<String, serde_json::Value>;

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    #[error("Authorization header missing")]
    MissingAuthHeader,
    #[error("Incorrectly formatted authorization header")]
    MalformedAuthHeader,
    #[error("{0}")]
    InvalidToken(String),
}

impl From<AuthError> for RegistryError {
    fn from(e: AuthError) -> Self {
        Self::Unauthorized(e.to_string())
    }
}

/// Expects exactly `Bearer <token>` and returns the token part
fn parse_authtoken_header(token_header_value: &str) -> Result<&str, AuthError> {
    match token_header_value.split(' ').collect::<Vec<_>>()[..] {
        ["Bearer", token] => Ok(token),
        _ => Err(AuthError::MalformedAuthHeader),
    }
}

/// Only HMAC signed tokens are accepted. Tokens claiming any other
/// algorithm, `none` included, are rejected before the signature is checked.
fn token_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
    // `exp` and `nbf` are still validated when the token carries them
    validation.required_spec_claims = HashSet::new();
    validation.validate_aud = false;
    validation.leeway = 0;
    validation
}

pub fn decode_token(token: &str, secret: &[u8]) -> Result<Claims, AuthError> {
    decode::<Claims>(token, &DecodingKey::from_secret(secret), &token_validation())
        .map(|token_data| token_data.claims)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))
}

fn authenticate(req: &HttpRequest, secret: &[u8]) -> Result<Claims, AuthError> {
    let token_header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::MalformedAuthHeader)?;
    let token = parse_authtoken_header(token_header_value)?;
    decode_token(token, secret)
}

/// Only lets the request through when it carries a bearer token signed
/// with the server secret.
pub fn protect_route(req: &HttpRequest, ctx: &RegistryContext) -> Result<Claims, RegistryError> {
    debug!("Checking authorization");
    match authenticate(req, ctx.config.jwt_secret.as_bytes()) {
        Ok(claims) => {
            info!("Token is good. Claims: {:?}", claims);
            Ok(claims)
        }
        Err(e) => {
            info!("Request is not authorized. Error: {}", e);
            Err(e.into())
        }
    }
}
