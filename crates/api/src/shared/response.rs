use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use serde::Serialize;
use tracing::error;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Sent instead of a body that could not be serialized
pub const JSON_ERROR_RESPONSE: &[u8] = br#"{"error_code":500,"message":"JSON marshal error"}"#;

pub fn to_json_body<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).unwrap_or_else(|e| {
        error!("Unable to serialize response body. Error: {:?}", e);
        JSON_ERROR_RESPONSE.to_vec()
    })
}

pub fn send_raw_response(status_code: StatusCode, body: Vec<u8>) -> HttpResponse {
    HttpResponse::build(status_code)
        .insert_header((header::CONTENT_TYPE, JSON_CONTENT_TYPE))
        .body(body)
}

pub fn json_response<T: Serialize>(status_code: StatusCode, value: &T) -> HttpResponse {
    send_raw_response(status_code, to_json_body(value))
}
