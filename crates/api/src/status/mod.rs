use actix_web::{http::StatusCode, web, HttpResponse};
use company_registry_api_structs::get_service_health::*;

use crate::shared::response::json_response;

async fn status() -> HttpResponse {
    json_response(
        StatusCode::OK,
        &APIResponse {
            message: "Yo! We are up!\r\n".into(),
        },
    )
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
