mod create_company;
mod delete_company;
mod get_company;
mod patch_company;

use actix_web::web;
use create_company::create_company_controller;
use delete_company::delete_company_controller;
use get_company::get_company_controller;
use patch_company::patch_company_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/company", web::post().to(create_company_controller));
    cfg.route(
        "/company/{company_id}",
        web::patch().to(patch_company_controller),
    );
    cfg.route(
        "/company/{company_id}",
        web::delete().to(delete_company_controller),
    );
    cfg.route("/company/{company_id}", web::get().to(get_company_controller));
}
