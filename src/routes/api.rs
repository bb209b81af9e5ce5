use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::forms::pager::PagerForm;
use crate::models::config::ServerConfig;
use crate::services::{ServiceError, pager as pager_service};

/// Pager view model as JSON, for grids that render their own controls.
#[get("/v1/pager")]
pub async fn api_v1_pager(
    query: web::Query<PagerForm>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match pager_service::load_pager(query.into_inner(), &server_config.pager) {
        Ok(pager) => HttpResponse::Ok().json(pager),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().body(message),
        Err(err) => {
            error!("Failed to build pager: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
