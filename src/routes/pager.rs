//! Server-rendered pager widget.

use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use tera::{Context, Tera};

use crate::forms::pager::PagerForm;
use crate::models::config::ServerConfig;
use crate::routes::render_template;
use crate::services::{ServiceError, pager as pager_service};

/// Render the pager partial for the requested grid page.
#[get("/pager")]
pub async fn show_pager(
    query: web::Query<PagerForm>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match pager_service::load_pager(query.into_inner(), &server_config.pager) {
        Ok(pager) => {
            let mut context = Context::new();
            context.insert("pager", &pager);
            render_template(&tera, "pager/index.html", &context)
        }
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().body(message),
        Err(err) => {
            error!("Failed to build pager: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
