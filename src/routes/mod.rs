//! HTTP handlers and shared response helpers.

use actix_web::HttpResponse;
use log::error;
use tera::{Context, Tera};

pub mod api;
pub mod pager;

/// Renders `template` with `context`, answering `500` when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
