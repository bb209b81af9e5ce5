//! Page-window pagination for back-office data grids, with an Actix-web
//! front end serving the pager widget as HTML and JSON.

pub mod domain;
pub mod pagination;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use log::info;
    use tera::Tera;

    use crate::models::config::ServerConfig;
    use crate::routes::api::api_v1_pager;
    use crate::routes::pager::show_pager;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        info!(
            "Serving pager on {}:{}",
            server_config.address,
            server_config.port
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", &server_config.assets_dir))
                .service(web::scope("/api").service(api_v1_pager))
                .service(show_pager)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
