use std::env;

use dotenvy::dotenv;
use log::error;

use pushkind_pager::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let server_config = match ServerConfig::load("config", &app_env) {
        Ok(server_config) => server_config,
        Err(err) => {
            error!("Error loading server config: {}", err);
            std::process::exit(1);
        }
    };

    pushkind_pager::run(server_config).await
}
