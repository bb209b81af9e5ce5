use pushkind_pager::models::config::{PagerSettings, ServerConfig};
use tera::Tera;

pub fn test_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*").to_string(),
        assets_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/assets").to_string(),
        pager: PagerSettings::default(),
    }
}

pub fn test_tera() -> Tera {
    Tera::new(&test_config().templates_dir).expect("templates should parse")
}
