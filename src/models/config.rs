//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::forms::pager::{MAX_GROUP_SIZE, MAX_ITEMS_PER_PAGE};
use crate::pagination::{DEFAULT_GROUP_SIZE, DEFAULT_ITEMS_PER_PAGE};

#[derive(Clone, Debug, Deserialize, Validate)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default)]
    #[validate(nested)]
    pub pager: PagerSettings,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Validate)]
/// Defaults applied to pager requests that omit them.
///
/// Held to the same limits as the query string so that every default and
/// selector choice is a value the pager endpoints accept.
pub struct PagerSettings {
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = MAX_ITEMS_PER_PAGE))]
    pub default_page_size: usize,
    #[serde(default = "default_group_size")]
    #[validate(range(min = 1, max = MAX_GROUP_SIZE))]
    pub group_size: usize,
    /// Choices offered by the page-size selector.
    #[serde(default = "default_page_size_options")]
    #[validate(custom(function = "validate_page_size_options"))]
    pub page_size_options: Vec<usize>,
}

fn validate_page_size_options(options: &[usize]) -> Result<(), ValidationError> {
    if options
        .iter()
        .all(|&size| (1..=MAX_ITEMS_PER_PAGE).contains(&size))
    {
        Ok(())
    } else {
        Err(ValidationError::new("page_size_option_out_of_range"))
    }
}

impl Default for PagerSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            group_size: default_group_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

fn default_assets_dir() -> String {
    "./assets".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_group_size() -> usize {
    DEFAULT_GROUP_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 20, 50, 100]
}

impl ServerConfig {
    /// Reads `{config_dir}/default.yaml`, the optional `{config_dir}/{app_env}.yaml`
    /// overrides and `APP_`-prefixed environment variables, in that order, and
    /// validates the result.
    pub fn load(config_dir: &str, app_env: &str) -> Result<Self, ConfigError> {
        let server_config: Self = Config::builder()
            .add_source(File::with_name(&format!("{config_dir}/default")))
            .add_source(File::with_name(&format!("{config_dir}/{app_env}")).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        server_config
            .validate()
            .map_err(|err| ConfigError::Message(format!("invalid configuration: {err}")))?;

        Ok(server_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_settings_default_to_pager_constants() {
        let settings = PagerSettings::default();

        assert_eq!(settings.default_page_size, 10);
        assert_eq!(settings.group_size, 5);
        assert_eq!(settings.page_size_options, vec![10, 20, 50, 100]);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn oversized_default_page_size_is_invalid() {
        let settings = PagerSettings {
            default_page_size: MAX_ITEMS_PER_PAGE + 1,
            ..Default::default()
        };

        assert!(settings.validate().is_err());
    }

    #[test]
    fn zero_group_size_is_invalid() {
        let settings = PagerSettings {
            group_size: 0,
            ..Default::default()
        };

        assert!(settings.validate().is_err());
    }

    #[test]
    fn page_size_options_outside_the_limits_are_invalid() {
        for options in [vec![0, 10], vec![10, MAX_ITEMS_PER_PAGE + 1]] {
            let settings = PagerSettings {
                page_size_options: options,
                ..Default::default()
            };

            assert!(settings.validate().is_err());
        }
    }
}
