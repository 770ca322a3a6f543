use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigResult;

/// The search configuration compiled into the binary
const BUILTIN_CONFIG: &str = include_str!("default.toml");

/// Parses and validates a configuration document
///
/// # Arguments
///
/// * `content` - TOML source of the configuration
///
/// # Returns
///
/// * `Ok(Config)` - Successfully parsed and validated configuration
/// * `Err(ConfigError)` - Failed to parse or validate the configuration
pub fn load_config_str(content: &str) -> ConfigResult<Config> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Loads the built-in ULI search configuration
///
/// # Example
///
/// ```
/// use apartment_search::config::load_builtin_config;
///
/// let config = load_builtin_config().unwrap();
/// assert_eq!(config.crawler.parallelism, 2);
/// assert_eq!(config.search_urls.len(), 2);
/// ```
pub fn load_builtin_config() -> ConfigResult<Config> {
    load_config_str(BUILTIN_CONFIG)
}
