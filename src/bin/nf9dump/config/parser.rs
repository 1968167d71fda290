use crate::config::schema::Config;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Parse a YAML configuration file
pub fn parse_yaml_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    parse_yaml_str(&contents)
}

/// Parse a YAML configuration string
pub fn parse_yaml_str(contents: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(contents)?;
    Ok(config)
}
