use crate::models::config::Config;
use lettergram_error::{ConfigError, Error, ErrorType, Result};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Environment variable overriding the location of the configuration file.
pub const CONFIG_ENV: &str = "LETTERGRAM_CONFIG";
/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "config.yaml";

fn config_error(kind: ConfigError, cause: Option<lettergram_error::BError>, context: String) -> Error {
    Error::new(ErrorType::Config(kind), cause, Some(context))
}

/// Location of the configuration file.
pub fn path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

/// Reads the configuration file, if there is one.
pub fn read() -> Result<Config> {
    read_from(path())
}

/// Reads a configuration file.
/// A missing file gives the default configuration.
pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            debug!("No configuration at {}, using defaults.", path.display());
            return Ok(Config::default());
        },
        Err(error) => {
            return Err(config_error(
                ConfigError::Unreadable,
                Some(Box::new(error)),
                path.display().to_string(),
            )
            .into())
        },
    };

    let config = parse(&content)?;
    debug!("Loaded configuration from {}: {:?}", path.display(), config);

    Ok(config)
}

/// Parses and validates a YAML configuration.
pub fn parse(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(content).map_err(|error| {
        config_error(
            ConfigError::Malformed,
            Some(Box::new(error)),
            "cannot deserialize configuration".to_string(),
        )
    })?;

    if let Some(reason) = config.invalid_value() {
        return Err(config_error(ConfigError::InvalidValue, None, reason).into());
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::DEFAULT_CHUNK_SIZE;
    use lettergram_algorithm::Histogram;

    #[test]
    fn test_parse_full() {
        let config = parse(
            "chunk_size: 16\nhistogram:\n  threshold: 0.5\n  bar: \"*\"\n",
        )
        .unwrap();

        assert_eq!(config.chunk_size(), 16);
        assert_eq!(config.histogram(), Histogram::new(0.5, '*'));
    }

    #[test]
    fn test_parse_defaults() {
        let config = parse("chunk_size: 4\n").unwrap();
        assert_eq!(config.histogram(), Histogram::default());

        let config = parse("").unwrap();
        assert_eq!(config.chunk_size(), DEFAULT_CHUNK_SIZE);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_invalid_values() {
        assert!(parse("chunk_size: 0").is_err());
        assert!(parse("histogram:\n  threshold: -1.0").is_err());
        assert!(parse("histogram:\n  threshold: .nan").is_err());
    }

    #[test]
    fn test_parse_malformed() {
        let error = parse("chunk_size: [1, 2").unwrap_err();
        assert!(error
            .to_string()
            .starts_with("The configuration file is not valid YAML."));

        assert!(parse("histogram:\n  bar: \"##\"").is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let config = read_from(
            std::env::temp_dir().join("lettergram-missing-config.yaml"),
        )
        .unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_read_file() {
        let path = std::env::temp_dir()
            .join(format!("lettergram-config-{}.yaml", std::process::id()));
        fs::write(&path, "histogram:\n  threshold: 2\n").unwrap();

        let config = read_from(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(config.unwrap().histogram().threshold, 2.0);
    }
}
