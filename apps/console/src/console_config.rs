use std::env;
use std::path::PathBuf;

use editable_profile_core::{AppError, AppResult};
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_REFERENCE_BASE_URL: &str = "http://localhost:8080/en/";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_STORE_PATH: &str = "./profile.json";

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub reference_base_url: Url,
    pub http_timeout_secs: u64,
    pub store_path: PathBuf,
}

impl ConsoleConfig {
    pub fn load() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let reference_base_url = lookup("PROFILE_REFERENCE_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REFERENCE_BASE_URL.to_owned());
        let reference_base_url = Url::parse(reference_base_url.as_str()).map_err(|error| {
            AppError::Validation(format!(
                "invalid PROFILE_REFERENCE_BASE_URL value '{reference_base_url}': {error}"
            ))
        })?;

        let http_timeout_secs = parse_u64(
            "PROFILE_HTTP_TIMEOUT_SECS",
            lookup("PROFILE_HTTP_TIMEOUT_SECS"),
            DEFAULT_HTTP_TIMEOUT_SECS,
        )?;
        if http_timeout_secs == 0 {
            return Err(AppError::Validation(
                "PROFILE_HTTP_TIMEOUT_SECS must be greater than zero".to_owned(),
            ));
        }

        let store_path = lookup("PROFILE_STORE_PATH")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORE_PATH), PathBuf::from);

        Ok(Self {
            reference_base_url,
            http_timeout_secs,
            store_path,
        })
    }
}

/// Logs go to stderr so they never interleave with the form on stdout.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn parse_u64(name: &str, value: Option<String>, default: u64) -> AppResult<u64> {
    match value {
        Some(value) => value.parse::<u64>().map_err(|error| {
            AppError::Validation(format!("invalid {name} value '{value}': {error}"))
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use editable_profile_core::AppError;

    use super::ConsoleConfig;

    fn load(values: &[(&str, &str)]) -> Result<ConsoleConfig, AppError> {
        let values: HashMap<String, String> = values
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ConsoleConfig::from_lookup(|name| values.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]);
        assert!(config.is_ok());
        let config = config.unwrap_or_else(|_| unreachable!());

        assert_eq!(
            config.reference_base_url.as_str(),
            "http://localhost:8080/en/"
        );
        assert_eq!(config.http_timeout_secs, 10);
        assert_eq!(config.store_path, PathBuf::from("./profile.json"));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("PROFILE_REFERENCE_BASE_URL", "https://profiles.test/de/"),
            ("PROFILE_HTTP_TIMEOUT_SECS", "3"),
            ("PROFILE_STORE_PATH", "/var/lib/profile.json"),
        ])
        .unwrap_or_else(|_| unreachable!());

        assert_eq!(config.reference_base_url.as_str(), "https://profiles.test/de/");
        assert_eq!(config.http_timeout_secs, 3);
        assert_eq!(config.store_path, PathBuf::from("/var/lib/profile.json"));
    }

    #[test]
    fn zero_or_malformed_timeout_is_rejected() {
        let Err(AppError::Validation(message)) = load(&[("PROFILE_HTTP_TIMEOUT_SECS", "0")])
        else {
            panic!("zero timeout should be rejected");
        };
        assert!(message.contains("greater than zero"));

        assert!(matches!(
            load(&[("PROFILE_HTTP_TIMEOUT_SECS", "soon")]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        assert!(matches!(
            load(&[("PROFILE_REFERENCE_BASE_URL", "not a url")]),
            Err(AppError::Validation(_))
        ));
    }
}
