use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use contact_models::email_address::EmailAddress;
pub use duration::Duration;
use serde::Deserialize;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of config files that are loaded on top of the
/// default config.
pub const CONFIG_PATH_ENV: &str = "CONTACT_CONFIG";

/// Loads the default config and every file listed in [`CONFIG_PATH_ENV`].
pub fn load() -> anyhow::Result<Config> {
    let extra = std::env::var(CONFIG_PATH_ENV).unwrap_or_default();
    let paths = std::iter::once(DEFAULT_CONFIG_PATH)
        .chain(extra.split(':').filter(|path| !path.is_empty()))
        .map(Path::new)
        .collect::<Vec<_>>();

    load_with_override(&paths, &[])
}

/// Loads the given config files in order, then applies the toml snippets in
/// `overrides`. Later sources take precedence.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .fold(builder, |builder, content| {
            builder.add_source(File::from_str(content, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub contact: ContactConfig,
    pub transport: TransportConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub submit_timeout: Duration,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Waits for `delay` and reports success without delivering anything.
    Simulated { delay: Duration },
    /// Delivers submissions by email.
    Smtp(SmtpConfig),
}

#[derive(Debug, Deserialize)]
pub struct SmtpConfig {
    pub url: String,
    pub from: EmailAddress,
    pub recipient: EmailAddress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_with_override(&[DEFAULT_CONFIG_PATH], &[]).unwrap();

        assert_eq!(config.http.port, 8000);
        assert_eq!(
            *config.contact.submit_timeout,
            std::time::Duration::from_secs(10)
        );
        match config.transport {
            TransportConfig::Simulated { delay } => {
                assert_eq!(*delay, std::time::Duration::from_millis(1000))
            }
            TransportConfig::Smtp(_) => panic!("expected the simulated transport"),
        }
    }

    #[test]
    fn override_transport() {
        let config = load_with_override(
            &[DEFAULT_CONFIG_PATH],
            &[r#"
                [transport]
                kind = "smtp"
                url = "smtp://localhost:2525"
                from = "noreply@example.com"
                recipient = "contact@example.com"
            "#],
        )
        .unwrap();

        match config.transport {
            TransportConfig::Smtp(smtp) => {
                assert_eq!(smtp.url, "smtp://localhost:2525");
                assert_eq!(smtp.from.as_str(), "noreply@example.com");
                assert_eq!(smtp.recipient.as_str(), "contact@example.com");
            }
            TransportConfig::Simulated { .. } => panic!("expected the smtp transport"),
        }
    }

    #[test]
    fn invalid_duration() {
        let result = load_with_override(
            &[DEFAULT_CONFIG_PATH],
            &["[contact]\nsubmit_timeout = \"soon\""],
        );

        assert!(result.is_err());
    }
}
