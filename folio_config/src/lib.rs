use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use email_address::EmailAddress;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Prefix for environment variable overrides, e.g. `FOLIO_MAILER__API_KEY`
/// sets `mailer.api_key`.
pub const ENV_PREFIX: &str = "FOLIO";

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub mailer: MailerConfig,
    pub contact: ContactConfig,
    pub cors: CorsConfig,
    pub rate_limit: RateLimitConfig,
    pub profile: ProfileConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    pub real_ip: Option<RealIpConfig>,
}

#[derive(Debug, Deserialize)]
pub struct RealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

/// Transactional email provider settings. The keys a deployment must set are
/// intentionally optional: the server starts without them and the contact
/// endpoint reports the missing keys instead.
#[derive(Debug, Deserialize)]
pub struct MailerConfig {
    pub api_key: Option<String>,
    pub sender_email: Option<EmailAddress>,
    pub sender_name: Option<String>,
    pub inbox: Option<EmailAddress>,
    pub endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub auto_reply: bool,
}

#[derive(Debug, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RateLimitConfig {
    pub capacity: f64,
    pub refill_per_sec: f64,
}

/// Links rendered into the auto-reply email.
#[derive(Debug, Deserialize)]
pub struct ProfileConfig {
    pub portfolio_url: Option<Url>,
    pub github_url: Option<Url>,
    pub linkedin_url: Option<Url>,
    pub whatsapp_url: Option<Url>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert!(config.mailer.api_key.is_none());
        assert!(config.contact.auto_reply);
    }

    #[test]
    fn parse_full_config() {
        let source = File::from_str(
            r#"
            [http]
            host = "127.0.0.1"
            port = 3001

            [http.real_ip]
            header = "X-Real-Ip"
            set_from = "10.0.0.1"

            [mailer]
            api_key = "xkeysib-test"
            sender_email = "noreply@example.com"
            sender_name = "Portfolio"
            inbox = "me@example.com"

            [contact]
            auto_reply = false

            [cors]
            allowed_origins = ["https://example.com"]

            [rate_limit]
            capacity = 100.0
            refill_per_sec = 0.11

            [profile]
            github_url = "https://github.com/jaelsonsantos"
            "#,
            FileFormat::Toml,
        );

        let config = config::Config::builder()
            .add_source(source)
            .build()
            .unwrap()
            .try_deserialize::<Config>()
            .unwrap();

        assert_eq!(config.http.port, 3001);
        assert_eq!(
            config.http.real_ip.unwrap().set_from,
            "10.0.0.1".parse::<IpAddr>().unwrap()
        );
        assert_eq!(
            config.mailer.sender_email.unwrap().as_str(),
            "noreply@example.com"
        );
        assert!(!config.contact.auto_reply);
        assert_eq!(config.cors.allowed_origins, ["https://example.com"]);
        assert!(config.profile.portfolio_url.is_none());
        assert_eq!(
            config.profile.github_url.unwrap().as_str(),
            "https://github.com/jaelsonsantos"
        );
    }
}
