use atlas_reserve::templates::ContactDetails;
use atlas_reserve::SmtpConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub smtp: SmtpConfig,
    /// Absent means the admin notification is skipped, never an error.
    pub admin_email: Option<String>,
    pub contact: ContactDetails,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `ATLAS__SMTP__PASSWORD=...` overrides smtp.password
            .add_source(config::Environment::with_prefix("ATLAS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
