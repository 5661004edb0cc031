use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("courtside.default.toml");

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub bookings: Option<Bookings>,
    pub tasks: Option<Tasks>,
    pub auth: Option<Auth>,
}

impl Config {
    pub fn embedded_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }

    /// Sections missing in `self` are taken from `defaults`.
    pub fn or_sections_of(self, defaults: Self) -> Self {
        Self {
            db: self.db.or(defaults.db),
            webserver: self.webserver.or(defaults.webserver),
            bookings: self.bookings.or(defaults.bookings),
            tasks: self.tasks.or(defaults.tasks),
            auth: self.auth.or(defaults.auth),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Bookings {
    pub tax_rate: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Tasks {
    #[serde(deserialize_with = "deserialize_duration")]
    pub reconciliation_interval: Duration,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Auth {
    #[serde(deserialize_with = "deserialize_duration")]
    pub jwt_token_lifetime: Duration,
}
