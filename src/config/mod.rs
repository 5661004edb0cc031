use anyhow::{anyhow, Result};
use courtside_core::entities::TaxRate;
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "courtside.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub bookings: Bookings,
    pub tasks: Tasks,
    pub auth: Auth,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let defaults = raw::Config::embedded_default()?;
        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str::<raw::Config>(&cfg_string)?.or_sections_of(defaults),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    defaults
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Bookings {
    pub tax_rate: TaxRate,
}

pub struct Tasks {
    pub reconciliation_interval: Duration,
}

pub struct Auth {
    pub jwt_token_lifetime: time::Duration,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            bookings,
            tasks,
            auth,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.ok_or_else(|| anyhow!("Missing database configuration"))?;
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } =
            webserver.ok_or_else(|| anyhow!("Missing webserver configuration"))?;
        let webserver = WebServer { enable_cors: cors };

        let raw::Bookings { tax_rate } =
            bookings.ok_or_else(|| anyhow!("Missing bookings configuration"))?;
        let tax_rate = TaxRate::new(tax_rate);
        if !tax_rate.is_valid() {
            return Err(anyhow!("Invalid tax rate {}", f64::from(tax_rate)));
        }
        let bookings = Bookings { tax_rate };

        let raw::Tasks {
            reconciliation_interval,
        } = tasks.ok_or_else(|| anyhow!("Missing tasks configuration"))?;
        if reconciliation_interval.is_zero() {
            return Err(anyhow!("The reconciliation interval must be positive"));
        }
        let tasks = Tasks {
            reconciliation_interval,
        };

        let raw::Auth { jwt_token_lifetime } =
            auth.ok_or_else(|| anyhow!("Missing auth configuration"))?;
        let auth = Auth {
            jwt_token_lifetime: time::Duration::try_from(jwt_token_lifetime)?,
        };

        Ok(Self {
            db,
            webserver,
            bookings,
            tasks,
            auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = Some(Path::new("does-not-exist.toml"));
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(f64::from(cfg.bookings.tax_rate), 0.18);
        assert_eq!(cfg.auth.jwt_token_lifetime, time::Duration::days(1));
    }

    #[test]
    fn reject_invalid_tax_rate() {
        let mut raw = raw::Config::embedded_default().unwrap();
        raw.bookings = Some(raw::Bookings { tax_rate: -1.0 });
        assert!(Config::try_from(raw).is_err());
    }
}
