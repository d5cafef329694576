use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

const DEFAULT_HTTP_PORT: u16 = 5000;
const DEFAULT_ADMIN_DATABASE: &str = "postgres";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVariable(&'static str),

    #[error("environment variable {name} has an invalid value: {value}")]
    InvalidVariable { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub postgres_admin_database: String,
    pub postgres_max_connections: u32,
    pub debug: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values are
    /// treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| read(name).ok_or(ConfigError::MissingVariable(name));

        let postgres_user = required("POSTGRES_USER")?;
        let postgres_password = required("POSTGRES_PASSWORD")?;
        let postgres_host = required("POSTGRES_HOST")?;
        let postgres_port = parse_number("POSTGRES_PORT", required("POSTGRES_PORT")?)?;
        let postgres_database = required("POSTGRES_DB")?;

        let port = match read("PORT") {
            Some(value) => parse_number("PORT", value)?,
            None => DEFAULT_HTTP_PORT,
        };
        let postgres_max_connections = match read("POSTGRES_MAX_CONNECTIONS") {
            Some(value) => parse_number("POSTGRES_MAX_CONNECTIONS", value)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            port,
            postgres_host,
            postgres_port,
            postgres_user,
            postgres_password,
            postgres_database,
            postgres_admin_database: read("POSTGRES_ADMIN_DATABASE")
                .unwrap_or_else(|| DEFAULT_ADMIN_DATABASE.to_string()),
            postgres_max_connections,
            debug: read("DEBUG").is_some_and(|value| is_truthy(&value)),
        })
    }

    pub fn admin_connect_options(&self) -> PgConnectOptions {
        self.base_connect_options()
            .database(&self.postgres_admin_database)
    }

    pub fn target_connect_options(&self) -> PgConnectOptions {
        self.base_connect_options().database(&self.postgres_database)
    }

    fn base_connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.postgres_host)
            .port(self.postgres_port)
            .username(&self.postgres_user)
            .password(&self.postgres_password)
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidVariable { name, value })
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
