use anyhow::Context;
use std::{
    env,
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    str::FromStr,
};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://course-catalog.db?mode=rwc";
pub const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 3002));

/// Runtime settings, read from the environment.
///
/// | variable                   | default                               |
/// |----------------------------|---------------------------------------|
/// | `DATABASE_URL`             | `sqlite://course-catalog.db?mode=rwc` |
/// | `LISTEN_ADDR`              | `0.0.0.0:3002`                        |
/// | `DATABASE_MAX_CONNECTIONS` | driver default                        |
/// | `AUTO_MIGRATE`             | `true`                                |
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub max_connections: Option<u32>,
    pub auto_migrate: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                info!("DATABASE_URL is not set, using {DEFAULT_DATABASE_URL}");
                DEFAULT_DATABASE_URL.to_owned()
            }
        };

        Ok(Self {
            database_url,
            listen_addr: parse_var("LISTEN_ADDR")?.unwrap_or(DEFAULT_LISTEN_ADDR),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?,
            auto_migrate: parse_var("AUTO_MIGRATE")?.unwrap_or(true),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            listen_addr: DEFAULT_LISTEN_ADDR,
            max_connections: None,
            auto_migrate: true,
        }
    }
}

fn parse_var<T>(name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Ok(value) = env::var(name) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .inspect_err(|_| error!("{name} has an invalid value: {value:?}"))
        .with_context(|| format!("failed to parse {name}"))
}
