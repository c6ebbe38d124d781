//! Environment configuration.
//!
//! | Variable               | Default                         |
//! |------------------------|---------------------------------|
//! | `PORT`                 | `5002`                          |
//! | `MAPMYINDIA_API_KEY`   | required                        |
//! | `ROUTING_BASE_URL`     | `https://apis.mapmyindia.com`   |
//! | `ROUTING_TIMEOUT_MS`   | `10000`                         |
//! | `SIM_TICK_MS`          | `3000`                          |
//! | `SIM_MAX_OFFSET_DEG`   | `0.00005`                       |
//! | `SIM_SEED`             | OS entropy                      |
//! | `CAMPUS_BUILDINGS_CSV` | built-in seed                   |
//! | `CAMPUS_VEHICLES_CSV`  | built-in seed                   |

use std::fmt::{self, Display};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use ct_routing::mapmyindia::DEFAULT_BASE_URL;
use ct_sim::SimConfig;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("environment variable {0} is required")]
    Missing(&'static str),

    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key:    &'static str,
        value:  String,
        reason: String,
    },
}

#[derive(Clone)]
pub struct Config {
    pub port:             u16,
    pub api_key:          String,
    pub routing_base_url: String,
    pub routing_timeout:  Duration,
    pub sim:              SimConfig,
    pub buildings_csv:    Option<PathBuf>,
    pub vehicles_csv:     Option<PathBuf>,
}

impl Config {
    /// Load from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("MAPMYINDIA_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::Missing("MAPMYINDIA_API_KEY"))?;

        let sim = SimConfig {
            tick_interval:  Duration::from_millis(try_load(&lookup, "SIM_TICK_MS", 3_000u64)?),
            max_offset_deg: try_load(&lookup, "SIM_MAX_OFFSET_DEG", 0.000_05f64)?,
            seed:           try_load_optional(&lookup, "SIM_SEED")?,
        };

        Ok(Self {
            port: try_load(&lookup, "PORT", 5002u16)?,
            api_key,
            routing_base_url: lookup("ROUTING_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            routing_timeout: Duration::from_millis(try_load(&lookup, "ROUTING_TIMEOUT_MS", 10_000u64)?),
            sim,
            buildings_csv: lookup("CAMPUS_BUILDINGS_CSV").map(PathBuf::from),
            vehicles_csv: lookup("CAMPUS_VEHICLES_CSV").map(PathBuf::from),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("api_key", &"<redacted>")
            .field("routing_base_url", &self.routing_base_url)
            .field("routing_timeout", &self.routing_timeout)
            .field("sim", &self.sim)
            .field("buildings_csv", &self.buildings_csv)
            .field("vehicles_csv", &self.vehicles_csv)
            .finish()
    }
}

fn try_load<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match try_load_optional(lookup, key)? {
        Some(value) => Ok(value),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

fn try_load_optional<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    lookup(key)
        .map(|value| {
            value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                key,
                reason: e.to_string(),
                value,
            })
        })
        .transpose()
}
