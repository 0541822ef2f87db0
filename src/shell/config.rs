use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub bind_addr: SocketAddr,
    /// Identity to sign the in-memory provider in with at start-up.
    pub signed_in_uid: Option<String>,
    pub default_categories: Vec<String>,
}

impl ShellConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("LABOUR_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid {
                name: "LABOUR_BIND_ADDR",
                value: bind_addr.clone(),
            })?;

        let signed_in_uid = lookup("LABOUR_SIGNED_IN_UID")
            .map(|uid| uid.trim().to_string())
            .filter(|uid| !uid.is_empty());

        let default_categories = lookup("LABOUR_DEFAULT_CATEGORIES")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            signed_in_uid,
            default_categories,
        })
    }
}
