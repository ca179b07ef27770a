//! Server configuration.
//!
//! Leptos options come from `get_configuration` (the workspace
//! `[[workspace.metadata.leptos]]` table or `LEPTOS_*` env vars). `PORT`
//! overrides the listen port and binds on all interfaces.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;
use std::path::PathBuf;

use leptos::config::{LeptosOptions, get_configuration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("invalid PORT `{value}`")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub leptos: LeptosOptions,
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build typed server config from Leptos options and the environment.
    ///
    /// Optional:
    /// - `PORT`: listen on `0.0.0.0:<PORT>` instead of the Leptos `site_addr`
    pub fn from_env() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let leptos = conf.leptos_options;
        let addr = resolve_addr(leptos.site_addr, std::env::var("PORT").ok().as_deref())?;
        Ok(Self { leptos, addr })
    }

    /// Directory holding `pkg/` and the copied static assets.
    pub fn site_root(&self) -> PathBuf {
        PathBuf::from(self.leptos.site_root.as_ref())
    }
}

fn resolve_addr(site_addr: SocketAddr, port: Option<&str>) -> Result<SocketAddr, ConfigError> {
    match port.map(str::trim) {
        None | Some("") => Ok(site_addr),
        Some(raw) => {
            let port = raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw.to_owned() })?;
            Ok(SocketAddr::from(([0, 0, 0, 0], port)))
        }
    }
}
