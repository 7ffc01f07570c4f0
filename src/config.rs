use std::env;
use std::net::{IpAddr, SocketAddr};
use anyhow::{Context, Result};

#[derive(Debug)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = var("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = var("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            service_port,
            service_host,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .service_host
            .parse::<IpAddr>()
            .with_context(|| format!("SERVICE_HOST '{}' is not a valid IP address", self.service_host))?;
        Ok(SocketAddr::new(ip, self.service_port))
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
