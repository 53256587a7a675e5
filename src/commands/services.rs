//! Service factory for building clients from configuration.
//!
//! Clients are constructed here, once per backend target, and passed to the
//! commands that need them. Nothing is kept in module-level state.

use anyhow::{Context, Result};

use crate::{
    api::{BackendClient, ModelClient},
    dev_proxy::DevProxy,
    http::HttpClient,
};

use super::config::Config;

/// Build the results backend client from configuration
pub fn build_backend(config: &Config) -> Result<BackendClient> {
    let http_client =
        HttpClient::from_config(&config.backend).context("Failed to build backend client")?;
    Ok(BackendClient::from_http_client(
        http_client,
        &config.api_prefix,
    ))
}

/// Build the model service client from configuration
pub fn build_model(config: &Config) -> Result<ModelClient> {
    ModelClient::new(&config.model).context("Failed to build model service client")
}

/// Build the development proxy from configuration
pub fn build_proxy(config: &Config) -> Result<DevProxy> {
    DevProxy::new(config.proxy.clone())
}
