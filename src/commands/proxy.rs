use anyhow::Result;
use reqwest::Method;
use reqwest::header::HeaderMap;
use std::io::Write;

use crate::dev_proxy::{DevProxy, ProxyConfig};

/// Print where the dev proxy would send a request path.
pub fn route<W: Write>(config: &ProxyConfig, path: &str, out: &mut W) -> Result<()> {
    match config.resolve(path) {
        Some(url) => writeln!(out, "{} -> {}", path, url)?,
        None => anyhow::bail!("No proxy rule matches {}", path),
    }
    Ok(())
}

/// Forward one request without a body and print the upstream status and body.
///
/// Upstream error statuses are printed like any other response.
pub async fn forward<W: Write>(
    proxy: &DevProxy,
    method: Method,
    path: &str,
    out: &mut W,
) -> Result<()> {
    let response = proxy.forward(method, path, HeaderMap::new(), Vec::new()).await?;
    writeln!(out, "{}", response.status)?;
    out.write_all(&response.body)?;
    if !response.body.ends_with(b"\n") {
        writeln!(out)?;
    }
    Ok(())
}
