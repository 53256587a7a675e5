//! Development proxy: forwards same-origin paths to the backend host.
//!
//! Only used while developing against a local or tunnelled backend. Paths
//! are matched by prefix, in rule order, and replayed against the rule's
//! upstream target unchanged. Upstream responses, including error statuses,
//! pass through untouched.

use anyhow::{Context, Result};
use log::{debug, error};
use reqwest::header::{CONNECTION, CONTENT_LENGTH, HOST, HeaderMap};
use reqwest::{Client, Method, StatusCode, Url, redirect};

/// Upstream used when no target is configured.
pub const DEFAULT_PROXY_TARGET: &str = "http://localhost:8000";

/// Path prefixes forwarded by default.
pub const DEFAULT_PREFIXES: &[&str] = &["/api", "/health"];

/// Forwarding rule for one path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRule {
    pub prefix: String,
    pub target: String,
    /// Rewrite the Host header to the target's host.
    pub change_origin: bool,
    /// Verify the upstream TLS certificate.
    pub secure: bool,
}

impl ProxyRule {
    pub fn new(prefix: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            target: target.into(),
            change_origin: true,
            secure: false,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub rules: Vec<ProxyRule>,
    /// Log every forwarded request and response.
    pub debug: bool,
}

impl ProxyConfig {
    /// Default rules (`/api`, `/health`) pointed at `target`.
    pub fn new(target: Option<String>, debug: bool) -> Self {
        let target = target.unwrap_or_else(|| DEFAULT_PROXY_TARGET.to_string());
        let rules = DEFAULT_PREFIXES
            .iter()
            .map(|prefix| ProxyRule::new(*prefix, target.clone()))
            .collect();
        Self { rules, debug }
    }

    pub fn rule_for(&self, path: &str) -> Option<&ProxyRule> {
        self.rules.iter().find(|rule| rule.matches(path))
    }

    /// Upstream URL for a request path, or `None` if no rule matches.
    pub fn resolve(&self, path_and_query: &str) -> Option<Url> {
        let rule = self.rule_for(path_and_query)?;
        Url::parse(&format!(
            "{}{}",
            rule.target.trim_end_matches('/'),
            path_and_query
        ))
        .ok()
    }
}

/// Response relayed from the upstream.
#[derive(Debug, Clone)]
pub struct ForwardedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// One-shot forwarder for [`ProxyConfig`] rules.
pub struct DevProxy {
    config: ProxyConfig,
    verifying: Client,
    permissive: Client,
}

impl DevProxy {
    pub fn new(config: ProxyConfig) -> Result<Self> {
        let verifying = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .context("Failed to build proxy client")?;
        let permissive = Client::builder()
            .redirect(redirect::Policy::none())
            .danger_accept_invalid_certs(true)
            .build()
            .context("Failed to build proxy client")?;

        Ok(Self {
            config,
            verifying,
            permissive,
        })
    }

    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Replays one request against the matching upstream.
    #[tracing::instrument(skip(self, headers, body))]
    pub async fn forward(
        &self,
        method: Method,
        path_and_query: &str,
        mut headers: HeaderMap,
        body: Vec<u8>,
    ) -> Result<ForwardedResponse> {
        let rule = self
            .config
            .rule_for(path_and_query)
            .with_context(|| format!("No proxy rule matches {}", path_and_query))?;
        let url = self
            .config
            .resolve(path_and_query)
            .with_context(|| format!("Invalid upstream URL for {}", path_and_query))?;

        if rule.change_origin {
            headers.remove(HOST);
        }
        headers.remove(CONNECTION);
        headers.remove(CONTENT_LENGTH);

        if self.config.debug {
            debug!("Proxy request: {} {} -> {}", method, path_and_query, rule.target);
        }

        let client = if rule.secure {
            &self.verifying
        } else {
            &self.permissive
        };

        let response = client
            .request(method, url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .inspect_err(|e| {
                error!("Proxy error: {}", e);
                error!("  request: {}", path_and_query);
                error!("  target: {}", rule.target);
            })
            .context("Failed to reach proxy target")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .context("Failed to read upstream response")?
            .to_vec();

        if self.config.debug {
            debug!("Proxy response: {} {}", status.as_u16(), path_and_query);
        }

        Ok(ForwardedResponse {
            status,
            headers,
            body,
        })
    }
}
