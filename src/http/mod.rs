//! HTTP client module with per-target configuration and error normalization.

mod client;
mod config;
mod error;

pub use client::HttpClient;
pub use config::{
    BACKEND_TIMEOUT, ClientConfig, DEFAULT_BACKEND_URL, DEFAULT_MODEL_URL, MODEL_TIMEOUT,
};
pub use error::{
    ApiError, ApiResult, GENERIC_LOCAL_MESSAGE, GENERIC_SERVER_MESSAGE, UNREACHABLE_MESSAGE,
};
