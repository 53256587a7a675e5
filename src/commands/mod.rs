//! Command implementations behind the `agroeye` binary.
//!
//! Commands receive their clients and an output sink explicitly so they can
//! run against mocks in tests.

pub mod config;
mod disease;
mod model;
mod predict;
mod proxy;
mod results;
pub mod services;

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use crate::http::ApiError;

pub use disease::{disease, list_diseases};
pub use model::{health, model_health, model_info, model_status, probe};
pub use predict::{predict, predict_ensemble};
pub use proxy::{forward, route};
pub use results::{delete_result, list_results, show_result};

/// Writes a value as pretty-printed JSON followed by a newline.
pub(crate) fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    writeln!(out, "{}", json).context("Failed to write output")?;
    Ok(())
}

/// One-line description of a command failure for the terminal.
pub fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ApiError>() {
        Some(api) if api.status_code == 0 => format!("Error: {}", api.message),
        Some(api) => format!("Error: {} (status {})", api.message, api.status_code),
        None => format!("Error: {:#}", err),
    }
}
