use anyhow::Result;
use std::io::Write;

use crate::api::{DiagnosisApi, EnsembleApi};

use super::print_json;

#[tracing::instrument(skip(api, out))]
pub async fn model_status<A: DiagnosisApi + ?Sized, W: Write>(api: &A, out: &mut W) -> Result<()> {
    let status = api.model_status().await?;
    print_json(out, &status)
}

#[tracing::instrument(skip(api, out))]
pub async fn model_info<A: DiagnosisApi + ?Sized, W: Write>(api: &A, out: &mut W) -> Result<()> {
    let info = api.model_info().await?;
    print_json(out, &info)
}

#[tracing::instrument(skip(api, out))]
pub async fn health<A: DiagnosisApi + ?Sized, W: Write>(api: &A, out: &mut W) -> Result<()> {
    let health = api.health().await?;
    print_json(out, &health)
}

/// Model service liveness, printed as `{"ok": bool}`.
#[tracing::instrument(skip(api, out))]
pub async fn model_health<A: EnsembleApi + ?Sized, W: Write>(api: &A, out: &mut W) -> Result<()> {
    let ok = api.health().await?;
    print_json(out, &serde_json::json!({ "ok": ok }))
}

/// Report reachability. Never fails on an unreachable backend.
#[tracing::instrument(skip(api, out))]
pub async fn probe<A: DiagnosisApi + ?Sized, W: Write>(api: &A, out: &mut W) -> Result<()> {
    let state = if crate::probe::is_reachable(api).await {
        "reachable"
    } else {
        "unreachable"
    };
    writeln!(out, "backend: {}", state)?;
    Ok(())
}
