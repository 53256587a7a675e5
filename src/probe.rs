//! Best-effort connectivity probe for diagnostics.

use log::{info, warn};

use crate::api::DiagnosisApi;

/// Issues a health check and reports whether the backend answered.
///
/// Every failure maps to `false`. Meant for diagnostic logging only; callers
/// should not gate behavior on it.
#[tracing::instrument(skip(api))]
pub async fn is_reachable<A: DiagnosisApi + ?Sized>(api: &A) -> bool {
    match api.health().await {
        Ok(health) => {
            info!("Backend reachable (status: {})", health.status);
            true
        }
        Err(e) => {
            warn!("Backend unreachable: {} (status {})", e.message, e.status_code);
            false
        }
    }
}
