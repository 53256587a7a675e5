use anyhow::Result;
use log::warn;
use std::io::Write;

use crate::api::{DiagnosisApi, ResultsQuery};

use super::print_json;

/// Print one page of stored results.
#[tracing::instrument(skip(api, out))]
pub async fn list_results<A: DiagnosisApi + ?Sized, W: Write>(
    api: &A,
    query: &ResultsQuery,
    out: &mut W,
) -> Result<()> {
    let page = api.list_results(query).await?;
    print_json(out, &page)
}

#[tracing::instrument(skip(api, out))]
pub async fn show_result<A: DiagnosisApi + ?Sized, W: Write>(
    api: &A,
    id: u64,
    out: &mut W,
) -> Result<()> {
    let detail = api.get_result(id).await?;
    print_json(out, &detail)
}

#[tracing::instrument(skip(api, out))]
pub async fn delete_result<A: DiagnosisApi + ?Sized, W: Write>(
    api: &A,
    id: u64,
    out: &mut W,
) -> Result<()> {
    let result = api.delete_result(id).await?;
    if !result.deleted {
        warn!("Result {} was not deleted (it may not exist)", id);
    }
    print_json(out, &result)
}
