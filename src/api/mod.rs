//! Typed wrappers around the backend and model service endpoints.
//!
//! Each backend target gets its own explicitly constructed client. The
//! traits exist so that code consuming the clients can be tested without a
//! server.

mod backend;
mod model;
mod types;
mod upload;

use async_trait::async_trait;

use crate::http::ApiResult;

pub use backend::{BackendClient, DEFAULT_API_PREFIX};
pub use model::ModelClient;
pub use types::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DeleteResult, EnsemblePrediction, HealthStatus, ModelStatus,
    ModelVote, PickedVote, PredictionResult, ResultDetail, ResultItem, ResultsPage, ResultsQuery,
    SortOrder, SourceItem, UntypedPayload,
};
pub use upload::ImageUpload;

/// Operations offered by the results backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiagnosisApi: Send + Sync {
    /// Upload an image and get the diagnosis for it.
    async fn predict(&self, upload: ImageUpload) -> ApiResult<PredictionResult>;

    /// List stored results, one page at a time.
    async fn list_results(&self, query: &ResultsQuery) -> ApiResult<ResultsPage>;

    async fn get_result(&self, id: u64) -> ApiResult<ResultDetail>;

    async fn delete_result(&self, id: u64) -> ApiResult<DeleteResult>;

    async fn model_status(&self) -> ApiResult<ModelStatus>;

    /// Raw model metadata. The shape depends on the deployed model.
    async fn model_info(&self) -> ApiResult<UntypedPayload>;

    async fn health(&self) -> ApiResult<HealthStatus>;
}

/// Operations offered by the model inference service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnsembleApi: Send + Sync {
    /// Run every classifier on one image.
    async fn predict(&self, upload: ImageUpload) -> ApiResult<EnsemblePrediction>;

    async fn health(&self) -> ApiResult<bool>;
}
