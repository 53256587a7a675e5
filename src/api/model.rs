//! Client for the model inference service.

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

use crate::http::{ApiError, ApiResult, ClientConfig, HttpClient};

use super::{EnsembleApi, EnsemblePrediction, ImageUpload};

/// Multipart field the model service reads images from.
const UPLOAD_FIELD: &str = "files";

/// Model service response types (internal).
mod wire {
    use super::*;

    #[derive(Deserialize, Debug, Default)]
    #[serde(default)]
    pub struct PredictResponse {
        pub results: Vec<EnsemblePrediction>,
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(default)]
    pub struct Health {
        pub ok: bool,
    }
}

/// Model-service-bound client.
#[derive(Clone, Debug)]
pub struct ModelClient {
    http_client: HttpClient,
}

impl ModelClient {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        Ok(Self::from_http_client(HttpClient::from_config(config)?))
    }

    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl EnsembleApi for ModelClient {
    #[tracing::instrument(skip(self, upload), fields(file = %upload.file_name))]
    async fn predict(&self, upload: ImageUpload) -> ApiResult<EnsemblePrediction> {
        let form = upload.into_form(UPLOAD_FIELD)?;
        let response: wire::PredictResponse = self
            .http_client
            .post_multipart("/api/predict", form)
            .await?;

        debug!("Model service returned {} result(s)", response.results.len());
        response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::local("Model service returned no prediction"))
    }

    #[tracing::instrument(skip(self))]
    async fn health(&self) -> ApiResult<bool> {
        let health: wire::Health = self.http_client.get_json("/api/health").await?;
        Ok(health.ok)
    }
}
