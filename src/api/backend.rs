//! Client for the results backend.

use async_trait::async_trait;
use log::{debug, info};

use crate::http::{ApiResult, ClientConfig, HttpClient};

use super::{
    DeleteResult, DiagnosisApi, HealthStatus, ImageUpload, ModelStatus, PredictionResult,
    ResultDetail, ResultsPage, ResultsQuery, UntypedPayload,
};

/// Route prefix the backend mounts its API under. Health stays at the root.
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Multipart field the backend reads the image from.
const UPLOAD_FIELD: &str = "file";

/// Backend-bound client.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http_client: HttpClient,
    api_prefix: String,
}

impl BackendClient {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        Ok(Self::from_http_client(
            HttpClient::from_config(config)?,
            DEFAULT_API_PREFIX,
        ))
    }

    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_prefix: &str) -> Self {
        let api_prefix = format!("/{}", api_prefix.trim_matches('/'));
        let api_prefix = if api_prefix == "/" {
            String::new()
        } else {
            api_prefix
        };
        Self {
            http_client,
            api_prefix,
        }
    }

    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }

    fn api_path(&self, path: &str) -> String {
        format!("{}{}", self.api_prefix, path)
    }
}

#[async_trait]
impl DiagnosisApi for BackendClient {
    #[tracing::instrument(skip(self, upload), fields(file = %upload.file_name))]
    async fn predict(&self, upload: ImageUpload) -> ApiResult<PredictionResult> {
        debug!(
            "Uploading {} ({} bytes) for prediction...",
            upload.file_name,
            upload.bytes.len()
        );
        let form = upload.into_form(UPLOAD_FIELD)?;
        let result: PredictionResult = self
            .http_client
            .post_multipart(&self.api_path("/predict"), form)
            .await?;
        info!(
            "Predicted {} ({:.2}) as result {}",
            result.class_name, result.confidence, result.id
        );
        Ok(result)
    }

    #[tracing::instrument(skip(self))]
    async fn list_results(&self, query: &ResultsQuery) -> ApiResult<ResultsPage> {
        self.http_client
            .get_json_with_query(&self.api_path("/results"), &query.to_params())
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_result(&self, id: u64) -> ApiResult<ResultDetail> {
        self.http_client
            .get_json(&self.api_path(&format!("/results/{}", id)))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_result(&self, id: u64) -> ApiResult<DeleteResult> {
        let result: DeleteResult = self
            .http_client
            .delete_json(&self.api_path(&format!("/results/{}", id)))
            .await?;
        debug!("Delete result {}: deleted={}", result.id, result.deleted);
        Ok(result)
    }

    #[tracing::instrument(skip(self))]
    async fn model_status(&self) -> ApiResult<ModelStatus> {
        self.http_client
            .get_json(&self.api_path("/model/status"))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn model_info(&self) -> ApiResult<UntypedPayload> {
        self.http_client.get_json(&self.api_path("/model/info")).await
    }

    #[tracing::instrument(skip(self))]
    async fn health(&self) -> ApiResult<HealthStatus> {
        self.http_client.get_json("/health").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SortOrder;
    use crate::http::{ApiError, UNREACHABLE_MESSAGE};
    use mockito::Matcher;
    use reqwest::Client;

    fn backend_for(url: &str) -> BackendClient {
        BackendClient::from_http_client(HttpClient::new(Client::new(), url).unwrap(), "/api")
    }

    #[test]
    fn test_api_prefix_normalization() {
        let http = HttpClient::new(Client::new(), "http://localhost:8000").unwrap();
        assert_eq!(
            BackendClient::from_http_client(http.clone(), "api/").api_prefix(),
            "/api"
        );
        assert_eq!(
            BackendClient::from_http_client(http.clone(), "/v2/api").api_prefix(),
            "/v2/api"
        );
        assert_eq!(BackendClient::from_http_client(http, "/").api_prefix(), "");
    }

    #[tokio::test]
    async fn test_predict_uploads_file_field() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/predict")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data".into()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="file"; filename="apple.jpg""#.into()),
                Matcher::Regex("Content-Type: image/jpeg".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": 41,
                    "class_name": "Apple___Apple_scab",
                    "confidence": 0.92,
                    "recomm": "Remove infected leaves and apply fungicide.",
                    "image_path": "Backend/uploads/img_1_apple.jpg",
                    "sources": [{"source": "rag/docs/apple.pdf", "page": 2}]
                }"#,
            )
            .create_async()
            .await;

        let backend = backend_for(&server.url());
        let result = backend
            .predict(ImageUpload::new("apple.jpg", b"jpeg-bytes".to_vec()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.id, 41);
        assert_eq!(result.class_name, "Apple___Apple_scab");
        assert_eq!(result.sources.len(), 1);
        assert!(result.detailed_prediction.is_none());
    }

    #[tokio::test]
    async fn test_list_results_sends_exact_params() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api/results")
            .match_query(Matcher::Exact("page=2&size=10&order=asc".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "total": 12,
                    "page": 2,
                    "size": 10,
                    "items": [
                        {"id": 11, "class_name": "Corn___Common_rust", "image_path": "a.jpg", "created_at": "2024-05-01T10:00:00"},
                        {"id": 12, "class_name": "Corn___healthy", "image_path": "b.jpg", "created_at": "2024-05-02T10:00:00"}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let backend = backend_for(&server.url());
        let query = ResultsQuery::new(2, 10).with_order(SortOrder::Asc);
        let page = backend.list_results(&query).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.page, 2);
        assert!(page.items.len() <= 10);
        assert_eq!(page.items[0].id, 11);
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn test_list_results_with_class_filter() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api/results")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("size".into(), "20".into()),
                Matcher::UrlEncoded("order".into(), "desc".into()),
                Matcher::UrlEncoded("class_name".into(), "Pepper,_bell___healthy".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"total": 0, "page": 1, "size": 20, "items": []}"#)
            .create_async()
            .await;

        let backend = backend_for(&server.url());
        let query = ResultsQuery::default().with_class_name("Pepper,_bell___healthy");
        let page = backend.list_results(&query).await.unwrap();

        mock.assert_async().await;
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_get_result() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api/results/5")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": 5,
                    "class_name": "Grape___Black_rot",
                    "recomm": "Prune and spray.",
                    "image_path": "x.jpg",
                    "created_at": "2024-05-01T10:00:00",
                    "updated_at": "2024-05-01T10:00:00",
                    "class_info": {"query_terms": ["grape", "black rot"]}
                }"#,
            )
            .create_async()
            .await;

        let backend = backend_for(&server.url());
        let detail = backend.get_result(5).await.unwrap();

        mock.assert_async().await;
        assert_eq!(detail.class_name, "Grape___Black_rot");
        assert_eq!(detail.class_info.unwrap()["query_terms"][1], "black rot");
    }

    #[tokio::test]
    async fn test_get_result_not_found() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/api/results/404")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "not found"}"#)
            .create_async()
            .await;

        let backend = backend_for(&server.url());
        let err = backend.get_result(404).await.unwrap_err();

        assert_eq!(err, ApiError::new("not found", 404));
    }

    #[tokio::test]
    async fn test_delete_result() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("DELETE", "/api/results/9")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 9, "deleted": true}"#)
            .create_async()
            .await;

        let backend = backend_for(&server.url());
        let result = backend.delete_result(9).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, DeleteResult { id: 9, deleted: true });
    }

    #[tokio::test]
    async fn test_model_status_and_info() {
        let mut server = mockito::Server::new_async().await;

        let status_mock = server
            .mock("GET", "/api/model/status")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"model_loaded": true, "model_available": false, "status": "ready"}"#)
            .create_async()
            .await;
        let info_mock = server
            .mock("GET", "/api/model/info")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"classes": 38, "backbones": ["mobilenet_v2", "resnet50"]}"#)
            .create_async()
            .await;

        let backend = backend_for(&server.url());
        let status = backend.model_status().await.unwrap();
        let info = backend.model_info().await.unwrap();

        status_mock.assert_async().await;
        info_mock.assert_async().await;
        assert!(status.model_loaded);
        assert!(!status.model_available);
        assert_eq!(info.get("classes").unwrap(), 38);
    }

    #[tokio::test]
    async fn test_health_is_not_prefixed() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/health")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"status": "healthy", "service": "Leaf-Disease-Detection-API", "timestamp": "2024-01-01T12:00:00Z", "version": "1.0.0"}"#,
            )
            .create_async()
            .await;

        let backend = backend_for(&server.url());
        let health = backend.health().await.unwrap();

        mock.assert_async().await;
        assert!(health.is_healthy());
        assert_eq!(health.version.as_deref(), Some("1.0.0"));
    }

    #[tokio::test]
    async fn test_normalization_is_identical_across_endpoints() {
        let mut server = mockito::Server::new_async().await;

        let _predict = server
            .mock("POST", "/api/predict")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "classifier error"}"#)
            .create_async()
            .await;
        let _results = server
            .mock("GET", "/api/results")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "classifier error"}"#)
            .create_async()
            .await;

        let backend = backend_for(&server.url());
        let predict_err = backend
            .predict(ImageUpload::new("leaf.png", vec![0]))
            .await
            .unwrap_err();
        let list_err = backend
            .list_results(&ResultsQuery::default())
            .await
            .unwrap_err();

        assert_eq!(predict_err, ApiError::new("classifier error", 500));
        assert_eq!(predict_err, list_err);
    }

    #[tokio::test]
    async fn test_unreachable_backend_across_endpoints() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = backend_for(&format!("http://{}", addr));
        let predict_err = backend
            .predict(ImageUpload::new("leaf.png", vec![0]))
            .await
            .unwrap_err();
        let delete_err = backend.delete_result(1).await.unwrap_err();

        assert_eq!(predict_err, ApiError::new(UNREACHABLE_MESSAGE, 0));
        assert_eq!(predict_err, delete_err);
    }
}
