//! HTTP client bound to one backend target.

use log::debug;
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use super::config::ClientConfig;
use super::error::{ApiError, ApiResult};

/// HTTP client bound to a base URL. Every response passes through the
/// error normalizer before reaching the caller.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Builds a client from a target configuration.
    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(config.default_headers.clone())
            .build()
            .map_err(|e| ApiError::local(format!("Failed to build HTTP client: {}", e)))?;

        Self::new(client, &config.base_url)
    }

    /// Wraps an existing reqwest Client.
    pub fn new(client: Client, base_url: &str) -> ApiResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::local(format!("Invalid base URL '{}': {}", base_url, e)))?;
        Ok(Self { client, base_url })
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins a path onto the base URL.
    ///
    /// Any path already on the base URL is kept, so `http://host/api` plus
    /// `/results` gives `http://host/api/results`.
    pub fn url(&self, path: &str) -> ApiResult<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{}/{}", base, path))
            .map_err(|e| ApiError::local(format!("Invalid request path '{}': {}", path, e)))
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path)?;
        debug!("GET JSON from {}...", url);
        self.send("GET", self.client.get(url)).await
    }

    /// Performs a GET request with query parameters and deserializes the JSON response.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.url(path)?;
        debug!("GET JSON from {} with query {:?}...", url, query);
        self.send("GET", self.client.get(url).query(query)).await
    }

    /// Uploads a multipart form and deserializes the JSON response.
    #[tracing::instrument(skip(self, form))]
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> ApiResult<T> {
        let url = self.url(path)?;
        debug!("POST multipart to {}...", url);
        self.send("POST", self.client.post(url).multipart(form)).await
    }

    /// Performs a DELETE request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path)?;
        debug!("DELETE {}...", url);
        self.send("DELETE", self.client.delete(url)).await
    }

    /// Sends a request and normalizes whatever goes wrong.
    async fn send<T: DeserializeOwned>(&self, method: &str, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await.map_err(|e| {
            debug!("{}: request failed: {}", method, e);
            ApiError::from_transport(&e)
        })?;

        let status = response.status();
        let url = response.url().clone();

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let err = ApiError::from_status(status, &body);
            debug!("{} {} returned {}: {}", method, url, status, err);
            return Err(err);
        }

        let body = response.bytes().await.map_err(|e| {
            debug!("{} {}: failed to read body: {}", method, url, e);
            ApiError::from_transport(&e)
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            debug!("{} {}: undecodable body: {}", method, url, e);
            ApiError::local(format!("Failed to parse JSON response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{GENERIC_SERVER_MESSAGE, UNREACHABLE_MESSAGE};
    use mockito::Matcher;
    use reqwest::multipart::Part;
    use std::io::Write;
    use std::time::Duration;

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct TestResponse {
        name: String,
        value: i32,
    }

    fn client_for(url: &str) -> HttpClient {
        HttpClient::new(Client::new(), url).unwrap()
    }

    #[test]
    fn test_url_join() {
        let client = client_for("http://localhost:8000/api/");
        assert_eq!(
            client.url("/results/3").unwrap().as_str(),
            "http://localhost:8000/api/results/3"
        );

        let client = client_for("http://localhost:8000");
        assert_eq!(
            client.url("health").unwrap().as_str(),
            "http://localhost:8000/health"
        );
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let err = HttpClient::new(Client::new(), "localhost without scheme").unwrap_err();
        assert_eq!(err.status_code, 0);
        assert!(err.message.contains("Invalid base URL"));
    }

    #[tokio::test]
    async fn test_get_json_success() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "test", "value": 42}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let result: TestResponse = client.get_json("/test").await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            result,
            TestResponse {
                name: "test".into(),
                value: 42
            }
        );
    }

    #[tokio::test]
    async fn test_get_json_not_found_is_normalized() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/test")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "not found"}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client
            .get_json::<serde_json::Value>("/test")
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(err, ApiError::new("not found", 404));
    }

    #[tokio::test]
    async fn test_get_json_server_error_without_detail() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/test")
            .with_status(500)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client
            .get_json::<serde_json::Value>("/test")
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::new(GENERIC_SERVER_MESSAGE, 500));
    }

    #[tokio::test]
    async fn test_get_json_with_query_success() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/test")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("size".into(), "10".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"["item1", "item2"]"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let result: Vec<String> = client
            .get_json_with_query("/test", &[("page", "1".into()), ("size", "10".into())])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result, vec!["item1", "item2"]);
    }

    #[tokio::test]
    async fn test_post_multipart_sends_form() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/upload")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".into()),
            )
            .match_body(Matcher::Regex(r#"name="file"; filename="leaf.png""#.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "uploaded", "value": 1}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let form = Form::new().part("file", Part::bytes(b"png".to_vec()).file_name("leaf.png"));
        let result: TestResponse = client.post_multipart("/upload", form).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.name, "uploaded");
    }

    #[tokio::test]
    async fn test_delete_json_success() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("DELETE", "/items/7")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "deleted", "value": 7}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let result: TestResponse = client.delete_json("/items/7").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.value, 7);
    }

    #[tokio::test]
    async fn test_invalid_json_is_local_error() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", "/test")
            .with_status(200)
            .with_body("definitely not json")
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client.get_json::<TestResponse>("/test").await.unwrap_err();

        assert_eq!(err.status_code, 0);
        assert!(err.message.starts_with("Failed to parse JSON response"));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}", addr));
        let err = client
            .get_json::<serde_json::Value>("/health")
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::new(UNREACHABLE_MESSAGE, 0));
    }

    #[tokio::test]
    async fn test_slow_server_times_out_as_unreachable() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/health")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_secs(2));
                w.write_all(br#"{"name": "late", "value": 1}"#)
            })
            .create_async()
            .await;

        let config = ClientConfig::backend(Some(server.url())).with_timeout(Duration::from_millis(200));
        let client = HttpClient::from_config(&config).unwrap();
        let err = client.get_json::<TestResponse>("/health").await.unwrap_err();

        assert_eq!(err, ApiError::unreachable());
    }

    #[tokio::test]
    async fn test_from_config_sends_default_headers() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/health")
            .match_header("accept", "application/json")
            .match_header("user-agent", Matcher::Regex("^agroeye/".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "ok", "value": 0}"#)
            .create_async()
            .await;

        let client = HttpClient::from_config(&ClientConfig::backend(Some(server.url()))).unwrap();
        let _: TestResponse = client.get_json("/health").await.unwrap();

        mock.assert_async().await;
    }
}
