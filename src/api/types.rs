//! Request and response shapes of the backend and model services.
//!
//! Response fields default when missing so that a partial body surfaces as
//! empty values instead of a decode failure.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::http::{ApiError, ApiResult};

/// Default page requested by [`ResultsQuery`].
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size requested by [`ResultsQuery`].
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Reads an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One retrieved document that backs a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SourceItem {
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    pub page: Option<u32>,
    pub score: Option<f64>,
    pub snippet: Option<String>,
    pub title: Option<String>,
}

/// Label and confidence from a single classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelVote {
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: f64,
}

/// The label the ensemble settled on, and which model it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PickedVote {
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: f64,
}

/// Per-model breakdown of one classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EnsemblePrediction {
    #[serde(deserialize_with = "null_as_default")]
    pub mobilenet: ModelVote,
    #[serde(deserialize_with = "null_as_default")]
    pub resnet50: ModelVote,
    #[serde(deserialize_with = "null_as_default")]
    pub picked: PickedVote,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ensemble: Option<ModelVote>,
    /// Diagnostics (entropy, timings, gate signals). Shape varies by model build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

/// Result of uploading an image to the backend for diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PredictionResult {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub class_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: f64,
    /// Recommendation text generated for the predicted class.
    #[serde(deserialize_with = "null_as_default")]
    pub recomm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sources: Vec<SourceItem>,
    pub detailed_prediction: Option<EnsemblePrediction>,
}

impl PredictionResult {
    /// The backend answers `Unknown` when the models disagree or are unsure.
    pub fn is_unknown(&self) -> bool {
        self.class_name == "Unknown"
    }
}

/// Summary row in a page of stored results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResultItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub class_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

/// One page of stored results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResultsPage {
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub size: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<ResultItem>,
}

impl ResultsPage {
    /// Whether a later page can hold more items.
    pub fn has_next(&self) -> bool {
        u64::from(self.page) * u64::from(self.size) < self.total
    }
}

/// Full record of one stored result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResultDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub class_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub recomm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    pub class_info: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeleteResult {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub model_loaded: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub model_available: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HealthStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}

/// A response body whose shape is not fixed.
///
/// Callers must narrow it with [`UntypedPayload::narrow`] or inspect fields
/// through [`UntypedPayload::get`] before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct UntypedPayload(serde_json::Value);

impl UntypedPayload {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Converts the payload into a concrete type.
    pub fn narrow<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_value(self.0.clone())
            .map_err(|e| ApiError::local(format!("Unexpected payload shape: {}", e)))
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

/// Sort order of stored results by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => anyhow::bail!("Unknown sort order: {}. Expected asc or desc.", s),
        }
    }
}

/// Parameters of a results listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsQuery {
    pub page: u32,
    pub size: u32,
    pub class_name: Option<String>,
    pub order: SortOrder,
}

impl Default for ResultsQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            class_name: None,
            order: SortOrder::default(),
        }
    }
}

impl ResultsQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            ..Self::default()
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Query parameters as sent on the wire. `class_name` is left out when unset.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("order", self.order.to_string()),
        ];
        if let Some(class_name) = &self.class_name {
            params.push(("class_name", class_name.clone()));
        }
        params
    }
}
