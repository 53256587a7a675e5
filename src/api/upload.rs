//! Image payloads for the predict endpoints.

use log::debug;
use reqwest::multipart::{Form, Part};
use std::path::Path;

use crate::http::{ApiError, ApiResult};
use crate::runtime::Runtime;

/// An image file ready to be sent as a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ImageUpload {
    /// Creates an upload, guessing the MIME type from the file extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_for(&file_name).to_string();
        Self {
            file_name,
            bytes,
            mime_type,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Reads an image from disk.
    #[tracing::instrument(skip(runtime))]
    pub fn from_path<R: Runtime>(runtime: &R, path: &Path) -> ApiResult<Self> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| ApiError::local(format!("Not a file path: {:?}", path)))?;

        let bytes = runtime
            .read(path)
            .map_err(|e| ApiError::local(format!("{:#}", e)))?;

        debug!("Loaded {} ({} bytes)", file_name, bytes.len());
        Ok(Self::new(file_name, bytes))
    }

    /// Wraps the image in a single-part form under the given field name.
    pub fn into_form(self, field: &'static str) -> ApiResult<Form> {
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)
            .map_err(|e| ApiError::local(format!("Invalid MIME type: {}", e)))?;
        Ok(Form::new().part(field, part))
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}
