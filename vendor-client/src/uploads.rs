//! Presigned uploads.

use std::path::Path;

use reqwest::Method;
use vendor_types::{DomainError, PresignRequest, PresignResponse, UploadPrefix, UploadResult};

use crate::{ClientError, VendorClient};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A file ready to be uploaded.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk, inferring the content type from its extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let content_type = content_type_for(path);
        Ok(Self::new(file_name, content_type, bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        Some("pdf") => "application/pdf",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

impl VendorClient {
    /// Asks the backend for a presigned upload target.
    ///
    /// This route is public: only the publishable key is sent.
    pub async fn presign_upload(
        &self,
        file: &UploadFile,
        prefix: UploadPrefix,
    ) -> Result<PresignResponse, ClientError> {
        let content_type = if file.content_type.is_empty() {
            DEFAULT_CONTENT_TYPE.to_string()
        } else {
            file.content_type.clone()
        };
        let req = PresignRequest {
            file_name: file.file_name.clone(),
            content_type,
            size: file.size(),
            prefix,
        };
        tracing::debug!(
            file_name = %req.file_name,
            size = req.size,
            %prefix,
            "Requesting presigned upload"
        );
        let resp = self
            .request(Method::POST, "/public/uploads-presign", false)
            .json(&req)
            .send()
            .await?;
        let body = Self::check(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Uploads a file through a presigned URL.
    pub async fn upload_image(
        &self,
        file: &UploadFile,
        prefix: UploadPrefix,
    ) -> Result<UploadResult, ClientError> {
        let presign = self.presign_upload(file, prefix).await?;

        let method = Method::from_bytes(presign.method.as_bytes())
            .map_err(|_| ClientError::InvalidMethod(presign.method.clone()))?;
        let mut req = self.http.request(method, &presign.upload_url);
        if let Some(headers) = &presign.headers {
            for (name, value) in headers {
                req = req.header(name, value);
            }
        }

        let resp = req.body(file.bytes.clone()).send().await?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "Upload finished");
        if !status.is_success() {
            return Err(ClientError::Upload {
                status: status.as_u16(),
                body,
            });
        }

        let result = presign.into_result();
        tracing::info!(key = ?result.key, public_url = ?result.public_url, "File uploaded");
        Ok(result)
    }

    /// Uploads a file and returns its public URL.
    pub async fn upload_image_and_get_url(
        &self,
        file: &UploadFile,
        prefix: UploadPrefix,
    ) -> Result<String, ClientError> {
        self.upload_image(file, prefix)
            .await?
            .public_url
            .ok_or_else(|| DomainError::MissingPublicUrl.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for(Path::new("ci.PNG")), "image/png");
        assert_eq!(content_type_for(Path::new("tax.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("doc.pdf")), "application/pdf");
        assert_eq!(content_type_for(Path::new("archive")), DEFAULT_CONTENT_TYPE);
    }

    #[tokio::test]
    async fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ci.jpg");
        std::fs::write(&path, b"fake-image").unwrap();

        let file = UploadFile::from_path(&path).await.unwrap();
        assert_eq!(file.file_name, "ci.jpg");
        assert_eq!(file.content_type, "image/jpeg");
        assert_eq!(file.size(), 10);
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let result = UploadFile::from_path("/definitely/not/here.png").await;
        assert!(matches!(result, Err(ClientError::Io(_))));
    }
}
