//! Presigned document uploads.
//!
//! Uploading is two steps: ask the backend for a presigned URL, then send the
//! bytes straight to storage. The backend may omit the object key or public
//! URL for S3 uploads; both can be derived from the presigned URL.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

/// Storage folder for an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadPrefix {
    /// Identity documents sent during registration.
    #[default]
    Kyc,
    /// Product media.
    Products,
}

impl AsRef<str> for UploadPrefix {
    fn as_ref(&self) -> &str {
        match self {
            Self::Kyc => "kyc",
            Self::Products => "products",
        }
    }
}

impl std::fmt::Display for UploadPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for UploadPrefix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kyc" => Ok(Self::Kyc),
            "products" => Ok(Self::Products),
            _ => Err(format!("Unknown upload prefix: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    S3,
    Local,
}

/// Body of `POST /public/uploads-presign`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignRequest {
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
    pub prefix: UploadPrefix,
}

/// Presigned upload target returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignResponse {
    pub mode: StorageMode,
    pub upload_url: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub public_url: Option<String>,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub expires_in_seconds: Option<u64>,
}

fn default_method() -> String {
    "PUT".to_string()
}

/// Where an uploaded file ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub mode: StorageMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
}

impl PresignResponse {
    /// Resolves the upload result, deriving a missing S3 key or public URL
    /// from the presigned URL.
    pub fn into_result(self) -> UploadResult {
        let parsed = match (self.mode, &self.key, &self.public_url) {
            (StorageMode::S3, None, _) | (StorageMode::S3, _, None) => {
                match Url::parse(&self.upload_url) {
                    Ok(url) => Some(url),
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            upload_url = %self.upload_url,
                            "Could not parse presigned URL"
                        );
                        None
                    }
                }
            }
            _ => None,
        };

        let key = self.key.or_else(|| {
            parsed
                .as_ref()
                .map(|url| url.path().trim_start_matches('/').to_string())
        });

        let public_url = self.public_url.or_else(|| {
            parsed.map(|mut url| {
                url.set_query(None);
                url.to_string()
            })
        });

        UploadResult {
            mode: self.mode,
            key,
            public_url,
        }
    }
}
