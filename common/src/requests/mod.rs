//! Wire types for the imgflip API and for the client configuration served by
//! the backend.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::model::template::MemeTemplate;

pub const DEFAULT_API_BASE: &str = "https://api.imgflip.com";

/// Static account credentials sent with every caption request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Client configuration, returned by `GET /api/config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub api_base: String,
    pub credentials: Credentials,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            credentials: Credentials::default(),
        }
    }
}

impl ApiConfig {
    pub fn catalog_url(&self) -> String {
        format!("{}/get_memes", self.api_base.trim_end_matches('/'))
    }

    pub fn caption_url(&self) -> String {
        format!("{}/caption_image", self.api_base.trim_end_matches('/'))
    }
}

/// Parameters of one `caption_image` call: a template and its box texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionRequest {
    pub template_id: String,
    pub boxes: Vec<String>,
}

impl CaptionRequest {
    /// Query string pairs in the bracketed form the API expects
    /// (`boxes[0][text]=...`). Every box is sent, empty ones included.
    pub fn query_pairs(&self, credentials: &Credentials) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(3 + self.boxes.len());
        pairs.push(("template_id".to_string(), self.template_id.clone()));
        pairs.push(("username".to_string(), credentials.username.clone()));
        pairs.push(("password".to_string(), credentials.password.clone()));
        for (index, text) in self.boxes.iter().enumerate() {
            pairs.push((format!("boxes[{}][text]", index), text.clone()));
        }
        pairs
    }
}

/// Envelope shared by every imgflip response.
#[derive(Debug, Clone, Deserialize)]
pub struct ImgflipResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error_message: Option<String>,
}

impl<T> ImgflipResponse<T> {
    /// `success: false`, or a success without payload, is an error.
    pub fn into_result(self) -> Result<T, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(ApiError::Decode("missing data".to_string())),
            (false, _) => Err(ApiError::Rejected(
                self.error_message.unwrap_or_else(|| "unknown error".to_string()),
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogData {
    pub memes: Vec<MemeTemplate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionData {
    pub url: String,
    #[serde(default)]
    pub page_url: Option<String>,
}
