//! Remote calls made by the page: the client configuration served by our own
//! backend, and the two imgflip endpoints.
//!
//! Every failure is folded into an `ApiError`; callers decide how (and whether)
//! to tell the user.

use common::error::ApiError;
use common::model::template::MemeTemplate;
use common::requests::{ApiConfig, CaptionData, CaptionRequest, CatalogData, ImgflipResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

const CONFIG_PATH: &str = "/api/config";

pub async fn fetch_config() -> Result<ApiConfig, ApiError> {
    let response = send(Request::get(CONFIG_PATH)).await?;
    response
        .json::<ApiConfig>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET get_memes`: the whole template catalog.
pub async fn fetch_templates(config: &ApiConfig) -> Result<Vec<MemeTemplate>, ApiError> {
    let data: CatalogData = fetch_envelope(Request::get(&config.catalog_url())).await?;
    Ok(data.memes)
}

/// `GET caption_image`: renders `request` server-side and returns the image URL.
pub async fn caption_image(config: &ApiConfig, request: &CaptionRequest) -> Result<String, ApiError> {
    let pairs = request.query_pairs(&config.credentials);
    let builder = Request::get(&config.caption_url())
        .query(pairs.iter().map(|(key, value)| (key.as_str(), value.as_str())));
    let data: CaptionData = fetch_envelope(builder).await?;
    Ok(data.url)
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

async fn fetch_envelope<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = send(builder).await?;
    let envelope = response
        .json::<ImgflipResponse<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope.into_result()
}
