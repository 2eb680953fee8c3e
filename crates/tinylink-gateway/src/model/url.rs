use serde::{Deserialize, Serialize};
use tinylink_core::Mapping;

#[derive(Deserialize)]
pub struct CreateUrlRequest {
    pub url: String,
}

#[derive(Serialize)]
pub struct CreateUrlResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
}

impl CreateUrlResponse {
    pub fn new(mapping: Mapping, base_url: &str) -> Self {
        Self {
            short_url: mapping.short_code.to_url(base_url),
            short_code: mapping.short_code.into(),
            original_url: mapping.original_url,
        }
    }
}

#[derive(Serialize)]
pub struct GetUrlResponse {
    pub short_code: String,
    pub original_url: String,
}

impl From<Mapping> for GetUrlResponse {
    fn from(mapping: Mapping) -> Self {
        Self {
            short_code: mapping.short_code.into(),
            original_url: mapping.original_url,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
