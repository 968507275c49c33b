use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct EncodeRequest {
    pub original_url: String,
}

#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub short_url: String,
}

#[derive(Debug, Deserialize)]
pub struct DecodeRequest {
    /// Either a full short URL or a bare short code.
    pub short_url: String,
}

#[derive(Debug, Serialize)]
pub struct DecodeResponse {
    pub original_url: String,
}
