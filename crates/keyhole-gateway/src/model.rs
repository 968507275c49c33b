pub mod url;

pub use url::{DecodeRequest, DecodeResponse, EncodeRequest, EncodeResponse};

use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
