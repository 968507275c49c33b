use crate::error::Result;
use crate::model::{DecodeRequest, DecodeResponse, EncodeRequest, EncodeResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Json;

/// `POST /api/v1/encode` — shortens a URL.
///
/// Returns the fully-qualified short URL; 400 when the input is not a
/// well-formed http(s) URL.
pub async fn encode_handler(
    State(state): State<AppState>,
    Json(request): Json<EncodeRequest>,
) -> Result<Json<EncodeResponse>> {
    let code = state.shortener.encode(&request.original_url).await?;

    Ok(Json(EncodeResponse {
        short_url: state.short_url(&code),
    }))
}

/// `POST /api/v1/decode` — resolves a short URL (or bare code) back to the
/// original URL.
///
/// Returns 404 when no mapping exists for the code, 400 when the code
/// portion is not syntactically valid.
pub async fn decode_handler(
    State(state): State<AppState>,
    Json(request): Json<DecodeRequest>,
) -> Result<Json<DecodeResponse>> {
    let original_url = state.shortener.decode(&request.short_url).await?;

    Ok(Json(DecodeResponse { original_url }))
}

/// `GET /{code}` — redirects to the original URL with a 307.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect> {
    let original_url = state.shortener.decode(&code).await?;

    Ok(Redirect::temporary(&original_url))
}
