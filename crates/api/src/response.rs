//! Shared response envelope types for API handlers.
//!
//! Wardrobe endpoints use a `{ "data": ... }` envelope. The public weather
//! and chat endpoints return their payloads bare.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Envelope for saves that may carry an image upload.
///
/// The record is saved even when the upload fails; `image_error` then says
/// why the image is missing.
#[derive(Debug, Serialize)]
pub struct SavedWithImage<T: Serialize> {
    pub data: T,
    pub image_error: Option<String>,
}
