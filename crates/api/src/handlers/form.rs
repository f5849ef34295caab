//! Multipart form parsing shared by the item and profile handlers.

use axum::extract::Multipart;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Name of the JSON part carrying the record fields.
pub const RECORD_FIELD: &str = "item";

/// Name of the file part carrying an image.
pub const IMAGE_FIELD: &str = "image";

/// An uploaded image, not yet stored.
#[derive(Debug)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Parsed multipart form: the record JSON plus an optional image.
#[derive(Debug)]
pub struct RecordForm<T> {
    pub record: T,
    pub image: Option<ImageUpload>,
}

/// Read a form with a required JSON `item` part and an optional `image`
/// part. Unknown parts are ignored; an empty image part counts as absent.
pub async fn read_record_form<T: DeserializeOwned>(
    mut multipart: Multipart,
) -> AppResult<RecordForm<T>> {
    let mut record: Option<T> = None;
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            RECORD_FIELD => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let parsed = serde_json::from_str(&text).map_err(|e| {
                    AppError::BadRequest(format!("Invalid '{RECORD_FIELD}' JSON: {e}"))
                })?;
                record = Some(parsed);
            }
            IMAGE_FIELD => image = read_image(field).await?,
            _ => {}
        }
    }

    let record = record.ok_or_else(|| {
        AppError::BadRequest(format!("Missing required '{RECORD_FIELD}' field"))
    })?;
    Ok(RecordForm { record, image })
}

/// Read a form whose only meaningful part is a required `image`.
pub async fn read_image_form(mut multipart: Multipart) -> AppResult<ImageUpload> {
    let mut image = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some(IMAGE_FIELD) {
            image = read_image(field).await?;
        }
    }
    image.ok_or_else(|| AppError::BadRequest(format!("Missing required '{IMAGE_FIELD}' field")))
}

async fn read_image(field: axum::extract::multipart::Field<'_>) -> AppResult<Option<ImageUpload>> {
    let filename = field.file_name().unwrap_or("upload").to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(ImageUpload {
        filename,
        bytes: bytes.to_vec(),
    }))
}
