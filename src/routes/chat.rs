use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    message::ChatResponse,
    services::{
        fallback::resolve_reply,
        metrics_manager::MetricsData,
        uploads::{save_image, validate_image},
    },
    state::SharedState,
};

/// Accepts `multipart/form-data` with an optional `message` text field and an
/// optional `image` file field.
pub async fn chat_handler(
    State(state): State<SharedState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ChatResponse>> {
    let mut multipart =
        multipart.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let mut message = String::new();
    let mut upload: Option<(Option<String>, Bytes)> = None;

    // Nothing touches the disk until every field has been read and checked.
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("message") => message = field.text().await?,
            Some("image") => {
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await?;
                if bytes.is_empty() {
                    continue;
                }
                validate_image(
                    content_type.as_deref(),
                    bytes.len(),
                    state.config.max_image_bytes,
                )?;
                upload = Some((content_type, bytes));
            }
            _ => {}
        }
    }

    if message.trim().is_empty() && upload.is_none() {
        return Err(AppError::BadRequest("Message or image is required".to_string()));
    }

    let image = match upload {
        Some((content_type, bytes)) => {
            let stored = save_image(
                &state.config.upload_dir,
                content_type.as_deref(),
                &bytes,
                state.config.max_image_bytes,
            )
            .await?;
            state.metrics.record_image().await;
            Some(stored)
        }
        None => None,
    };

    let (reply, source) = resolve_reply(
        &message,
        image.as_ref().map(|i| i.path.as_path()),
        &state.fallback,
    );
    state.metrics.record_reply(source).await;

    info!(
        message_len = message.len(),
        has_image = image.is_some(),
        source = source.as_str(),
        "chat reply sent"
    );

    Ok(Json(ChatResponse::success(reply, image.map(|i| i.public_path))))
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}
