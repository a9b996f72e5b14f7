use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{error, info};

use docsum_core::{DocsumError, SummarizeResponse};
use docsum_summarize::LengthTier;

use crate::pipeline::{self, Upload};
use crate::state::AppState;

type ApiResult = (StatusCode, Json<SummarizeResponse>);

fn warning(status: StatusCode, message: impl AsRef<str>) -> ApiResult {
    (status, Json(SummarizeResponse::warning(message)))
}

/// Multipart fields of a summarize request.
#[derive(Default)]
struct SummarizeForm {
    file: Option<(String, Vec<u8>)>,
    length: Option<String>,
    mode: Option<String>,
}

async fn read_form(mut multipart: Multipart) -> Result<SummarizeForm, ApiResult> {
    let mut form = SummarizeForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| warning(e.status(), format!("Multipart error: {}", e.body_text())))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("unnamed").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| warning(e.status(), format!("Failed to read file: {}", e.body_text())))?;
                form.file = Some((filename, bytes.to_vec()));
            }
            "length" | "mode" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| warning(e.status(), format!("Failed to read field '{name}': {}", e.body_text())))?;
                if name == "length" {
                    form.length = Some(value);
                } else {
                    form.mode = Some(value);
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Summarize an uploaded document
///
/// Accepts multipart/form-data with a `file` field plus optional `length`
/// (`short`, `medium`, `long`) and `mode` fields. Every response, including
/// errors, carries `summary` and `key_points`.
#[utoipa::path(
    post,
    path = "/api/summarize",
    tag = "Summarize",
    request_body(content_type = "multipart/form-data", description = "Document upload"),
    responses(
        (status = 200, description = "Summary, or a warning when no text could be extracted", body = SummarizeResponse),
        (status = 400, description = "No file uploaded", body = SummarizeResponse),
        (status = 413, description = "Upload too large", body = SummarizeResponse),
        (status = 415, description = "Unsupported file type", body = SummarizeResponse),
        (status = 500, description = "Extraction failure", body = SummarizeResponse)
    )
)]
pub async fn summarize(State(state): State<Arc<AppState>>, multipart: Multipart) -> ApiResult {
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(resp) => return resp,
    };

    let Some((filename, bytes)) = form.file else {
        return warning(StatusCode::BAD_REQUEST, "No file uploaded.");
    };
    if !docsum_ingest::is_supported(&filename) {
        return warning(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported file type.");
    }

    let length = LengthTier::parse(
        form.length
            .as_deref()
            .unwrap_or(&state.config.summarize.default_length),
    );
    let mode = pipeline::resolve_mode(form.mode.as_deref());

    let request_id = uuid::Uuid::new_v4();
    info!(%request_id, filename = %filename, bytes = bytes.len(), length = %length, mode, "summarize request");

    let upload = Upload {
        filename,
        bytes,
        length,
    };
    let worker_state = state.clone();
    let result = tokio::task::spawn_blocking(move || {
        pipeline::summarize_upload(&worker_state.config, &worker_state.summarizer, &upload)
    })
    .await;

    match result {
        Ok(Ok(resp)) => {
            info!(%request_id, key_points = resp.key_points.len(), "summarize complete");
            (StatusCode::OK, Json(resp))
        }
        Ok(Err(DocsumError::UnsupportedType(_))) => {
            warning(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported file type.")
        }
        Ok(Err(e)) => {
            error!(%request_id, error = %e, "summarize failed");
            warning(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
        Err(e) => {
            error!(%request_id, error = %e, "summarize task panicked");
            warning(StatusCode::INTERNAL_SERVER_ERROR, "Internal error while processing file.")
        }
    }
}
