use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use election_parser_core::{FormController, FormError, FormInput, TransportError};
use serde::Serialize;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Serialize)]
pub struct ParseResult {
    pub html: String,
}

/// `POST /api/v1/parse`: the form flow for non-browser clients.
///
/// Accepts the camelCase `ParseRequest` shape and returns the backend's HTML
/// in the standard envelope.
pub(super) async fn parse_and_format(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(input): Json<FormInput>,
) -> Result<Json<ApiResponse<ParseResult>>, ApiError> {
    let mut controller = FormController::with_input(Arc::clone(&state.client), input);

    if let Err(e) = controller.submit().await {
        return Err(map_form_error(req_id.0, &e));
    }

    let html = controller.into_state().result().to_owned();
    Ok(Json(ApiResponse {
        data: ParseResult { html },
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn map_form_error(request_id: String, error: &FormError) -> ApiError {
    match error {
        FormError::Validation(v) => ApiError::new(request_id, "validation_error", v.to_string()),
        FormError::Transport(t @ TransportError::Unreachable { .. }) => {
            ApiError::new(request_id, "upstream_unreachable", t.to_string())
        }
        FormError::Transport(t @ TransportError::Status { .. }) => {
            ApiError::new(request_id, "upstream_error", t.to_string())
        }
        other => {
            tracing::error!(error = %other, "parse request failed");
            ApiError::new(request_id, "internal_error", other.to_string())
        }
    }
}
