//! Browser-facing single-page form.
//!
//! The page posts back to itself; each POST builds a fresh controller, so the
//! form state lives exactly as long as the rendered page.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use election_parser_core::{
    FormController, FormInput, FormState, ParseMethod, ResultType, COPIED_LABEL,
    COPY_ACK_DURATION, COPY_LABEL,
};
use serde::Deserialize;

use super::AppState;

/// Fields posted by the HTML form.
#[derive(Debug, Deserialize)]
pub(super) struct PageForm {
    #[serde(default)]
    county: String,
    #[serde(default)]
    file_link: String,
    #[serde(default)]
    output_type: ResultType,
    #[serde(default)]
    link_type: ParseMethod,
}

impl From<PageForm> for FormInput {
    fn from(form: PageForm) -> Self {
        FormInput {
            county_name: form.county,
            link: form.file_link,
            parse_method: form.link_type,
            result_type: form.output_type,
        }
    }
}

struct SelectOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
    enabled: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    county: &'a str,
    file_link: &'a str,
    output_types: Vec<SelectOption>,
    link_types: Vec<SelectOption>,
    result: &'a str,
    has_result: bool,
    copy_label: &'static str,
    copied_label: &'static str,
    copy_ack_ms: u128,
}

impl<'a> IndexPage<'a> {
    fn from_state(state: &'a FormState) -> Self {
        let output_types = ResultType::ALL
            .into_iter()
            .map(|r| SelectOption {
                value: r.as_str(),
                label: r.label(),
                selected: r == state.input.result_type,
                enabled: true,
            })
            .collect();
        let link_types = ParseMethod::ALL
            .into_iter()
            .map(|m| SelectOption {
                value: m.as_str(),
                label: m.label(),
                selected: m == state.input.parse_method,
                enabled: m.is_offered(),
            })
            .collect();

        Self {
            county: &state.input.county_name,
            file_link: &state.input.link,
            output_types,
            link_types,
            result: state.result(),
            has_result: state.has_result(),
            copy_label: COPY_LABEL,
            copied_label: COPIED_LABEL,
            copy_ack_ms: COPY_ACK_DURATION.as_millis(),
        }
    }
}

pub(super) struct PageError(askama::Error);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "failed to render form page");
        (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
    }
}

fn render(state: &FormState) -> Result<Html<String>, PageError> {
    IndexPage::from_state(state)
        .render()
        .map(Html)
        .map_err(PageError)
}

/// `GET /`: empty form with the default selections.
pub(super) async fn show_form() -> Result<Html<String>, PageError> {
    render(&FormState::default())
}

/// `POST /`: validate, call the backend once, and re-render with the outcome.
pub(super) async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<PageForm>,
) -> Result<Html<String>, PageError> {
    let mut controller = FormController::with_input(Arc::clone(&state.client), form.into());
    if let Err(e) = controller.submit().await {
        tracing::debug!(error = %e, "form submission failed");
    }
    render(controller.state())
}
