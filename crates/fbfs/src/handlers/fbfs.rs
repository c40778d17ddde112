//! The submission endpoint: presence checks, business rules, backend call.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use fbfs_core::submission::{check_rules, validate, Field, FieldErrors, RawSubmission};

use crate::state::AppState;

/// Generic failure shown when the backend call fails. Transport detail
/// stays in the logs.
const FORWARD_FAILED_MESSAGE: &str = "生成失败，请稍后再试";

/// The intent value that triggers the backend call; anything else is a
/// validate-only pass. A plain HTML form sends no intent field and means
/// submit.
const INTENT_SUBMIT: &str = "submit";

/// Form fields accepted by the submission endpoint.
#[derive(Debug, Deserialize)]
pub struct FbfsForm {
    #[serde(default)]
    intent: Option<String>,
    #[serde(default)]
    fish_bigger: Option<String>,
    #[serde(default)]
    fish_smaller: Option<String>,
}

/// Lifecycle of one submission, reported back in the envelope.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum ReplyStatus {
    Idle,
    Error,
    Success,
}

/// Echo of the parsed submission: what was sent and what failed.
#[derive(Debug, Serialize)]
struct SubmissionEcho {
    intent: String,
    payload: RawSubmission,
    error: FieldErrors,
}

/// Response envelope of the submission endpoint.
#[derive(Debug, Serialize)]
struct FbfsReply {
    data: Option<String>,
    status: ReplyStatus,
    submission: SubmissionEcho,
}

/// Handle a form submission (POST /fbfs).
///
/// Pipeline: presence checks, then business rules, then the backend call.
/// Validation never short-circuits, so the reply carries every error the
/// user has to fix. A successful generation answers 418 with a `no-store`
/// directive: the text is computed fresh per submission and must not be
/// served from a cache.
pub async fn submit(State(state): State<AppState>, Form(form): Form<FbfsForm>) -> Response {
    let FbfsForm {
        intent,
        fish_bigger,
        fish_smaller,
    } = form;
    let intent = intent.unwrap_or_else(|| INTENT_SUBMIT.to_string());
    let payload = RawSubmission {
        fish_bigger,
        fish_smaller,
    };

    let checked = validate(&payload).and_then(|submission| {
        check_rules(&submission)?;
        Ok(submission)
    });

    // Validate-only pass: report errors but stay idle, nothing is sent on.
    if intent != INTENT_SUBMIT {
        let error = checked.err().unwrap_or_default();
        let reply = FbfsReply {
            data: None,
            status: ReplyStatus::Idle,
            submission: SubmissionEcho {
                intent,
                payload,
                error,
            },
        };
        return (StatusCode::OK, Json(reply)).into_response();
    }

    let submission = match checked {
        Ok(submission) => submission,
        Err(error) => {
            let reply = FbfsReply {
                data: None,
                status: ReplyStatus::Error,
                submission: SubmissionEcho {
                    intent,
                    payload,
                    error,
                },
            };
            return (StatusCode::BAD_REQUEST, Json(reply)).into_response();
        }
    };

    match state.forwarder.forward(&submission).await {
        Ok(text) => {
            tracing::info!(chars = text.chars().count(), "Backend answered");

            let reply = FbfsReply {
                data: Some(text),
                status: ReplyStatus::Success,
                submission: SubmissionEcho {
                    intent,
                    payload,
                    error: FieldErrors::default(),
                },
            };
            (
                StatusCode::IM_A_TEAPOT,
                [(header::CACHE_CONTROL, "no-store")],
                Json(reply),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Forwarding failed");

            let mut error = FieldErrors::default();
            error.push_message(Field::Form, FORWARD_FAILED_MESSAGE);
            let reply = FbfsReply {
                data: None,
                status: ReplyStatus::Error,
                submission: SubmissionEcho {
                    intent,
                    payload,
                    error,
                },
            };
            (StatusCode::BAD_GATEWAY, Json(reply)).into_response()
        }
    }
}
