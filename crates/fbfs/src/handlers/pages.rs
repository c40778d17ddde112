use askama::Template;
use axum::response::Html;

use fbfs_core::submission::{LABEL_FISH_BIGGER, LABEL_FISH_SMALLER};

use crate::error::AppError;

/// Index page template with the two labeled inputs.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    bigger_label: &'static str,
    smaller_label: &'static str,
}

/// Handler for the form page (GET /).
pub async fn index() -> Result<Html<String>, AppError> {
    let template = IndexTemplate {
        bigger_label: LABEL_FISH_BIGGER,
        smaller_label: LABEL_FISH_SMALLER,
    };

    let html = template
        .render()
        .map_err(|e| anyhow::anyhow!("Template error: {e}"))?;

    Ok(Html(html))
}
