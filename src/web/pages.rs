//! Page templates and handlers for the HTML views.

use askama::Template;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use crate::data::{SalesRecord, UserRecord};
use crate::error::AppError;
use crate::AppState;

/// Landing page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub message: String,
}

/// Dashboard template with the sales and user tables.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub title: String,
    pub sales: Vec<SalesRecord>,
    pub users: Vec<UserRecord>,
    pub total_sales: f64,
}

/// Error page template, shared by the 404 and 500 paths.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

/// `GET /`: landing page.
pub async fn index() -> Result<Html<String>, AppError> {
    let page = IndexTemplate {
        title: "DataVision App".to_string(),
        message: "Welcome to the data visualization application".to_string(),
    };
    Ok(Html(page.render()?))
}

/// `GET /dashboard`: sales and user tables.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let page = DashboardTemplate {
        title: "Dashboard - DataVision".to_string(),
        sales: state.dataset.sales.clone(),
        users: state.dataset.users.clone(),
        total_sales: state.dataset.total_sales(),
    };
    Ok(Html(page.render()?))
}

/// Fallback handler for any unmatched path or method.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "no route matched");
    error_page(
        StatusCode::NOT_FOUND,
        "Page not found",
        "The page you are looking for was not found",
    )
}

/// Render the error template with the given status, title, and message.
///
/// Falls back to a plain-text body if the template itself fails to render.
pub fn error_page(status: StatusCode, title: &str, message: &str) -> Response {
    let page = ErrorTemplate {
        title: title.to_string(),
        message: message.to_string(),
    };
    match page.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render error page");
            (status, title.to_string()).into_response()
        }
    }
}
