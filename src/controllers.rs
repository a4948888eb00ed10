pub mod index;

use axum::http::StatusCode;
use axum::response::Html;
use handlebars::Handlebars;

use crate::models::theme::ThemeState;
use crate::views;

pub async fn get_error_page(registry: &Handlebars<'static>, status: StatusCode) -> (StatusCode, Html<String>) {
    match views::render_error_page(registry, ThemeState::default()) {
        Ok(page) => (status, Html(page)),
        Err(e) => {
            log::error!("Failed to render error page: {:?}", e);
            (status, Html(status.to_string()))
        }
    }
}
