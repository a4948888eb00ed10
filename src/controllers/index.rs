use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::query_state::QueryState;
use crate::models::theme::ThemeState;
use crate::views;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchViewModel {
    #[serde(default)]
    username: String,
}

#[derive(Debug, Serialize)]
pub struct StateViewModel {
    query: QueryState,
    theme: ThemeState,
}

pub async fn get_index(State(state): State<Arc<AppState>>) -> Response {
    let query = state.controller.query_state();
    let theme = state.controller.theme();

    match views::render_widget(&state.registry, &query, theme, &state.date_format) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            log::error!("Failed to render widget: {:?}", e);
            super::get_error_page(&state.registry, StatusCode::INTERNAL_SERVER_ERROR).await.into_response()
        }
    }
}

#[axum_macros::debug_handler]
pub async fn post_search(State(state): State<Arc<AppState>>, Form(vm): Form<SearchViewModel>) -> Redirect {
    state.controller.submit(&vm.username);
    Redirect::to("/")
}

pub async fn post_theme(State(state): State<Arc<AppState>>) -> Redirect {
    state.controller.toggle_theme();
    Redirect::to("/")
}

pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<StateViewModel> {
    Json(StateViewModel {
        query: state.controller.query_state(),
        theme: state.controller.theme(),
    })
}
