use std::{sync::Arc, net::{SocketAddr, IpAddr, Ipv4Addr}, str::FromStr};
use clap::Parser;
use axum::{routing::{get, post}, Router};
use handlebars::Handlebars;
use tokio::sync::watch;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use reqwest::Client;

pub mod controllers;
pub mod errors;
pub mod mappers;
pub mod models;
pub mod services;
pub mod views;

use controllers::index;
use models::query_state::QueryState;
use services::github_user_service::GitHubUserService;
use services::query_controller::QueryController;

// Command line interface
#[derive(Parser, Debug)]
#[clap(name="devfinder", about="Look up a GitHub profile from the browser!")]
struct Opt {
    #[clap(short = 'l', long = "log", default_value = "debug")]
    log_level: String,

    #[clap(short = 'a', long = "addr", default_value = "::1")]
    addr: String,

    #[clap(short = 'p', long = "port", default_value = "8080")]
    port: u16,

    #[clap(long = "static_dir", default_value = "static")]
    static_dir: String,

    #[clap(long = "api_base", env = "DEVFINDER_API_BASE", default_value = "https://api.github.com")]
    api_base: String,

    #[clap(long = "date_format", default_value = "%-m/%-d/%Y")]
    date_format: String,
}

pub struct AppState {
    registry: Handlebars<'static>,
    controller: QueryController,
    date_format: String,
}

fn app(app_state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index::get_index))
        .route("/search", post(index::post_search))
        .route("/theme", post(index::post_theme))
        .route("/state", get(index::get_state))
        .fallback_service(ServeDir::new(static_dir))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

async fn log_transitions(mut rx: watch::Receiver<QueryState>) {
    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        match state {
            QueryState::Idle => {}
            QueryState::Loading { request_id } => log::debug!("Lookup #{} loading", request_id),
            QueryState::Success { request_id, profile } => {
                log::info!("Lookup #{} found {}", request_id, profile.login)
            }
            QueryState::Failure { request_id, message } => {
                log::info!("Lookup #{} failed: {}", request_id, message)
            }
        }
    }
}

#[tokio::main]
async fn main() {
    // Fetch console arguments
    let opt = Opt::parse();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{},hyper=info,mio=info", opt.log_level));
    }
    // Enable console logging
    tracing_subscriber::fmt::init();

    mappers::profile_card_mapper::check_date_format(&opt.date_format).unwrap_or_else(|err| {
        panic!("Refusing to start!\n{}", err);
    });

    // Register templates
    let registry = views::registry().unwrap_or_else(|err| {
        panic!("Failed to register templates!\n{:?}", err);
    });

    // Setup services
    let github_user_service = GitHubUserService::new(Client::new(), opt.api_base.clone());
    let controller = QueryController::new(Arc::new(github_user_service));
    tokio::spawn(log_transitions(controller.subscribe()));

    // Setup controller routes and inject app state
    let app_state = Arc::new(AppState {
        registry,
        controller,
        date_format: opt.date_format.clone(),
    });
    let app = app(app_state, &opt.static_dir);

    let sock_addr = SocketAddr::from((
        IpAddr::from_str(opt.addr.as_str()).unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        opt.port
    ));
    log::info!("Looking up profiles at {}", opt.api_base);
    log::info!("Now listening on http://{}", sock_addr);

    axum::Server::bind(&sock_addr)
        .serve(app.into_make_service())
        .await
        .unwrap_or_else(|err| {
            panic!("Server stopped!\n{:?}", err);
        });
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::extract::State;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::errors::LookupError;
    use crate::models::github_user::GithubUser;
    use crate::models::theme::ThemeState;
    use crate::services::github_user_service::ProfileSource;
    use crate::services::github_user_service::tests::octocat;

    struct FixedSource;

    #[async_trait]
    impl ProfileSource for FixedSource {
        async fn get_by_username(&self, username: &str) -> Result<GithubUser, LookupError> {
            match username {
                "octocat" => Ok(octocat()),
                _ => Err(LookupError::NotFound),
            }
        }
    }

    fn app_state() -> Arc<AppState> {
        Arc::new(AppState {
            registry: views::registry().unwrap(),
            controller: QueryController::new(Arc::new(FixedSource)),
            date_format: "%-m/%-d/%Y".into(),
        })
    }

    fn search(username: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/search")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("username={}", username)))
            .unwrap()
    }

    #[test]
    fn cli_defaults() {
        let opt = Opt::parse_from(["devfinder"]);
        assert_eq!(opt.port, 8080);
        assert_eq!(opt.date_format, "%-m/%-d/%Y");
        assert_eq!(opt.static_dir, "static");
        assert!(mappers::profile_card_mapper::check_date_format(&opt.date_format).is_ok());
    }

    #[tokio::test]
    async fn index_renders() {
        let response = app(app_state(), "static")
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn search_submits_and_redirects() {
        let state = app_state();
        let mut rx = state.controller.subscribe();

        let response = app(state.clone(), "static").oneshot(search("octocat")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert!(rx.borrow_and_update().request_id().is_some());

        while !matches!(*rx.borrow_and_update(), QueryState::Success { .. }) {
            rx.changed().await.unwrap();
        }
        match state.controller.query_state() {
            QueryState::Success { profile, .. } => assert_eq!(profile.login, "octocat"),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_username_is_forwarded() {
        let state = app_state();

        let response = app(state.clone(), "static").oneshot(search("")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.controller.query_state().request_id(), Some(1));
    }

    #[tokio::test]
    async fn theme_toggles_and_state_reports_it() {
        let state = app_state();

        let response = app(state.clone(), "static")
            .oneshot(Request::builder().method("POST").uri("/theme").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let snapshot = index::get_state(State(state.clone())).await.0;
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["theme"], "light");
        assert_eq!(json["query"]["state"], "idle");
        assert_eq!(state.controller.theme(), ThemeState::Light);
    }
}
