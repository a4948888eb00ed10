pub mod github_user_service;
pub mod query_controller;
