pub mod github_user;
pub mod query_state;
pub mod theme;
