use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub user record as returned by `GET /users/{username}`.
///
/// Only the fields the widget renders are kept; everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GithubUser {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub location: Option<String>,
    pub twitter_username: Option<String>,
    pub blog: Option<String>,
    pub company: Option<String>,
}
