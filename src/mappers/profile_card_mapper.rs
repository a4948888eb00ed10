use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use serde::Serialize;

use crate::errors::InvalidDateFormat;
use crate::models::github_user::GithubUser;

pub const NO_NAME: &str = "No Name";
pub const NO_BIO: &str = "This profile has no bio";
pub const NOT_AVAILABLE: &str = "Not Available";

/// What the result panel shows, with every placeholder already substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    pub avatar_url: String,
    pub profile_url: String,
    pub name: String,
    pub joined: String,
    pub handle: String,
    pub bio: String,
    pub repos: u32,
    pub followers: u32,
    pub following: u32,
    pub location: String,
    pub twitter: String,
    pub blog: String,
    /// Present only when the user has a homepage, rendered as a link.
    pub blog_href: Option<String>,
    pub company: String,
}

// Empty strings count as missing, GitHub sends "" for an unset blog.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    present(value).unwrap_or(placeholder).to_string()
}

/// Rejects formats containing specifiers chrono does not understand.
pub fn check_date_format(date_format: &str) -> Result<(), InvalidDateFormat> {
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return Err(InvalidDateFormat(date_format.to_string()));
    }
    Ok(())
}

fn joined(user: &GithubUser, date_format: &str) -> String {
    let mut joined = String::new();
    if write!(joined, "{}", user.created_at.format(date_format)).is_err() {
        log::error!("Cannot format join date with {:?}", date_format);
        joined = user.created_at.date_naive().to_string();
    }
    joined
}

pub fn to_card(user: &GithubUser, date_format: &str) -> ProfileCard {
    ProfileCard {
        avatar_url: user.avatar_url.clone(),
        profile_url: user.html_url.clone(),
        name: or_placeholder(&user.name, NO_NAME),
        joined: joined(user, date_format),
        handle: format!("@{}", user.login),
        bio: or_placeholder(&user.bio, NO_BIO),
        repos: user.public_repos,
        followers: user.followers,
        following: user.following,
        location: or_placeholder(&user.location, NOT_AVAILABLE),
        twitter: or_placeholder(&user.twitter_username, NOT_AVAILABLE),
        blog: or_placeholder(&user.blog, NOT_AVAILABLE),
        blog_href: present(&user.blog).map(str::to_string),
        company: or_placeholder(&user.company, NOT_AVAILABLE),
    }
}
