use async_trait::async_trait;
use reqwest::Client;

use crate::errors::LookupError;
use crate::models::github_user::GithubUser;

/// The external collaborator that resolves a username into a profile.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn get_by_username(&self, username: &str) -> Result<GithubUser, LookupError>;
}

pub struct GitHubUserService {
    pub client: Client,
    pub api_base: String,
}

impl GitHubUserService {
    pub fn new(client: Client, api_base: impl Into<String>) -> Self {
        GitHubUserService {
            client,
            api_base: api_base.into(),
        }
    }

    fn user_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}",
            self.api_base.trim_end_matches('/'),
            urlencoding::encode(username)
        )
    }
}

#[async_trait]
impl ProfileSource for GitHubUserService {
    async fn get_by_username(&self, username: &str) -> Result<GithubUser, LookupError> {
        let url = self.user_url(username);
        log::info!("Making request to {}...", url);

        let response = self.client.get(&url)
            .header("User-Agent", "devfinder")
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        if !response.status().is_success() {
            log::error!("Lookup for {:?} failed with {:?}", username, response.status());
            return Err(LookupError::NotFound);
        }

        let contents = response.text().await?;
        let user: GithubUser = serde_json::from_str(&contents)?;
        Ok(user)
    }
}
