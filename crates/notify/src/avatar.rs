//! Reviewer avatar lookup against the GitHub users API.

use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::NotifyError;

/// Base URL for the GitHub REST API.
const GITHUB_API_URL: &str = "https://api.github.com";

/// How a reviewer avatar URL was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAvatar {
    /// Avatar URL taken from the user's GitHub profile.
    Profile(String),
    /// Deterministic identicon fallback, used when the profile lookup fails.
    Identicon(String),
}

impl ResolvedAvatar {
    /// The avatar URL, however it was obtained.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Profile(url) | Self::Identicon(url) => url,
        }
    }

    /// Whether the fallback path was taken.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Identicon(_))
    }
}

/// GitHub user profile lookup for reviewer avatars.
pub struct AvatarResolver {
    client: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct UserProfile {
    avatar_url: String,
}

impl AvatarResolver {
    /// Create a resolver targeting the public GitHub API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API_URL)
    }

    /// Create a resolver targeting a specific API base URL.
    #[must_use]
    pub fn with_base_url(api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }

    /// Resolve the avatar URL for a GitHub login.
    ///
    /// This never fails: any transport error or non-2xx response falls back
    /// to the identicon URL GitHub serves for the login. Single attempt, no
    /// retries.
    pub async fn resolve(&self, login: &str) -> ResolvedAvatar {
        match self.fetch_profile_avatar(login).await {
            Ok(url) => {
                debug!(login, "Resolved avatar from GitHub profile");
                ResolvedAvatar::Profile(url)
            }
            Err(e) => {
                warn!(login, error = %e, "Avatar lookup failed, using identicon fallback");
                ResolvedAvatar::Identicon(identicon_url(login))
            }
        }
    }

    async fn fetch_profile_avatar(&self, login: &str) -> Result<String, NotifyError> {
        let url = format!("{}/users/{login}", self.api_base);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, "notify-teams/0.1")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Other(format!(
                "GitHub API error: {status} - {body}"
            )));
        }

        let profile: UserProfile = response.json().await?;
        Ok(profile.avatar_url)
    }
}

impl Default for AvatarResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Identicon URL GitHub serves for any login without a custom avatar.
fn identicon_url(login: &str) -> String {
    format!("https://github.com/identicons/{login}.png")
}
