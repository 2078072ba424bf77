//! Teams notifications for pull request review events.
//!
//! This crate posts an Adaptive Card to a Microsoft Teams incoming webhook
//! when a pull request review is submitted. Review metadata is sourced from
//! environment variables (typically set by the CI job the review event
//! triggered), the reviewer avatar is looked up via the GitHub users API
//! with a deterministic identicon fallback, and the outcome maps to the
//! process exit code.
//!
//! # Usage
//!
//! ```no_run
//! use notify::{Config, Notifier};
//!
//! # async fn example() -> Result<(), notify::NotifyError> {
//! let config = Config::from_env()?;
//!
//! let notifier = Notifier::new(config.webhook_url.clone());
//! notifier.notify(&config.event).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! All inputs are environment variables:
//!
//! - `TEAMS_WEBHOOK_URL`: Teams incoming webhook URL (mandatory)
//! - `REVIEW_STATE`, `REVIEWER`, `EVENT`: review metadata
//! - `REPO`, `PR_NUMBER`, `PR_TITLE`, `PR_URL`: pull request metadata
//! - `GLOBAL_COMMENT`, `COMMENTS_COUNT`, `HEAD_REF`, `BASE_REF`: review details
//! - `BOT_IMAGE_URL`: image shown in the card header
//!
//! # Architecture
//!
//! One linear pipeline: [`Config::from_env`] reads the environment once,
//! [`AvatarResolver`] resolves the reviewer avatar (never fails — lookup
//! errors become the identicon fallback), [`card::review_card`] builds the
//! card, [`TeamsChannel`] posts it.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod avatar;
pub mod card;
pub mod channels;
pub mod config;
pub mod error;
pub mod events;

pub use avatar::{AvatarResolver, ResolvedAvatar};
pub use card::{review_card, TeamsMessage};
pub use channels::TeamsChannel;
pub use config::Config;
pub use error::NotifyError;
pub use events::{BadgeStyle, ReviewEvent, ReviewState};

/// Review notification pipeline: resolve avatar, build card, send.
pub struct Notifier {
    resolver: AvatarResolver,
    channel: TeamsChannel,
}

impl Notifier {
    /// Create a notifier posting to the given Teams webhook URL, with the
    /// avatar lookup against the public GitHub API.
    #[must_use]
    pub fn new(webhook_url: String) -> Self {
        Self {
            resolver: AvatarResolver::new(),
            channel: TeamsChannel::new(webhook_url),
        }
    }

    /// Create a notifier from explicit parts.
    #[must_use]
    pub fn with_parts(resolver: AvatarResolver, channel: TeamsChannel) -> Self {
        Self { resolver, channel }
    }

    /// Send the notification for one review event.
    ///
    /// Avatar resolution cannot fail the run; a failed lookup renders the
    /// identicon fallback instead.
    ///
    /// # Errors
    ///
    /// Returns an error only if the webhook send fails.
    pub async fn notify(&self, event: &ReviewEvent) -> Result<(), NotifyError> {
        let avatar = self.resolver.resolve(&event.reviewer).await;
        let message = card::review_card(event, avatar.url());
        self.channel.send(&message).await
    }
}
