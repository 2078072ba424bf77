//! Environment-driven configuration, read once at startup.
//!
//! Every component downstream of [`Config::from_env`] works on plain values;
//! nothing else in the crate touches the process environment.

use std::env;

use crate::error::NotifyError;
use crate::events::{ReviewEvent, ReviewState};

/// Environment variable for the Teams incoming webhook URL (mandatory).
const ENV_TEAMS_WEBHOOK_URL: &str = "TEAMS_WEBHOOK_URL";
/// Review verdict state (`APPROVED`, `CHANGES_REQUESTED`, `COMMENTED`, ...).
const ENV_REVIEW_STATE: &str = "REVIEW_STATE";
/// GitHub login of the reviewer.
const ENV_REVIEWER: &str = "REVIEWER";
/// Image shown in the card header.
const ENV_BOT_IMAGE_URL: &str = "BOT_IMAGE_URL";
const ENV_REPO: &str = "REPO";
const ENV_PR_NUMBER: &str = "PR_NUMBER";
const ENV_PR_TITLE: &str = "PR_TITLE";
const ENV_PR_URL: &str = "PR_URL";
/// Review event verb, e.g. `submitted`.
const ENV_EVENT: &str = "EVENT";
const ENV_GLOBAL_COMMENT: &str = "GLOBAL_COMMENT";
const ENV_COMMENTS_COUNT: &str = "COMMENTS_COUNT";
const ENV_HEAD_REF: &str = "HEAD_REF";
const ENV_BASE_REF: &str = "BASE_REF";

/// Runtime configuration for one notifier run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Teams incoming webhook URL.
    pub webhook_url: String,
    /// The review event to notify about.
    pub event: ReviewEvent,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Only the webhook URL is mandatory; an unset or empty value is a
    /// configuration error. Every other variable defaults to the empty
    /// string and is rendered into the card as-is.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::MissingConfig`] if `TEAMS_WEBHOOK_URL` is not
    /// set.
    pub fn from_env() -> Result<Self, NotifyError> {
        let webhook_url = env::var(ENV_TEAMS_WEBHOOK_URL)
            .ok()
            .filter(|url| !url.is_empty())
            .ok_or(NotifyError::MissingConfig(ENV_TEAMS_WEBHOOK_URL))?;

        Ok(Self {
            webhook_url,
            event: ReviewEvent {
                repository: optional(ENV_REPO),
                pr_number: optional(ENV_PR_NUMBER),
                pr_title: optional(ENV_PR_TITLE),
                pr_url: optional(ENV_PR_URL),
                reviewer: optional(ENV_REVIEWER),
                action: optional(ENV_EVENT),
                state: ReviewState::parse(&optional(ENV_REVIEW_STATE)),
                global_comment: optional(ENV_GLOBAL_COMMENT),
                comments_count: optional(ENV_COMMENTS_COUNT),
                head_ref: optional(ENV_HEAD_REF),
                base_ref: optional(ENV_BASE_REF),
                bot_image_url: optional(ENV_BOT_IMAGE_URL),
            },
        })
    }
}

fn optional(name: &str) -> String {
    env::var(name).unwrap_or_default()
}
