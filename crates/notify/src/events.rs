//! Pull request review event types.

use serde::Serialize;

/// Review verdict states GitHub reports for a submitted review.
///
/// The three known states drive the badge style lookup; anything else
/// (including the empty string) is carried through as [`Self::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewState {
    /// Reviewer approved the changes
    Approved,
    /// Reviewer requested changes
    ChangesRequested,
    /// Reviewer left comments without a verdict
    Commented,
    /// Any state string we do not recognize
    Other(String),
}

impl ReviewState {
    /// Parse the raw `REVIEW_STATE` value as delivered by the workflow.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "APPROVED" => Self::Approved,
            "CHANGES_REQUESTED" => Self::ChangesRequested,
            "COMMENTED" => Self::Commented,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// The raw state text as delivered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Approved => "APPROVED",
            Self::ChangesRequested => "CHANGES_REQUESTED",
            Self::Commented => "COMMENTED",
            Self::Other(raw) => raw,
        }
    }

    /// Badge label: underscores become spaces, each word capitalized.
    #[must_use]
    pub fn badge_label(&self) -> String {
        self.as_str()
            .replace('_', " ")
            .split(' ')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Badge style for this state.
    #[must_use]
    pub const fn badge_style(&self) -> BadgeStyle {
        match self {
            Self::Approved => BadgeStyle::Good,
            Self::ChangesRequested => BadgeStyle::Attention,
            Self::Commented | Self::Other(_) => BadgeStyle::Default,
        }
    }
}

/// Visual style of the state badge on the card.
///
/// Serializes to the Adaptive Card badge style vocabulary (`Good`,
/// `Attention`, `Default`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BadgeStyle {
    Good,
    Attention,
    Default,
}

impl BadgeStyle {
    /// Get the style tag as serialized onto the card.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Attention => "Attention",
            Self::Default => "Default",
        }
    }
}

/// A submitted pull request review, as reported by the triggering workflow.
///
/// All fields are raw text taken from the environment; absent variables are
/// empty strings and are rendered into the card as-is. `comments_count` and
/// `pr_number` are deliberately not parsed as numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEvent {
    /// Repository name, e.g. `acme/widgets`
    pub repository: String,
    /// Pull request number
    pub pr_number: String,
    /// Pull request title
    pub pr_title: String,
    /// Pull request HTML URL
    pub pr_url: String,
    /// GitHub login of the reviewer
    pub reviewer: String,
    /// Review event verb, e.g. `submitted`
    pub action: String,
    /// Review verdict state
    pub state: ReviewState,
    /// Top-level review comment
    pub global_comment: String,
    /// Number of review comments (raw text)
    pub comments_count: String,
    /// Head branch ref
    pub head_ref: String,
    /// Base branch ref
    pub base_ref: String,
    /// Image shown in the card header
    pub bot_image_url: String,
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
