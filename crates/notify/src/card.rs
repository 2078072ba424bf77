//! Adaptive Card payload for Teams review notifications.
//!
//! The card is a fixed-shape document: a header row (bot image, repository,
//! state badge), the PR title, a reviewer row (avatar plus one sentence), and
//! a details block. [`review_card`] is pure; rendering the same event and
//! avatar URL twice produces identical JSON.

use serde::Serialize;

use crate::events::{BadgeStyle, ReviewEvent};

/// Schema URL carried on every Adaptive Card.
const CARD_SCHEMA: &str = "https://adaptivecards.io/schemas/adaptive-card.json";
/// Adaptive Card schema version understood by Teams.
const CARD_VERSION: &str = "1.5";
/// Attachment content type Teams expects for Adaptive Cards.
const CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";

/// Build the Teams message for a submitted pull request review.
#[must_use]
pub fn review_card(event: &ReviewEvent, avatar_url: &str) -> TeamsMessage {
    TeamsMessage {
        message_type: "message",
        attachments: vec![CardAttachment {
            content_type: CARD_CONTENT_TYPE,
            content: AdaptiveCard {
                schema: CARD_SCHEMA,
                speak: "Pull request reviewed",
                card_type: "AdaptiveCard",
                version: CARD_VERSION,
                body: vec![
                    header_row(event),
                    title_block(event),
                    reviewer_row(event, avatar_url),
                    details_block(event),
                ],
                msteams: CardWidth { width: "full" },
                actions: vec![CardAction::OpenUrl {
                    title: "View pull request",
                    url: event.pr_url.clone(),
                }],
                ms_teams: CardWidth { width: "full" },
            },
        }],
    }
}

/// Bot image, repository name, and the review-state badge.
fn header_row(event: &ReviewEvent) -> CardElement {
    CardElement::ColumnSet(ColumnSet {
        columns: vec![
            Column::auto(vec![CardElement::Image(Image {
                size: "Medium",
                style: "RoundedCorners",
                url: event.bot_image_url.clone(),
            })]),
            Column::stretch(vec![
                CardElement::TextBlock(TextBlock::markdown("**Pull Request Notifier**")),
                CardElement::TextBlock(TextBlock {
                    color: Some("Good"),
                    ..TextBlock::markdown(format!("**{}**", event.repository))
                }),
            ]),
            Column::auto(vec![CardElement::Badge(Badge {
                text: event.state.badge_label(),
                size: "Large",
                style: event.state.badge_style(),
                shape: "Rounded",
                appearance: "Tint",
            })]),
        ],
    })
}

fn title_block(event: &ReviewEvent) -> CardElement {
    CardElement::TextBlock(TextBlock {
        size: Some("ExtraLarge"),
        weight: Some("Bolder"),
        color: Some("Accent"),
        ..TextBlock::markdown(format!("#{} - {}", event.pr_number, event.pr_title))
    })
}

/// Reviewer avatar next to "**reviewer** verb the pull request review."
fn reviewer_row(event: &ReviewEvent, avatar_url: &str) -> CardElement {
    CardElement::ColumnSet(ColumnSet {
        columns: vec![
            Column::auto(vec![CardElement::Image(Image {
                size: "Small",
                style: "Person",
                url: avatar_url.to_string(),
            })]),
            Column::stretch(vec![CardElement::TextBlock(TextBlock {
                size: Some("Large"),
                spacing: Some("Small"),
                ..TextBlock::markdown(format!(
                    "**{}** {} the pull request review.",
                    event.reviewer, event.action
                ))
            })]),
        ],
    })
}

fn details_block(event: &ReviewEvent) -> CardElement {
    let items = vec![
        detail_line(format!("**Global comment:** {}", event.global_comment)),
        detail_line(format!("**Number of comments:** {}", event.comments_count)),
        detail_line(format!("**Head:** {}", event.head_ref)),
        detail_line(format!("**Base:** {}", event.base_ref)),
    ];

    CardElement::ColumnSet(ColumnSet {
        columns: vec![Column {
            vertical_content_alignment: Some("Center"),
            ..Column::auto(items)
        }],
    })
}

fn detail_line(text: String) -> CardElement {
    CardElement::TextBlock(TextBlock {
        spacing: Some("Small"),
        ..TextBlock::markdown(text)
    })
}

// =============================================================================
// Teams / Adaptive Card wire types
// =============================================================================

/// Top-level Teams webhook message wrapping one Adaptive Card attachment.
#[derive(Debug, Serialize)]
pub struct TeamsMessage {
    #[serde(rename = "type")]
    message_type: &'static str,
    attachments: Vec<CardAttachment>,
}

#[derive(Debug, Serialize)]
struct CardAttachment {
    #[serde(rename = "contentType")]
    content_type: &'static str,
    content: AdaptiveCard,
}

#[derive(Debug, Serialize)]
struct AdaptiveCard {
    #[serde(rename = "$schema")]
    schema: &'static str,
    speak: &'static str,
    #[serde(rename = "type")]
    card_type: &'static str,
    version: &'static str,
    body: Vec<CardElement>,
    msteams: CardWidth,
    actions: Vec<CardAction>,
    // Teams clients have read the full-width property under both casings.
    #[serde(rename = "msTeams")]
    ms_teams: CardWidth,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct CardWidth {
    width: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum CardElement {
    ColumnSet(ColumnSet),
    TextBlock(TextBlock),
    Image(Image),
    Badge(Badge),
}

#[derive(Debug, Serialize)]
struct ColumnSet {
    columns: Vec<Column>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
struct Column {
    width: &'static str,
    items: Vec<CardElement>,
    #[serde(
        rename = "verticalContentAlignment",
        skip_serializing_if = "Option::is_none"
    )]
    vertical_content_alignment: Option<&'static str>,
}

impl Column {
    fn auto(items: Vec<CardElement>) -> Self {
        Self {
            width: "auto",
            items,
            vertical_content_alignment: None,
        }
    }

    fn stretch(items: Vec<CardElement>) -> Self {
        Self {
            width: "stretch",
            items,
            vertical_content_alignment: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct TextBlock {
    text: String,
    wrap: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spacing: Option<&'static str>,
}

impl TextBlock {
    /// A wrapped text block; Teams renders the markdown subset inline.
    fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            wrap: true,
            size: None,
            weight: None,
            color: None,
            spacing: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct Image {
    size: &'static str,
    style: &'static str,
    url: String,
}

#[derive(Debug, Serialize)]
struct Badge {
    text: String,
    size: &'static str,
    style: BadgeStyle,
    shape: &'static str,
    appearance: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum CardAction {
    #[serde(rename = "Action.OpenUrl")]
    OpenUrl { title: &'static str, url: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ReviewState;
    use serde_json::Value;

    fn sample_event() -> ReviewEvent {
        ReviewEvent {
            repository: "acme/widgets".to_string(),
            pr_number: "42".to_string(),
            pr_title: "Add widget".to_string(),
            pr_url: "https://github.com/acme/widgets/pull/42".to_string(),
            reviewer: "alice".to_string(),
            action: "submitted".to_string(),
            state: ReviewState::Approved,
            global_comment: "Nice work".to_string(),
            comments_count: "3".to_string(),
            head_ref: "feature/widget".to_string(),
            base_ref: "main".to_string(),
            bot_image_url: "https://example.com/bot.png".to_string(),
        }
    }

    fn card_json(event: &ReviewEvent, avatar_url: &str) -> Value {
        serde_json::to_value(review_card(event, avatar_url)).unwrap()
    }

    #[test]
    fn test_review_card_is_deterministic() {
        let event = sample_event();
        let first = card_json(&event, "https://x/a.png");
        let second = card_json(&event, "https://x/a.png");
        assert_eq!(first, second);
    }

    #[test]
    fn test_envelope_shape() {
        let json = card_json(&sample_event(), "https://x/a.png");

        assert_eq!(json["type"], "message");
        let attachment = &json["attachments"][0];
        assert_eq!(
            attachment["contentType"],
            "application/vnd.microsoft.card.adaptive"
        );

        let card = &attachment["content"];
        assert_eq!(card["type"], "AdaptiveCard");
        assert_eq!(card["version"], "1.5");
        assert_eq!(card["$schema"], CARD_SCHEMA);
        assert_eq!(card["speak"], "Pull request reviewed");
        assert_eq!(card["msteams"]["width"], "full");
        assert_eq!(card["msTeams"]["width"], "full");
    }

    #[test]
    fn test_exactly_one_open_url_action() {
        let event = sample_event();
        let json = card_json(&event, "https://x/a.png");

        let actions = json["attachments"][0]["content"]["actions"]
            .as_array()
            .unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0]["type"], "Action.OpenUrl");
        assert_eq!(actions[0]["title"], "View pull request");
        assert_eq!(actions[0]["url"], event.pr_url);
    }

    #[test]
    fn test_badge_carries_label_and_style() {
        let json = card_json(&sample_event(), "https://x/a.png");

        let header = &json["attachments"][0]["content"]["body"][0];
        assert_eq!(header["type"], "ColumnSet");
        let badge = &header["columns"][2]["items"][0];
        assert_eq!(badge["type"], "Badge");
        assert_eq!(badge["text"], "Approved");
        assert_eq!(badge["style"], "Good");
        assert_eq!(badge["shape"], "Rounded");
        assert_eq!(badge["appearance"], "Tint");
    }

    #[test]
    fn test_changes_requested_badge_style() {
        let mut event = sample_event();
        event.state = ReviewState::ChangesRequested;
        let json = card_json(&event, "https://x/a.png");

        let badge = &json["attachments"][0]["content"]["body"][0]["columns"][2]["items"][0];
        assert_eq!(badge["text"], "Changes Requested");
        assert_eq!(badge["style"], "Attention");
    }

    #[test]
    fn test_reviewer_row_uses_resolved_avatar() {
        let json = card_json(&sample_event(), "https://x/a.png");

        let row = &json["attachments"][0]["content"]["body"][2];
        let avatar = &row["columns"][0]["items"][0];
        assert_eq!(avatar["type"], "Image");
        assert_eq!(avatar["style"], "Person");
        assert_eq!(avatar["url"], "https://x/a.png");

        let sentence = &row["columns"][1]["items"][0];
        assert_eq!(
            sentence["text"],
            "**alice** submitted the pull request review."
        );
    }

    #[test]
    fn test_title_and_details_render_fields_verbatim() {
        let mut event = sample_event();
        event.pr_title = "Fix <b>everything</b> & more".to_string();
        event.comments_count = "a few".to_string();
        let json = card_json(&event, "https://x/a.png");

        let card = &json["attachments"][0]["content"];
        assert_eq!(card["body"][1]["text"], "#42 - Fix <b>everything</b> & more");
        assert_eq!(card["body"][1]["size"], "ExtraLarge");

        let details = card["body"][3]["columns"][0]["items"].as_array().unwrap();
        assert_eq!(details[0]["text"], "**Global comment:** Nice work");
        assert_eq!(details[1]["text"], "**Number of comments:** a few");
        assert_eq!(details[2]["text"], "**Head:** feature/widget");
        assert_eq!(details[3]["text"], "**Base:** main");
        assert_eq!(
            card["body"][3]["columns"][0]["verticalContentAlignment"],
            "Center"
        );
    }

    #[test]
    fn test_empty_fields_render_as_empty_text() {
        let event = ReviewEvent {
            repository: String::new(),
            pr_number: String::new(),
            pr_title: String::new(),
            pr_url: String::new(),
            reviewer: String::new(),
            action: String::new(),
            state: ReviewState::Other(String::new()),
            global_comment: String::new(),
            comments_count: String::new(),
            head_ref: String::new(),
            base_ref: String::new(),
            bot_image_url: String::new(),
        };
        let json = card_json(&event, "");

        let card = &json["attachments"][0]["content"];
        assert_eq!(card["body"][1]["text"], "# - ");
        assert_eq!(
            card["body"][2]["columns"][1]["items"][0]["text"],
            "****  the pull request review."
        );
        let badge = &card["body"][0]["columns"][2]["items"][0];
        assert_eq!(badge["text"], "");
        assert_eq!(badge["style"], "Default");
    }
}
