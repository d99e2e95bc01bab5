//! Mailbox display formatting
//!
//! Pure functions turning mailbox state into the plain strings a front end
//! shows. Markup and escaping are left to the renderer.

use chrono::{DateTime, Utc};
use domain::{MailMessage, MailboxState, MessageDetail, MessageId, SessionStatus};
use serde::Serialize;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Relative age of a message, falling back to the date after a week
#[must_use]
pub fn format_time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created_at).num_seconds();

    if seconds < MINUTE {
        "Just now".to_string()
    } else if seconds < HOUR {
        format!("{}m ago", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{}h ago", seconds / HOUR)
    } else if seconds < WEEK {
        format!("{}d ago", seconds / DAY)
    } else {
        created_at.format("%Y-%m-%d").to_string()
    }
}

/// "1 email" / "N emails"
#[must_use]
pub fn email_count_label(count: usize) -> String {
    if count == 1 {
        "1 email".to_string()
    } else {
        format!("{count} emails")
    }
}

/// Subject, or a placeholder when there is none
#[must_use]
pub fn subject_label(subject: &str) -> &str {
    if subject.trim().is_empty() {
        "(No subject)"
    } else {
        subject
    }
}

/// Plain-text body, else the raw HTML, else a placeholder
#[must_use]
pub fn body_text(detail: &MessageDetail) -> &str {
    [detail.text.as_deref(), detail.html.as_deref()]
        .into_iter()
        .flatten()
        .find(|body| !body.trim().is_empty())
        .unwrap_or("(Empty message)")
}

/// Text shown in place of the mailbox address
#[must_use]
pub fn address_label(state: &MailboxState) -> String {
    match (state.status(), state.address()) {
        (SessionStatus::Loading, _) => "Loading...".to_string(),
        (SessionStatus::Generating, _) => "Generating...".to_string(),
        (SessionStatus::Active, Some(address)) => address.to_string(),
        (SessionStatus::Active | SessionStatus::Unavailable, _) => {
            "Error loading email".to_string()
        },
    }
}

/// One line of the message list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRow {
    /// Message to open on click
    pub id: MessageId,
    /// Sender name or address
    pub sender: String,
    /// Subject or placeholder
    pub subject: String,
    /// Preview text
    pub intro: String,
    /// Provider category label
    pub category: String,
    /// Relative age
    pub received: String,
    /// Styled as unread
    pub unread: bool,
}

impl MessageRow {
    /// Build a row for `message` relative to `now`
    #[must_use]
    pub fn new(message: &MailMessage, now: DateTime<Utc>) -> Self {
        Self {
            id: message.id.clone(),
            sender: message.from.display_name().to_string(),
            subject: subject_label(&message.subject).to_string(),
            intro: message.intro.clone(),
            category: message.category.clone(),
            received: format_time_ago(message.created_at, now),
            unread: !message.seen,
        }
    }
}

/// Rows for every message in the list, in provider order
#[must_use]
pub fn message_rows(state: &MailboxState, now: DateTime<Utc>) -> Vec<MessageRow> {
    state
        .messages()
        .iter()
        .map(|m| MessageRow::new(m, now))
        .collect()
}

/// Fields of the detail pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    /// Subject or placeholder
    pub subject: String,
    /// Raw sender address
    pub from: String,
    /// Absolute receive time
    pub received: String,
    /// Provider category label
    pub category: String,
    /// Body text
    pub body: String,
}

impl DetailView {
    /// Build the detail pane for `detail`
    #[must_use]
    pub fn new(detail: &MessageDetail) -> Self {
        let summary = &detail.summary;
        Self {
            subject: subject_label(&summary.subject).to_string(),
            from: summary.from.address.clone(),
            received: summary.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            category: summary.category.clone(),
            body: body_text(detail).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use domain::{EmailAddress, Sender, Session, SessionId};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn message(subject: &str) -> MailMessage {
        MailMessage::new(MessageId::new("1").unwrap(), Sender::new("a@b.com"), subject)
    }

    #[test]
    fn time_ago_buckets() {
        let now = now();
        assert_eq!(format_time_ago(now - Duration::seconds(59), now), "Just now");
        assert_eq!(format_time_ago(now - Duration::seconds(60), now), "1m ago");
        assert_eq!(format_time_ago(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(format_time_ago(now - Duration::hours(5), now), "5h ago");
        assert_eq!(format_time_ago(now - Duration::days(6), now), "6d ago");
        assert_eq!(format_time_ago(now - Duration::days(8), now), "2024-06-07");
    }

    #[test]
    fn future_timestamps_are_just_now() {
        let now = now();
        assert_eq!(format_time_ago(now + Duration::minutes(5), now), "Just now");
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(email_count_label(0), "0 emails");
        assert_eq!(email_count_label(1), "1 email");
        assert_eq!(email_count_label(12), "12 emails");
    }

    #[test]
    fn empty_subject_gets_placeholder() {
        assert_eq!(subject_label(""), "(No subject)");
        assert_eq!(subject_label("   "), "(No subject)");
        assert_eq!(subject_label("Hi"), "Hi");
    }

    #[test]
    fn body_prefers_text_then_html() {
        let base = MessageDetail::new(message("s"));
        assert_eq!(body_text(&base), "(Empty message)");
        assert_eq!(body_text(&base.clone().with_html("<p>x</p>")), "<p>x</p>");
        assert_eq!(
            body_text(&base.clone().with_text("plain").with_html("<p>x</p>")),
            "plain"
        );
        assert_eq!(body_text(&base.with_text("").with_html("<b>y</b>")), "<b>y</b>");
    }

    #[test]
    fn address_label_follows_status() {
        let mut state = MailboxState::new();
        assert_eq!(address_label(&state), "Loading...");

        state.mark_unavailable();
        assert_eq!(address_label(&state), "Error loading email");

        state.install_session(Session::new(
            SessionId::new("t").unwrap(),
            EmailAddress::new("x@y.com").unwrap(),
        ));
        assert_eq!(address_label(&state), "x@y.com");

        state.begin_generating();
        assert_eq!(address_label(&state), "Generating...");
    }

    #[test]
    fn rows_reflect_messages() {
        let mut state = MailboxState::new();
        state.replace_messages(vec![
            message("").with_created_at(now() - Duration::hours(2)),
            MailMessage::new(
                MessageId::new("2").unwrap(),
                Sender::new("b@c.com").with_name("Bob"),
                "Hey",
            )
            .with_seen(true)
            .with_created_at(now()),
        ]);

        let rows = message_rows(&state, now());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].subject, "(No subject)");
        assert_eq!(rows[0].sender, "a@b.com");
        assert_eq!(rows[0].received, "2h ago");
        assert!(rows[0].unread);
        assert_eq!(rows[1].sender, "Bob");
        assert!(!rows[1].unread);
    }

    #[test]
    fn detail_view_fields() {
        let detail = MessageDetail::new(
            message("Invoice")
                .with_category("Updates")
                .with_created_at(now()),
        )
        .with_text("Pay up");

        let view = DetailView::new(&detail);
        assert_eq!(view.subject, "Invoice");
        assert_eq!(view.from, "a@b.com");
        assert_eq!(view.received, "2024-06-15 12:00:00 UTC");
        assert_eq!(view.category, "Updates");
        assert_eq!(view.body, "Pay up");
    }

    #[test]
    fn row_serializes_for_renderers() {
        let row = MessageRow::new(&message("Hi"), now());
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["received"], "Just now");
        assert_eq!(json["unread"], true);
    }
}
