//! List/detail view state machine
//!
//! ```text
//!            select(id)
//!   List ────────────────▶ Detail(id) ──┐
//!     ▲                        │        │ select(other)
//!     └────────── back() ──────┘ ◀──────┘
//! ```
//!
//! Detail fetches are never cancelled. A result is bound only if the
//! navigation it was started under is still showing.

use std::{fmt, sync::Arc};

use domain::{DetailPane, MailboxState, MessageId, ViewMode};
use parking_lot::Mutex;
use tracing::{debug, instrument, warn};

use super::message_poller::MessagePoller;

/// Inline text shown when a message body cannot be loaded
pub const DETAIL_ERROR_TEXT: &str = "Failed to load email";

/// What happened to a detail fetch once it completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    /// Content is showing
    Loaded,
    /// Inline error is showing
    Failed,
    /// The user navigated away first; result dropped
    Discarded,
    /// No session to load from; the list stays
    NoSession,
}

/// Drives transitions between the list and the detail view
pub struct ViewController {
    poller: Arc<MessagePoller>,
}

impl fmt::Debug for ViewController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewController").finish_non_exhaustive()
    }
}

impl ViewController {
    /// Create a view controller fetching through `poller`
    pub fn new(poller: Arc<MessagePoller>) -> Self {
        Self { poller }
    }

    /// Open `message_id` in the detail view
    ///
    /// The loading pane is in place as soon as the returned future is first
    /// polled, before the fetch resolves. Without a session the view does
    /// not change.
    #[instrument(skip(self, state))]
    pub async fn select(&self, state: &Mutex<MailboxState>, message_id: MessageId) -> DetailOutcome {
        let (ticket, session) = {
            let mut state = state.lock();
            let Some(session) = state.session().cloned() else {
                warn!("No session to load message from");
                return DetailOutcome::NoSession;
            };
            (state.enter_detail(message_id), session)
        };

        let pane = match self.poller.fetch_detail(&session, ticket.message_id()).await {
            Ok(detail) => DetailPane::Loaded(Box::new(detail)),
            Err(e) => {
                warn!(error = %e, "Could not load message");
                DetailPane::Failed(DETAIL_ERROR_TEXT.to_string())
            },
        };

        let outcome = match pane {
            DetailPane::Loaded(_) => DetailOutcome::Loaded,
            _ => DetailOutcome::Failed,
        };

        if state.lock().bind_detail(&ticket, pane) {
            outcome
        } else {
            debug!("Discarding stale message detail");
            DetailOutcome::Discarded
        }
    }

    /// Return to the list view
    ///
    /// No-op when the list is already showing.
    pub fn back(&self, state: &Mutex<MailboxState>) {
        let mut state = state.lock();
        if matches!(state.view(), ViewMode::Detail(_)) {
            state.show_list();
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::{EmailAddress, MailMessage, MessageDetail, Sender, Session, SessionId, WelcomeFilter};

    use super::*;
    use crate::ports::{MailboxError, MockMailboxPort};

    fn id(raw: &str) -> MessageId {
        MessageId::new(raw).unwrap()
    }

    fn state_with_session() -> Mutex<MailboxState> {
        let mut state = MailboxState::new();
        state.install_session(Session::new(
            SessionId::new("tok").unwrap(),
            EmailAddress::new("x@y.com").unwrap(),
        ));
        Mutex::new(state)
    }

    fn controller(mock: MockMailboxPort) -> ViewController {
        ViewController::new(Arc::new(MessagePoller::new(
            Arc::new(mock),
            WelcomeFilter::default(),
        )))
    }

    #[tokio::test]
    async fn select_binds_loaded_detail() {
        let mut mock = MockMailboxPort::new();
        mock.expect_get_message_detail().returning(|_, id| {
            Ok(Some(
                MessageDetail::new(MailMessage::new(id.clone(), Sender::new("a@b.com"), "S"))
                    .with_text("hello"),
            ))
        });

        let state = state_with_session();
        let outcome = controller(mock).select(&state, id("1")).await;

        assert_eq!(outcome, DetailOutcome::Loaded);
        let state = state.lock();
        assert_eq!(*state.view(), ViewMode::Detail(id("1")));
        match state.detail() {
            DetailPane::Loaded(detail) => assert_eq!(detail.text.as_deref(), Some("hello")),
            other => unreachable!("unexpected pane {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_fetch_stays_in_detail() {
        let mut mock = MockMailboxPort::new();
        mock.expect_get_message_detail()
            .returning(|_, _| Err(MailboxError::ServiceUnavailable));

        let state = state_with_session();
        let outcome = controller(mock).select(&state, id("1")).await;

        assert_eq!(outcome, DetailOutcome::Failed);
        let state = state.lock();
        assert_eq!(*state.view(), ViewMode::Detail(id("1")));
        assert_eq!(*state.detail(), DetailPane::Failed(DETAIL_ERROR_TEXT.into()));
    }

    #[tokio::test]
    async fn select_without_session_stays_in_list() {
        let mut mock = MockMailboxPort::new();
        mock.expect_get_message_detail().never();

        let state = Mutex::new(MailboxState::new());
        let outcome = controller(mock).select(&state, id("1")).await;
        assert_eq!(outcome, DetailOutcome::NoSession);
        let state = state.lock();
        assert_eq!(*state.view(), ViewMode::List);
        assert_eq!(*state.detail(), DetailPane::Idle);
    }

    #[test]
    fn back_returns_to_list() {
        let state = state_with_session();
        state.lock().enter_detail(id("1"));

        controller(MockMailboxPort::new()).back(&state);

        let state = state.lock();
        assert_eq!(*state.view(), ViewMode::List);
        assert_eq!(*state.detail(), DetailPane::Idle);
    }

    #[test]
    fn back_in_list_is_noop() {
        let state = state_with_session();
        controller(MockMailboxPort::new()).back(&state);
        assert_eq!(*state.lock().view(), ViewMode::List);
    }
}
