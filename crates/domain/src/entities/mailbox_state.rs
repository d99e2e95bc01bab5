//! Aggregate mailbox state
//!
//! One value holds everything the controller renders: the current session,
//! the filtered message list and the list/detail view. Mutations go through
//! methods so the invariants below cannot be broken from outside:
//!
//! - a new session always clears the message list and returns to the list view
//! - the list view never carries detail content
//! - every view transition advances the navigation epoch, so an async detail
//!   completion can tell whether the view it was started for is still showing

use serde::Serialize;

use super::{MailMessage, MessageDetail, Session};
use crate::value_objects::{EmailAddress, MessageId};

/// Which pane is showing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "mode", content = "message_id", rename_all = "snake_case")]
pub enum ViewMode {
    /// Message list
    #[default]
    List,
    /// Single message
    Detail(MessageId),
}

/// Content of the detail pane
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum DetailPane {
    /// Nothing requested (list view)
    #[default]
    Idle,
    /// Fetch issued, result pending
    Loading,
    /// Fetched message
    Loaded(Box<MessageDetail>),
    /// Inline error text
    Failed(String),
}

/// Lifecycle of the session slot, drives the address label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Bootstrap has not finished yet
    #[default]
    Loading,
    /// A regenerate is in flight
    Generating,
    /// A session is installed
    Active,
    /// Neither resume nor generation produced a session
    Unavailable,
}

/// Proof that a detail fetch was started under a particular navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    epoch: u64,
    message_id: MessageId,
}

impl DetailTicket {
    /// Message the fetch targets
    pub const fn message_id(&self) -> &MessageId {
        &self.message_id
    }
}

/// Everything the mailbox controller maintains
#[derive(Debug, Clone, Default, Serialize)]
pub struct MailboxState {
    session: Option<Session>,
    status: SessionStatus,
    messages: Vec<MailMessage>,
    view: ViewMode,
    detail: DetailPane,
    #[serde(skip)]
    epoch: u64,
}

impl MailboxState {
    /// Empty state, waiting for bootstrap
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session, if any
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Address of the current session
    pub fn address(&self) -> Option<&EmailAddress> {
        self.session.as_ref().map(Session::email_address)
    }

    /// Session slot status
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Filtered messages in provider order
    pub fn messages(&self) -> &[MailMessage] {
        &self.messages
    }

    /// Current view
    pub const fn view(&self) -> &ViewMode {
        &self.view
    }

    /// Current detail pane
    pub const fn detail(&self) -> &DetailPane {
        &self.detail
    }

    /// Number of messages not yet seen
    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| !m.seen).count()
    }

    /// Whether `session` is the one currently installed
    pub fn is_current_session(&self, session: &Session) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_same(session))
    }

    /// Install a session, discarding everything tied to the previous one
    pub fn install_session(&mut self, session: Session) {
        self.session = Some(session);
        self.status = SessionStatus::Active;
        self.messages.clear();
        self.show_list();
    }

    /// Record that no session could be obtained
    ///
    /// An already installed session is kept; only bootstrap leaves the slot
    /// empty.
    pub fn mark_unavailable(&mut self) {
        self.status = SessionStatus::Unavailable;
    }

    /// Flag a regenerate as in flight, returning the status to restore on failure
    pub fn begin_generating(&mut self) -> SessionStatus {
        std::mem::replace(&mut self.status, SessionStatus::Generating)
    }

    /// Put back a status saved by [`Self::begin_generating`]
    pub fn restore_status(&mut self, status: SessionStatus) {
        self.status = status;
    }

    /// Replace the message list wholesale
    pub fn replace_messages(&mut self, messages: Vec<MailMessage>) {
        self.messages = messages;
    }

    /// Switch to the detail view for `message_id` and mark it loading
    pub fn enter_detail(&mut self, message_id: MessageId) -> DetailTicket {
        self.epoch = self.epoch.wrapping_add(1);
        self.view = ViewMode::Detail(message_id.clone());
        self.detail = DetailPane::Loading;
        DetailTicket {
            epoch: self.epoch,
            message_id,
        }
    }

    /// Switch to the list view
    pub fn show_list(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.view = ViewMode::List;
        self.detail = DetailPane::Idle;
    }

    /// Whether the navigation behind `ticket` is still showing
    pub fn is_current(&self, ticket: &DetailTicket) -> bool {
        self.epoch == ticket.epoch
            && matches!(&self.view, ViewMode::Detail(id) if *id == ticket.message_id)
    }

    /// Bind a fetch result if its navigation is still current
    ///
    /// Returns `false` and leaves the state alone when the result is stale.
    pub fn bind_detail(&mut self, ticket: &DetailTicket, pane: DetailPane) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.detail = pane;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Sender;
    use crate::value_objects::SessionId;

    fn session(token: &str, address: &str) -> Session {
        Session::new(
            SessionId::new(token).unwrap(),
            EmailAddress::new(address).unwrap(),
        )
    }

    fn message(id: &str, seen: bool) -> MailMessage {
        MailMessage::new(MessageId::new(id).unwrap(), Sender::new("a@b.com"), "s").with_seen(seen)
    }

    fn id(raw: &str) -> MessageId {
        MessageId::new(raw).unwrap()
    }

    #[test]
    fn initial_state_is_list_and_loading() {
        let state = MailboxState::new();
        assert!(state.session().is_none());
        assert_eq!(state.status(), SessionStatus::Loading);
        assert_eq!(*state.view(), ViewMode::List);
        assert_eq!(*state.detail(), DetailPane::Idle);
        assert!(state.messages().is_empty());
    }

    #[test]
    fn installing_session_clears_messages_and_view() {
        let mut state = MailboxState::new();
        state.install_session(session("a", "a@y.com"));
        state.replace_messages(vec![message("1", false)]);
        state.enter_detail(id("1"));

        state.install_session(session("b", "b@y.com"));

        assert!(state.messages().is_empty());
        assert_eq!(*state.view(), ViewMode::List);
        assert_eq!(*state.detail(), DetailPane::Idle);
        assert_eq!(state.address().unwrap().as_str(), "b@y.com");
        assert_eq!(state.status(), SessionStatus::Active);
    }

    #[test]
    fn unread_count_is_derived() {
        let mut state = MailboxState::new();
        state.replace_messages(vec![message("1", false), message("2", true), message("3", false)]);
        assert_eq!(state.unread_count(), 2);
    }

    #[test]
    fn current_session_check() {
        let mut state = MailboxState::new();
        let a = session("a", "a@y.com");
        assert!(!state.is_current_session(&a));
        state.install_session(a.clone());
        assert!(state.is_current_session(&a));
        assert!(!state.is_current_session(&session("b", "a@y.com")));
    }

    #[test]
    fn entering_detail_marks_loading() {
        let mut state = MailboxState::new();
        let ticket = state.enter_detail(id("9"));
        assert_eq!(*state.view(), ViewMode::Detail(id("9")));
        assert_eq!(*state.detail(), DetailPane::Loading);
        assert!(state.is_current(&ticket));
        assert_eq!(ticket.message_id(), &id("9"));
    }

    #[test]
    fn binding_after_back_is_rejected() {
        let mut state = MailboxState::new();
        let ticket = state.enter_detail(id("9"));
        state.show_list();

        assert!(!state.bind_detail(&ticket, DetailPane::Failed("x".into())));
        assert_eq!(*state.view(), ViewMode::List);
        assert_eq!(*state.detail(), DetailPane::Idle);
    }

    #[test]
    fn binding_after_reselecting_same_message_is_rejected() {
        let mut state = MailboxState::new();
        let first = state.enter_detail(id("9"));
        state.show_list();
        let second = state.enter_detail(id("9"));

        assert!(!state.bind_detail(&first, DetailPane::Failed("old".into())));
        assert!(state.bind_detail(&second, DetailPane::Failed("new".into())));
        assert_eq!(*state.detail(), DetailPane::Failed("new".into()));
    }

    #[test]
    fn generating_status_can_be_restored() {
        let mut state = MailboxState::new();
        state.install_session(session("a", "a@y.com"));
        let previous = state.begin_generating();
        assert_eq!(state.status(), SessionStatus::Generating);
        state.restore_status(previous);
        assert_eq!(state.status(), SessionStatus::Active);
    }

    #[test]
    fn unavailable_keeps_existing_session() {
        let mut state = MailboxState::new();
        state.install_session(session("a", "a@y.com"));
        state.mark_unavailable();
        assert_eq!(state.status(), SessionStatus::Unavailable);
        assert!(state.session().is_some());
    }

    #[test]
    fn view_serializes_tagged() {
        let json = serde_json::to_value(ViewMode::Detail(id("4"))).unwrap();
        assert_eq!(json["mode"], "detail");
        assert_eq!(json["message_id"], "4");
    }
}
