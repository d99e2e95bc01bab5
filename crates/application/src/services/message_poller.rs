//! Message list synchronization
//!
//! Fetches and filters the message list for a session and fetches single
//! message bodies. At most one list fetch is outstanding at a time: callers
//! for the same session join it, callers for another session wait for it to
//! finish before issuing their own.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use domain::{MailMessage, MessageDetail, MessageId, Session, WelcomeFilter};
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{MailboxError, MailboxPort},
};

type ListFetch = Shared<BoxFuture<'static, Result<Vec<MailMessage>, ApplicationError>>>;

/// Whether a caller owns the result it awaited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRole {
    /// First caller to receive the result; applies and reports it
    Leader,
    /// Received a result another caller already owns
    Follower,
}

/// Outcome of a list refresh as seen by one caller
#[derive(Debug, Clone)]
pub struct PolledList {
    /// How this caller took part in the fetch
    pub role: FetchRole,
    /// Filtered list or the fetch error
    pub result: Result<Vec<MailMessage>, ApplicationError>,
}

/// The outstanding list fetch and the session it was issued for
#[derive(Clone)]
struct InFlight {
    session: Session,
    fetch: ListFetch,
    claimed: Arc<AtomicBool>,
}

impl InFlight {
    /// Whichever caller sees the result first owns it, even if the caller
    /// that issued the fetch has gone away
    fn claim(&self) -> FetchRole {
        if self.claimed.swap(true, Ordering::AcqRel) {
            FetchRole::Follower
        } else {
            FetchRole::Leader
        }
    }
}

/// Polls the provider for the message list and message bodies
pub struct MessagePoller {
    mailbox: Arc<dyn MailboxPort>,
    filter: WelcomeFilter,
    in_flight: Mutex<Option<InFlight>>,
}

impl fmt::Debug for MessagePoller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessagePoller")
            .field("filter", &self.filter)
            .field("in_flight", &self.is_refreshing())
            .finish_non_exhaustive()
    }
}

impl MessagePoller {
    /// Create a poller using the given welcome filter
    pub fn new(mailbox: Arc<dyn MailboxPort>, filter: WelcomeFilter) -> Self {
        Self {
            mailbox,
            filter,
            in_flight: Mutex::new(None),
        }
    }

    /// Whether a list fetch is currently outstanding
    pub fn is_refreshing(&self) -> bool {
        self.in_flight.lock().is_some()
    }

    /// Fetch and filter the message list for `session`
    ///
    /// Joins the outstanding fetch when it belongs to the same session
    /// (token and address). A fetch for any other session is awaited first,
    /// so two list requests are never outstanding together. A provider
    /// "no data" answer is an empty mailbox.
    #[instrument(skip(self, session), fields(session = %session.id()))]
    pub async fn refresh(&self, session: &Session) -> PolledList {
        let flight = loop {
            let previous = {
                let mut slot = self.in_flight.lock();
                match slot.as_ref() {
                    Some(flight) if flight.session.is_same(session) => {
                        debug!("Joining in-flight message list fetch");
                        break flight.clone();
                    },
                    Some(flight) => flight.fetch.clone(),
                    None => {
                        let flight = self.start(session);
                        *slot = Some(flight.clone());
                        break flight;
                    },
                }
            };

            debug!("Waiting for the list fetch of a replaced session");
            let _ = previous.clone().await;
            self.release(&previous);
        };

        let result = flight.fetch.clone().await;
        self.release(&flight.fetch);

        PolledList {
            role: flight.claim(),
            result,
        }
    }

    fn start(&self, session: &Session) -> InFlight {
        let fetch = fetch_list(
            Arc::clone(&self.mailbox),
            session.clone(),
            self.filter.clone(),
        )
        .boxed()
        .shared();
        InFlight {
            session: session.clone(),
            fetch,
            claimed: Arc::new(AtomicBool::new(false)),
        }
    }

    fn release(&self, fetch: &ListFetch) {
        let mut slot = self.in_flight.lock();
        if slot.as_ref().is_some_and(|current| current.fetch.ptr_eq(fetch)) {
            *slot = None;
        }
    }

    /// Fetch one message with its body
    ///
    /// Never cached and never deduplicated.
    #[instrument(skip(self, session), fields(session = %session.id()))]
    pub async fn fetch_detail(
        &self,
        session: &Session,
        message_id: &MessageId,
    ) -> Result<MessageDetail, ApplicationError> {
        match self.mailbox.get_message_detail(session, message_id).await {
            Ok(Some(detail)) => Ok(detail),
            Ok(None) => {
                warn!("Provider returned no message detail");
                Err(ApplicationError::Fetch(format!(
                    "message {message_id} is not available"
                )))
            },
            Err(e) => {
                warn!(error = %e, "Message detail fetch failed");
                Err(map_error(e))
            },
        }
    }
}

async fn fetch_list(
    mailbox: Arc<dyn MailboxPort>,
    session: Session,
    filter: WelcomeFilter,
) -> Result<Vec<MailMessage>, ApplicationError> {
    match mailbox.get_messages(&session).await {
        Ok(Some(messages)) => {
            let fetched = messages.len();
            let kept = filter.apply(messages);
            debug!(fetched, kept = kept.len(), "Fetched message list");
            Ok(kept)
        },
        Ok(None) => {
            debug!("Provider returned no list, treating mailbox as empty");
            Ok(Vec::new())
        },
        Err(e) => {
            warn!(error = %e, "Message list fetch failed");
            Err(map_error(e))
        },
    }
}

fn map_error(e: MailboxError) -> ApplicationError {
    ApplicationError::Fetch(e.to_string())
}
