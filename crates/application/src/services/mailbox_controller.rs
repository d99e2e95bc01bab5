//! Mailbox orchestration
//!
//! Owns the [`MailboxState`] and wires the session manager, poller, view
//! controller and notification center together. Every refresh trigger, the
//! periodic timer included, goes through [`MailboxController::refresh`].

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use domain::{EmailAddress, MailboxState, MessageId, SessionStatus, WelcomeFilter};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use super::{
    message_poller::{FetchRole, MessagePoller},
    notification_center::{DEFAULT_DISMISS_AFTER, NotificationCenter},
    session_manager::{SessionManager, SessionOrigin},
    view_controller::{DetailOutcome, ViewController},
};
use crate::{
    error::ApplicationError,
    ports::{BadgePort, ClipboardPort, MailboxPort},
};

/// Default interval of the background refresh timer
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

const GENERATED_TEXT: &str = "New email generated!";
const LOAD_FAILED_TEXT: &str = "Failed to load email";
const NO_MAILBOX_TEXT: &str = "Failed to generate email";
const REFRESH_FAILED_TEXT: &str = "Failed to refresh emails";
const GENERATE_FAILED_TEXT: &str = "Failed to generate new email";
const COPIED_TEXT: &str = "Email copied to clipboard!";
const COPY_FAILED_TEXT: &str = "Failed to copy email";

/// Tunables for [`MailboxController`]
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Period of the background refresh timer
    pub poll_interval: Duration,
    /// How long a notification stays visible
    pub notification_ttl: Duration,
    /// Provider noise to hide from the list
    pub welcome_filter: WelcomeFilter,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            notification_ttl: DEFAULT_DISMISS_AFTER,
            welcome_filter: WelcomeFilter::default(),
        }
    }
}

/// Result of a [`MailboxController::refresh`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// New list installed
    Applied {
        /// Messages after filtering
        total: usize,
        /// Of which unread
        unread: usize,
    },
    /// Shared a fetch whose result another trigger applies
    Joined,
    /// The session changed while fetching; result dropped
    Stale,
    /// No session, or a regenerate is in flight
    Suspended,
    /// Fetch failed; previous list kept
    Failed,
}

/// Result of a [`MailboxController::regenerate`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegenerateOutcome {
    /// New mailbox installed
    Replaced(EmailAddress),
    /// Another regenerate is still running
    AlreadyRunning,
    /// Provider could not create a mailbox; previous session kept
    Failed,
}

/// Clears the regenerate flag when the regenerate ends, however it ends
struct RegenerateGuard<'a>(&'a AtomicBool);

impl Drop for RegenerateGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Front door of the mailbox core
pub struct MailboxController {
    state: Mutex<MailboxState>,
    sessions: SessionManager,
    poller: Arc<MessagePoller>,
    views: ViewController,
    notifications: NotificationCenter,
    badge: Arc<dyn BadgePort>,
    clipboard: Option<Arc<dyn ClipboardPort>>,
    regenerating: AtomicBool,
    config: ControllerConfig,
}

impl fmt::Debug for MailboxController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailboxController")
            .field("status", &self.state.lock().status())
            .field("regenerating", &self.regenerating.load(Ordering::Relaxed))
            .field("has_clipboard", &self.clipboard.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MailboxController {
    /// Create a controller; call [`Self::initialize`] before anything else
    pub fn new(
        mailbox: Arc<dyn MailboxPort>,
        badge: Arc<dyn BadgePort>,
        config: ControllerConfig,
    ) -> Self {
        let poller = Arc::new(MessagePoller::new(
            Arc::clone(&mailbox),
            config.welcome_filter.clone(),
        ));
        Self {
            state: Mutex::new(MailboxState::new()),
            sessions: SessionManager::new(mailbox),
            views: ViewController::new(Arc::clone(&poller)),
            poller,
            notifications: NotificationCenter::new(config.notification_ttl),
            badge,
            clipboard: None,
            regenerating: AtomicBool::new(false),
            config,
        }
    }

    /// Enable [`Self::copy_address`]
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardPort>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Resume or generate a session, then load the message list
    ///
    /// On failure the address slot shows an error and refreshes stay
    /// suspended until a regenerate succeeds.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<SessionOrigin, ApplicationError> {
        let bootstrapped = match self.sessions.bootstrap().await {
            Ok(bootstrapped) => bootstrapped,
            Err(e) => {
                warn!(error = %e, "Mailbox bootstrap failed");
                self.state.lock().mark_unavailable();
                self.notifications.error(match e {
                    ApplicationError::NoMailbox => NO_MAILBOX_TEXT,
                    _ => LOAD_FAILED_TEXT,
                });
                return Err(e);
            },
        };

        self.state.lock().install_session(bootstrapped.session);
        if bootstrapped.origin == SessionOrigin::Generated {
            self.notifications.info(GENERATED_TEXT);
        }

        self.refresh().await;
        Ok(bootstrapped.origin)
    }

    /// Reload the message list for the current session
    ///
    /// Overlapping calls share one fetch. The first caller to receive its
    /// result applies it and reports failures, so an abandoned trigger does
    /// not lose a completed fetch.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> RefreshOutcome {
        if self.regenerating.load(Ordering::Acquire) {
            debug!("Refresh suspended while regenerating");
            return RefreshOutcome::Suspended;
        }

        let Some(session) = self.state.lock().session().cloned() else {
            debug!("Refresh suspended without a session");
            return RefreshOutcome::Suspended;
        };

        let polled = self.poller.refresh(&session).await;
        if polled.role == FetchRole::Follower {
            return RefreshOutcome::Joined;
        }

        let messages = match polled.result {
            Ok(messages) => messages,
            Err(e) => {
                warn!(error = %e, "Message refresh failed");
                self.notifications.error(REFRESH_FAILED_TEXT);
                return RefreshOutcome::Failed;
            },
        };

        let outcome = {
            let mut state = self.state.lock();
            if !state.is_current_session(&session) {
                debug!("Discarding message list for replaced session");
                return RefreshOutcome::Stale;
            }
            state.replace_messages(messages);
            RefreshOutcome::Applied {
                total: state.messages().len(),
                unread: state.unread_count(),
            }
        };

        self.signal_badge();
        outcome
    }

    /// Replace the current mailbox with a freshly generated one
    ///
    /// Refresh triggers are suspended for the duration. A failure leaves the
    /// previous session, messages and view untouched.
    #[instrument(skip(self))]
    pub async fn regenerate(&self) -> RegenerateOutcome {
        if self
            .regenerating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Regenerate already in flight");
            return RegenerateOutcome::AlreadyRunning;
        }
        let _guard = RegenerateGuard(&self.regenerating);

        let previous = self.state.lock().begin_generating();

        match self.sessions.regenerate().await {
            Ok(session) => {
                let address = session.email_address().clone();
                self.state.lock().install_session(session);
                info!(address = %address, "Mailbox replaced");
                self.notifications.info(GENERATED_TEXT);
                self.signal_badge();
                RegenerateOutcome::Replaced(address)
            },
            Err(e) => {
                warn!(error = %e, "Mailbox regenerate failed");
                self.state.lock().restore_status(previous);
                self.notifications.error(GENERATE_FAILED_TEXT);
                RegenerateOutcome::Failed
            },
        }
    }

    /// Open a message in the detail view
    pub async fn select(&self, message_id: MessageId) -> DetailOutcome {
        self.views.select(&self.state, message_id).await
    }

    /// Return to the list view
    pub fn back(&self) {
        self.views.back(&self.state);
    }

    /// Copy the active address to the clipboard
    ///
    /// Returns `false` without notifying when no session is active.
    #[instrument(skip(self))]
    pub async fn copy_address(&self) -> bool {
        let address = {
            let state = self.state.lock();
            match (state.status(), state.address()) {
                (SessionStatus::Active, Some(address)) => address.clone(),
                _ => return false,
            }
        };

        let Some(clipboard) = &self.clipboard else {
            warn!("No clipboard configured");
            self.notifications.error(COPY_FAILED_TEXT);
            return false;
        };

        match clipboard.write_text(address.as_str()).await {
            Ok(()) => {
                self.notifications.info(COPIED_TEXT);
                true
            },
            Err(e) => {
                warn!(error = %e, "Clipboard write failed");
                self.notifications.error(COPY_FAILED_TEXT);
                false
            },
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> MailboxState {
        self.state.lock().clone()
    }

    /// Unread messages in the current list
    pub fn unread_count(&self) -> usize {
        self.state.lock().unread_count()
    }

    /// Status line shared by all operations
    pub const fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Configuration in use
    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Spawn the background refresh timer
    ///
    /// Ticks every `poll_interval`, skipping the immediate first tick, and
    /// keeps going regardless of failures. Abort the returned handle on
    /// shutdown.
    pub fn spawn_polling(self: &Arc<Self>) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        let poll_interval = self.config.poll_interval;
        info!(
            interval_secs = poll_interval.as_secs(),
            "Starting mailbox polling task"
        );

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let outcome = controller.refresh().await;
                debug!(?outcome, "Scheduled refresh finished");
            }
        })
    }

    fn signal_badge(&self) {
        if let Err(e) = self.badge.check_emails() {
            warn!(error = %e, "Badge signal failed");
        }
    }
}
