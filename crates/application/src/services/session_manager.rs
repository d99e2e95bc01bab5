//! Mailbox session lifecycle
//!
//! Resumes the session the provider remembers or generates a new mailbox.
//! The manager holds no session itself; the controller owns the one in use.

use std::{fmt, sync::Arc};

use domain::Session;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GeneratedMailbox, MailboxPort},
};

/// Where a bootstrapped session came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOrigin {
    /// The provider still had a session for this client
    Resumed,
    /// A new mailbox was created
    Generated,
}

/// Session produced by [`SessionManager::bootstrap`]
#[derive(Debug, Clone)]
pub struct Bootstrapped {
    /// Session to install
    pub session: Session,
    /// How it was obtained
    pub origin: SessionOrigin,
}

/// Creates or resumes mailbox sessions
pub struct SessionManager {
    mailbox: Arc<dyn MailboxPort>,
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager").finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(mailbox: Arc<dyn MailboxPort>) -> Self {
        Self { mailbox }
    }

    /// Resume the existing session, generating a mailbox when there is none
    ///
    /// A failed resume falls through to generation. Fails with
    /// [`ApplicationError::NoMailbox`] when generation yields nothing and
    /// with `SessionUnavailable` when it errors.
    #[instrument(skip(self))]
    pub async fn bootstrap(&self) -> Result<Bootstrapped, ApplicationError> {
        match self.mailbox.get_session().await {
            Ok(Some(session)) => {
                info!(address = %session.email_address(), "Resumed mailbox session");
                return Ok(Bootstrapped {
                    session,
                    origin: SessionOrigin::Resumed,
                });
            },
            Ok(None) => debug!("No existing session"),
            Err(e) => warn!(error = %e, "Failed to resume session"),
        }

        let session = self.generate().await?;
        Ok(Bootstrapped {
            session,
            origin: SessionOrigin::Generated,
        })
    }

    /// Request a brand new mailbox, unconditionally
    #[instrument(skip(self))]
    pub async fn regenerate(&self) -> Result<Session, ApplicationError> {
        self.generate().await
    }

    async fn generate(&self) -> Result<Session, ApplicationError> {
        match self.mailbox.generate_mailbox().await {
            Ok(Some(GeneratedMailbox { address, session })) => {
                info!(address = %address, "Generated new mailbox");
                Ok(session.with_email_address(address))
            },
            Ok(None) => {
                warn!("Provider returned no mailbox");
                Err(ApplicationError::NoMailbox)
            },
            Err(e) => {
                warn!(error = %e, "Mailbox generation failed");
                Err(ApplicationError::SessionUnavailable(e.to_string()))
            },
        }
    }
}
