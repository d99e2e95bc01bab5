//! Controller assembly from configuration

use std::sync::Arc;

use application::{MailboxController, ports::MailboxPort};
use tokio::sync::mpsc;
use tracing::info;

use crate::{
    adapters::{BadgeSignal, ChannelBadgeAdapter, CommandClipboardAdapter},
    config::AppConfig,
};

/// A ready controller plus the badge signal stream it feeds
#[derive(Debug)]
pub struct WiredMailbox {
    /// The controller; call `initialize` then `spawn_polling`
    pub controller: Arc<MailboxController>,
    /// Receives a signal after every applied refresh or regenerate
    pub badge_signals: mpsc::UnboundedReceiver<BadgeSignal>,
}

/// Build a controller for `mailbox` using the configured adapters
pub fn build_controller(config: &AppConfig, mailbox: Arc<dyn MailboxPort>) -> WiredMailbox {
    let (badge, badge_signals) = ChannelBadgeAdapter::channel();
    let mut controller =
        MailboxController::new(mailbox, Arc::new(badge), config.controller_config());

    if config.clipboard.enabled {
        info!(command = %config.clipboard.command, "Clipboard enabled");
        controller =
            controller.with_clipboard(Arc::new(CommandClipboardAdapter::from_config(&config.clipboard)));
    }

    WiredMailbox {
        controller: Arc::new(controller),
        badge_signals,
    }
}
