use tracing::{error, info, warn};

/// Advisory tag on a notification. Displays may style by it, nothing else changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Shows a message to the user
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str, kind: NotificationKind) {
        (**self).notify(message, kind)
    }
}

/// Writes notifications to the log instead of the screen
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Info | NotificationKind::Success => info!("{message}"),
            NotificationKind::Warning => warn!("{message}"),
            NotificationKind::Error => error!("{message}"),
        }
    }
}

/// `window.alert`
#[cfg(feature = "wasm")]
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

#[cfg(feature = "wasm")]
impl Notifier for AlertNotifier {
    fn notify(&self, message: &str, _kind: NotificationKind) {
        gloo::dialogs::alert(message);
    }
}
