//! Page load checks run before a protected view renders

use shared::model::Role;
use tracing::debug;

use crate::{
    api::SessionClient,
    notify::{NotificationKind, Notifier},
    routes::{ClientRoute, Guard},
    storage::Storage,
    transport::Transport,
};

pub const UNAUTHORIZED_ACCESS_MESSAGE: &str = "Unauthorized access";

/// Redirects to the login view unless a token is present
pub fn require_auth<S: Storage, T: Transport>(client: &SessionClient<S, T>) -> Guard {
    if client.is_authenticated() {
        Guard::Allow
    } else {
        debug!("require_auth: no session, redirecting to {}", ClientRoute::Login.path());
        Guard::Redirect(ClientRoute::Login)
    }
}

/// Allows the page only when the stored user has `role`, compared without case
///
/// A missing user or a user without a role fails the check. On failure the
/// user is told through `notifier` before the redirect.
pub fn check_role<S, T, N>(client: &SessionClient<S, T>, role: Role, notifier: &N) -> Guard
where
    S: Storage,
    T: Transport,
    N: Notifier + ?Sized,
{
    if client.get_user().is_some_and(|user| user.has_role(role)) {
        return Guard::Allow;
    }

    debug!("check_role({role}): denied");
    notifier.notify(UNAUTHORIZED_ACCESS_MESSAGE, NotificationKind::Error);
    Guard::Redirect(ClientRoute::Login)
}
