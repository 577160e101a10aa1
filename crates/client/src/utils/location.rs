use tracing::debug;

use crate::{error::ClientError, routes::ClientRoute};

/// Sends the browser to `route`. The page unloads, so this is the last thing a handler does
pub fn navigate(route: ClientRoute) -> Result<(), ClientError> {
    debug!("navigate({})", route.path());
    gloo::utils::window()
        .location()
        .set_href(route.path())
        .map_err(|e| ClientError::Browser { message: format!("{e:?}") })
}

/// Navigates when `redirect` names a route, otherwise does nothing
///
/// Pairs with [ClientError::redirect] and [crate::routes::Guard::redirect].
pub fn follow(redirect: Option<ClientRoute>) -> Result<(), ClientError> {
    match redirect {
        Some(route) => navigate(route),
        None => Ok(()),
    }
}
