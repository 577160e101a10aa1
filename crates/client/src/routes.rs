/// Client side views the session layer can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientRoute {
    Login,
}

impl ClientRoute {
    pub const fn path(self) -> &'static str {
        match self {
            ClientRoute::Login => "/login",
        }
    }
}

/// Outcome of a page load guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Allow,
    Redirect(ClientRoute),
}

impl Guard {
    pub fn is_allowed(self) -> bool {
        matches!(self, Guard::Allow)
    }

    pub fn redirect(self) -> Option<ClientRoute> {
        match self {
            Guard::Allow => None,
            Guard::Redirect(route) => Some(route),
        }
    }
}
