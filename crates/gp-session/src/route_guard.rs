use crate::{CredentialVerifier, DurableStore, Route, SessionStore};

/// What the router should do with a requested destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Show the requested destination
    Render(Route),
    /// Send the visitor elsewhere, replacing the current history entry
    Redirect(Route),
}

impl Navigation {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }

    /// The route that ends up on screen.
    pub fn target(&self) -> &Route {
        match self {
            Self::Render(route) | Self::Redirect(route) => route,
        }
    }
}

/// Keeps protected routes behind the login page.
///
/// Stateless: every navigation is decided from the session state at that
/// moment, so a logout is seen by the very next evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    pub fn evaluate(authenticated: bool, requested: Route) -> Navigation {
        if requested.is_protected() && !authenticated {
            Navigation::Redirect(Route::Login)
        } else {
            Navigation::Render(requested)
        }
    }

    /// Evaluates against the store's current state.
    pub fn check<S, V>(session: &SessionStore<S, V>, requested: Route) -> Navigation
    where
        S: DurableStore,
        V: CredentialVerifier,
    {
        Self::evaluate(session.is_authenticated(), requested)
    }
}
