//! Session state and route protection for the GreenPort dashboard.
//!
//! [`SessionStore`] owns the logged-in [`Identity`] and persists it through a
//! [`DurableStore`]. [`RouteGuard`] decides, from that state, whether a
//! [`Route`] renders or redirects to the login page.

pub mod credentials;
pub mod error;
pub mod identity;
pub mod restore_outcome;
pub mod route;
pub mod route_guard;
pub mod session_store;
pub mod storage;
pub mod verifier;

pub use credentials::{Credentials, NewAccount};
pub use error::{Result, SessionError};
pub use identity::{GUEST_EMAIL, GUEST_NAME, Identity, IdentityKind};
pub use restore_outcome::RestoreOutcome;
pub use route::Route;
pub use route_guard::{Navigation, RouteGuard};
pub use session_store::{DEFAULT_STORAGE_KEY, SessionStore};
pub use storage::DurableStore;
pub use storage::file_store::FileStore;
pub use storage::memory_store::MemoryStore;
pub use verifier::{AcceptAnyCredentials, CredentialVerifier};

#[cfg(test)]
mod tests;
