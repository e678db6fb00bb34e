use crate::{
    AcceptAnyCredentials, CredentialVerifier, Credentials, DurableStore, Identity, NewAccount,
    Result as SessionResult, RestoreOutcome, SessionError, identity::display_name_from_email,
};

use chrono::Utc;
use log::{debug, error, info, warn};

/// Storage key the session record lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "greenport_user";

/// Single source of truth for who is logged in.
///
/// Owns the active [`Identity`] and mirrors it into a [`DurableStore`]. Every
/// mutation assigns the in-memory state and then flushes it; if the flush
/// fails the previous state is put back, so memory and storage never
/// disagree.
pub struct SessionStore<S, V = AcceptAnyCredentials> {
    storage: S,
    verifier: V,
    key: String,
    current: Option<Identity>,
}

impl<S: DurableStore> SessionStore<S, AcceptAnyCredentials> {
    /// Store with the permissive verifier and the default key.
    pub fn new(storage: S) -> Self {
        Self::with_verifier(storage, AcceptAnyCredentials)
    }
}

impl<S: DurableStore, V: CredentialVerifier> SessionStore<S, V> {
    pub fn with_verifier(storage: S, verifier: V) -> Self {
        Self {
            storage,
            verifier,
            key: DEFAULT_STORAGE_KEY.to_string(),
            current: None,
        }
    }

    /// Use a different storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Gives the durable layer back, e.g. to reopen it in a new store.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Loads the saved session, if any. Called once at startup.
    ///
    /// A record that does not parse is logged, removed, and treated as
    /// logged out.
    pub fn restore(&mut self) -> RestoreOutcome {
        self.current = None;

        let record = match self.storage.get(&self.key) {
            Ok(Some(record)) => record,
            Ok(None) => {
                info!("No saved session under '{}'", self.key);
                return RestoreOutcome::NotFound;
            }
            Err(e) => {
                warn!("Saved session under '{}' unreadable: {e}", self.key);
                return RestoreOutcome::Unreadable {
                    message: e.to_string(),
                };
            }
        };

        match Identity::from_record(&record) {
            Ok(identity) => {
                info!(
                    "Restored session: {} ({})",
                    identity.id(),
                    identity.kind()
                );
                self.current = Some(identity.clone());
                RestoreOutcome::Restored(identity)
            }
            Err(e) => {
                warn!("Saved session under '{}' is corrupted: {e}", self.key);
                if let Err(remove_err) = self.storage.remove(&self.key) {
                    warn!("Failed to discard corrupted session: {remove_err}");
                }
                RestoreOutcome::Corrupted {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Starts a session on the shared demo account.
    pub fn login_as_guest(&mut self) -> SessionResult<Identity> {
        self.activate(Identity::guest(Utc::now()))
    }

    /// Starts a registered session. The display name is the local part of
    /// the email.
    #[track_caller]
    pub fn login(&mut self, email: &str, password: &str) -> SessionResult<Identity> {
        let credentials = Credentials::new(email, password);
        credentials.validate()?;
        self.verifier.verify_login(&credentials)?;

        let name = display_name_from_email(&credentials.email).to_string();
        self.activate(Identity::registered(name, credentials.email, Utc::now()))
    }

    /// Creates an account and logs into it.
    #[track_caller]
    pub fn create_account(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> SessionResult<Identity> {
        let account = NewAccount::new(name, email, password);
        account.validate()?;
        self.verifier.verify_signup(&account)?;

        self.activate(Identity::registered(account.name, account.email, Utc::now()))
    }

    /// Ends the session and erases the saved record. Logging out twice is
    /// fine.
    pub fn logout(&mut self) -> SessionResult<()> {
        let previous = self.current.take();

        if let Err(e) = self.storage.remove(&self.key) {
            log_flush_failure("Failed to erase saved session", &e);
            self.current = previous;
            return Err(e);
        }

        match previous {
            Some(identity) => info!("Logged out: {}", identity.id()),
            None => debug!("Logout with no active session"),
        }

        Ok(())
    }

    fn activate(&mut self, identity: Identity) -> SessionResult<Identity> {
        let record = serde_json::to_string(&identity)?;
        let previous = self.current.replace(identity.clone());

        if let Err(e) = self.storage.set(&self.key, &record) {
            log_flush_failure(&format!("Failed to save session {}", identity.id()), &e);
            self.current = previous;
            return Err(e);
        }

        info!("Session started: {} ({})", identity.id(), identity.kind());
        Ok(identity)
    }
}

/// Storage hiccups are worth a retry; anything else is a bug.
fn log_flush_failure(context: &str, e: &SessionError) {
    if e.is_transient() {
        warn!("{context}: {e}");
    } else {
        error!("{context}: {e}");
    }
}
