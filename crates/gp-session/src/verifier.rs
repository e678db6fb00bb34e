use crate::{Credentials, NewAccount, Result as SessionResult};

/// Decides whether submitted credentials may open a session.
///
/// The store validates field presence before calling into the verifier, so
/// implementations only deal with the actual credential check.
pub trait CredentialVerifier {
    fn verify_login(&self, credentials: &Credentials) -> SessionResult<()>;

    fn verify_signup(&self, account: &NewAccount) -> SessionResult<()>;
}

/// Accepts every non-empty credential. There is no account authority behind
/// the dashboard yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyCredentials;

impl CredentialVerifier for AcceptAnyCredentials {
    fn verify_login(&self, _credentials: &Credentials) -> SessionResult<()> {
        Ok(())
    }

    fn verify_signup(&self, _account: &NewAccount) -> SessionResult<()> {
        Ok(())
    }
}
