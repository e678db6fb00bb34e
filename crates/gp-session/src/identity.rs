use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const GUEST_ID_PREFIX: &str = "guest";
const USER_ID_PREFIX: &str = "user";

/// Display name used for the guest demo account.
pub const GUEST_NAME: &str = "Demo Client";
/// Email used for the guest demo account.
pub const GUEST_EMAIL: &str = "demo@greenport.io";

/// Kind of principal behind an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityKind {
    /// Demo visitor, no account
    Guest,
    /// Logged in or freshly created account
    Registered,
}

impl IdentityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Registered => "registered",
        }
    }
}

impl std::fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The currently authenticated principal.
///
/// Only the session store builds identities, including when reading a saved
/// record back. Fields are read-only; a new login replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    id: String,
    name: String,
    email: String,
    #[serde(rename = "type")]
    kind: IdentityKind,
    #[serde(rename = "loginTime")]
    login_time: DateTime<Utc>,
}

/// Saved record layout, readable only inside this crate.
#[derive(Deserialize)]
struct StoredIdentity {
    id: String,
    name: String,
    email: String,
    #[serde(rename = "type")]
    kind: IdentityKind,
    #[serde(rename = "loginTime")]
    login_time: DateTime<Utc>,
}

impl From<StoredIdentity> for Identity {
    fn from(stored: StoredIdentity) -> Self {
        Self {
            id: stored.id,
            name: stored.name,
            email: stored.email,
            kind: stored.kind,
            login_time: stored.login_time,
        }
    }
}

impl Identity {
    /// Parses a record written by [`Identity`]'s `Serialize` impl.
    pub(crate) fn from_record(record: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<StoredIdentity>(record).map(Self::from)
    }

    pub(crate) fn guest(now: DateTime<Utc>) -> Self {
        Self {
            id: generate_id(GUEST_ID_PREFIX),
            name: GUEST_NAME.to_string(),
            email: GUEST_EMAIL.to_string(),
            kind: IdentityKind::Guest,
            login_time: now,
        }
    }

    pub(crate) fn registered(name: String, email: String, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_id(USER_ID_PREFIX),
            name,
            email,
            kind: IdentityKind::Registered,
            login_time: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn kind(&self) -> IdentityKind {
        self.kind
    }

    pub fn login_time(&self) -> DateTime<Utc> {
        self.login_time
    }

    pub fn is_guest(&self) -> bool {
        self.kind == IdentityKind::Guest
    }
}

/// Display name derived from an email address: everything before the first `@`.
pub fn display_name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}
