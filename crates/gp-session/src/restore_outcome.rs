use crate::Identity;

/// Result of restoring a session at startup.
///
/// Restoring never fails: anything other than a well-formed record leaves the
/// store logged out, and the variant tells the caller why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A saved identity was loaded and is now active
    Restored(Identity),
    /// Nothing saved (first launch or after logout)
    NotFound,
    /// Record existed but did not parse; it has been discarded
    Corrupted { message: String },
    /// Storage could not be read
    Unreadable { message: String },
}

impl RestoreOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Restored(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Restored(identity) => Some(identity),
            _ => None,
        }
    }
}
