use crate::{Result as SessionResult, SessionError};

/// Email/password pair submitted on the login form.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-empty.
    #[track_caller]
    pub fn validate(&self) -> SessionResult<()> {
        require_non_empty("email", &self.email)?;
        require_non_empty("password", &self.password)
    }
}

/// Fields submitted on the create-account form.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewAccount {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// All three fields must be non-empty. The form checks this before
    /// submitting; reaching here with an empty field is a caller bug.
    #[track_caller]
    pub fn validate(&self) -> SessionResult<()> {
        require_non_empty("name", &self.name)?;
        require_non_empty("email", &self.email)?;
        require_non_empty("password", &self.password)
    }
}

#[track_caller]
fn require_non_empty(field: &'static str, value: &str) -> SessionResult<()> {
    if value.is_empty() {
        return Err(SessionError::validation(field, "must not be empty"));
    }
    Ok(())
}
