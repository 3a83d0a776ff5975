use domain::DomainError;

/// Gate for destructive operations (deletes, hiding equipment).
///
/// The dashboard has a single shared administrator password, there are no
/// user accounts.
#[derive(Clone)]
pub struct AdminGuard {
    password: String,
}

impl AdminGuard {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    pub fn verify(&self, candidate: &str) -> Result<(), DomainError> {
        if candidate == self.password {
            Ok(())
        } else {
            tracing::warn!("Rejected administrator password");
            Err(DomainError::Unauthorized)
        }
    }
}
