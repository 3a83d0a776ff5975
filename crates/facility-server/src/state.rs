use application::{AdminGuard, FacilityStore};
use axum::http::HeaderMap;
use domain::DomainError;

/// Header carrying the shared administrator password
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

pub struct AppState {
    pub store: FacilityStore,
    pub admin: AdminGuard,
}

impl AppState {
    pub fn new(store: FacilityStore, admin: AdminGuard) -> Self {
        Self { store, admin }
    }

    /// Destructive requests must present the admin password.
    pub fn require_admin(&self, headers: &HeaderMap) -> Result<(), DomainError> {
        let candidate = headers
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        self.admin.verify(candidate)
    }
}
