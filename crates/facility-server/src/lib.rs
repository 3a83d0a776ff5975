pub mod api;
pub mod error;
pub mod state;

use application::{AdminGuard, FacilityStore};
use state::AppState;
use std::sync::Arc;

pub fn setup_app_state(store: FacilityStore, admin: AdminGuard) -> Arc<AppState> {
    Arc::new(AppState::new(store, admin))
}
