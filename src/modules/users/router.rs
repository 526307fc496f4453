use axum::{Router, routing::get};

use super::controller::{get_me, get_user};
use crate::state::AppState;

/// Routes for any authenticated subject.
pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

/// Routes that additionally require the admin role.
pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/users/{id}", get(get_user))
}
