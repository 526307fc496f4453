//! Request gates.
//!
//! - [`auth`]: Authentication Gate. Verifies the bearer token and attaches the
//!   [`Identity`](ticketdesk_auth::Identity) to the request.
//! - [`role`]: Authorization Gate. Looks the identity up in the subject store
//!   and checks its role.
//!
//! # Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::require_auth`] verifies it; failure ends the request with 401
//! 3. [`role::require_admin`] (admin routes only) reads the subject record;
//!    403 on role mismatch, 500 when the record cannot be read
//! 4. The handler runs
//!
//! The order is fixed. Layers are applied so that `require_auth` is the
//! outermost:
//!
//! ```ignore
//! init_admin_router()
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
//! ```

pub mod auth;
pub mod role;
