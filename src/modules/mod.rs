//! Feature modules.
//!
//! - [`auth`]: login, the only place tokens are issued over HTTP
//! - [`users`]: profile lookups behind the auth gates

pub mod auth;
pub mod users;
