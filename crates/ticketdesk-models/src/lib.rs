//! # Ticketdesk Models
//!
//! Domain models and DTOs shared across the Ticketdesk API.
//!
//! - [`ids`]: the [`SubjectId`] newtype
//! - [`users`]: subject records, roles and the public profile shape
//! - [`auth`]: login request DTO

pub mod auth;
pub mod ids;
pub mod users;

pub use auth::LoginRequest;
pub use ids::{InvalidSubjectId, SubjectId};
pub use users::{Role, SubjectRecord, UnknownRole, UserProfile};
