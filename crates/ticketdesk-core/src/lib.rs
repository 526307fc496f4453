//! # Ticketdesk Core
//!
//! Core types shared by every Ticketdesk crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use ticketdesk_core::errors::AppError;
//! use ticketdesk_core::password::{hash_password, verify_password};
//!
//! let error = AppError::forbidden("Access denied");
//! let hash = hash_password("secure_password")?;
//! ```

pub mod errors;
pub mod password;

pub use errors::AppError;
pub use password::{hash_password, verify_password};
