//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary every crate in the workspace agrees on:
//! - The unified [`error::app_error::AppError`] and its [`error::kind::ErrorKind`]
//! - Typed ID wrappers for persisted records
//!
//! Nothing here knows about launch payloads, players or quizzes.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
