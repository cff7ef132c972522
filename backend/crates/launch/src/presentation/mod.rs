//! Presentation Layer
//!
//! HTTP handler, DTOs and the identity middleware for protected routes.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
