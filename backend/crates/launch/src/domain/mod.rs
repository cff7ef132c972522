//! Domain Layer
//!
//! - `payload` - the launch payload and its canonical check-string
//! - `services` - the host platform's signature scheme
//! - `identity` - the identity claim, available only after verification

pub mod identity;
pub mod payload;
pub mod services;
