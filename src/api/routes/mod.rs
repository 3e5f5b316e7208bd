//! API route modules.

pub mod transcript;
