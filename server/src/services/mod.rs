//! Request-scoped services.

pub mod logo;
