//! Adapters binding the ports to real services.

pub mod riot;

#[cfg(feature = "telegram")]
pub mod telegram;
