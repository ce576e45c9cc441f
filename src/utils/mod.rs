//! Common utilities and helpers

pub mod alphanum;
pub mod error;
