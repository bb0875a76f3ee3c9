//! Route handlers.

pub mod analyze;
pub mod status;
