//! Bridge between the UI command queue and the async delivery backend.

pub mod commands;
pub mod runtime;
