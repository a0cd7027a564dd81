//! Domain types shared between the view-state model and the desktop app.

pub mod catalog;
pub mod contact;
pub mod domain;
pub mod error;
