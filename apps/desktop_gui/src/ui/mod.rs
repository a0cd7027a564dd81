//! UI layer: app shell, page sections, overlays, and theme.

pub mod app;
pub mod sections;
pub mod theme;

pub use app::PortfolioApp;
