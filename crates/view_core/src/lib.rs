//! Headless view-state models for the portfolio page. Everything the page
//! does interactively lives here (category filtering, the contact form
//! lifecycle, per-section reveal latches, the intro loading sequence, and
//! pointer tracking), so the rendering layer only maps state to paint calls.

pub mod contact_form;
pub mod delivery;
pub mod filter;
pub mod loading;
pub mod pointer;
pub mod reveal;

pub use contact_form::{ContactField, ContactForm, FormError};
pub use delivery::{DeliveryService, MissingDeliveryService, SimulatedDelivery};
pub use filter::{FilterError, PortfolioFilter};
pub use loading::{LoadingPhase, LoadingSequencer, ScrollLock, ScrollLockGuard};
pub use pointer::{PointerSample, PointerTracker, Tilt};
pub use reveal::{RevealPose, RevealState, SectionReveal};
