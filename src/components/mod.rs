//! UI components built with Leptos.
//!
//! - [`Header`] - completion score, signature mode and reset
//! - [`Onboarding`] - two-step preference capture
//! - [`MainLayout`] - the three component columns and the links between them
//! - [`FeaturePanels`] - features of the selected components
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod features;
pub mod header;
pub mod icons;
pub mod layout;
pub mod onboarding;

pub use features::FeaturePanels;
pub use header::Header;
pub use layout::MainLayout;
pub use onboarding::Onboarding;
