//! Viewport observation for the single-page layout.
//!
//! [`ViewportTracker`] decides which section the navigation highlights and
//! [`RevealAnimator`] plays each flagged element's entrance animation once.
//! Both talk to the platform only through the traits in [`observer`], so the
//! browser adapter can be swapped for an in-memory scheduler in tests.

#[cfg(feature = "hydrate")]
pub mod browser;
#[cfg(test)]
mod fake;
pub mod observer;
pub mod reveal;
pub mod tracker;

pub use observer::{
    BatchCallback, Document, Inset, IntersectionEntry, ObserverError, ObserverFactory,
    ObserverGuard, ObserverOptions, RootMargin, VisibilityObserver,
};
pub use reveal::{
    RevealAnimator, RevealConfig, REVEALED_CLASS, REVEAL_ATTRIBUTE, REVEAL_READY_CLASS,
};
pub use tracker::{NavItem, NavigationState, Section, SectionId, TrackerConfig, ViewportTracker};
