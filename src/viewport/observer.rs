use std::{fmt, marker::PhantomData};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObserverError {
    #[error("Intersection observer unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid observer options: {0}")]
    InvalidOptions(String),
    #[error("No document to observe")]
    NoDocument,
}

/// One side of a root margin, in CSS units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inset {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for Inset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inset::Px(v) => write!(f, "{v}px"),
            Inset::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Grows (positive) or shrinks (negative) the viewport before intersections are computed.
///
/// Displays as the CSS shorthand the platform expects, e.g. `-40% 0px -55% 0px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: Inset,
    pub right: Inset,
    pub bottom: Inset,
    pub left: Inset,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin {
        top: Inset::Px(0.0),
        right: Inset::Px(0.0),
        bottom: Inset::Px(0.0),
        left: Inset::Px(0.0),
    };

    pub fn vertical(top: Inset, bottom: Inset) -> Self {
        Self {
            top,
            bottom,
            ..Self::ZERO
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: RootMargin,
    pub thresholds: Vec<f64>,
}

impl ObserverOptions {
    pub fn validate(&self) -> Result<(), ObserverError> {
        if self.thresholds.is_empty() {
            return Err(ObserverError::InvalidOptions(
                "at least one threshold is required".to_string(),
            ));
        }
        if let Some(t) = self
            .thresholds
            .iter()
            .find(|t| !(0.0..=1.0).contains(*t))
        {
            return Err(ObserverError::InvalidOptions(format!(
                "threshold {t} is outside 0..=1"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<R> {
    pub target: R,
    pub is_intersecting: bool,
    /// Fraction of the target inside the intersection window.
    pub ratio: f64,
}

impl<R> IntersectionEntry<R> {
    /// The ratio of an intersecting entry. Non-finite ratios count as not visible.
    pub fn visible_ratio(&self) -> Option<f64> {
        (self.is_intersecting && self.ratio.is_finite()).then_some(self.ratio)
    }
}

pub trait VisibilityObserver<R> {
    fn observe(&self, region: &R);
    fn unobserve(&self, region: &R);
    fn disconnect(&self);
}

/// Invoked with each batch of changes and the observer that produced it.
pub type BatchCallback<R> = Box<dyn FnMut(Vec<IntersectionEntry<R>>, &dyn VisibilityObserver<R>)>;

pub trait ObserverFactory<R> {
    type Observer: VisibilityObserver<R>;

    fn create(
        &self,
        options: &ObserverOptions,
        callback: BatchCallback<R>,
    ) -> Result<Self::Observer, ObserverError>;
}

/// The live document the observers look regions up in.
pub trait Document<R> {
    fn region_by_id(&self, id: &str) -> Option<R>;
    /// Every region carrying the reveal attribute, in document order.
    fn revealable_regions(&self) -> Vec<R>;
    fn mark_revealed(&self, region: &R);
    /// Toggles the document-wide marker that lets unrevealed elements start hidden.
    fn set_reveal_ready(&self, ready: bool);
}

/// Owns an observer and disconnects it when dropped.
pub struct ObserverGuard<R, O: VisibilityObserver<R>> {
    observer: Option<O>,
    _region: PhantomData<fn(&R)>,
}

impl<R, O: VisibilityObserver<R>> ObserverGuard<R, O> {
    pub fn new(observer: O) -> Self {
        Self {
            observer: Some(observer),
            _region: PhantomData,
        }
    }

    pub fn empty() -> Self {
        Self {
            observer: None,
            _region: PhantomData,
        }
    }

    pub fn is_active(&self) -> bool {
        self.observer.is_some()
    }

    pub fn observe(&self, region: &R) {
        if let Some(observer) = &self.observer {
            observer.observe(region);
        }
    }

    pub fn release(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl<R, O: VisibilityObserver<R>> Drop for ObserverGuard<R, O> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::fake::{FakeObserver, FakeScheduler};

    #[test]
    fn test_root_margin_display() {
        let margin = RootMargin::vertical(Inset::Percent(-40.0), Inset::Percent(-55.0));
        assert_eq!(margin.to_string(), "-40% 0px -55% 0px");
        assert_eq!(RootMargin::ZERO.to_string(), "0px 0px 0px 0px");

        let margin = RootMargin {
            top: Inset::Px(12.5),
            right: Inset::Percent(5.0),
            bottom: Inset::Px(-8.0),
            left: Inset::Percent(0.0),
        };
        assert_eq!(margin.to_string(), "12.5px 5% -8px 0%");
    }

    #[test]
    fn test_options_validation() {
        let options = ObserverOptions {
            root_margin: RootMargin::ZERO,
            thresholds: vec![0.0, 0.5, 1.0],
        };
        assert!(options.validate().is_ok());

        let empty = ObserverOptions {
            thresholds: vec![],
            ..options.clone()
        };
        assert!(matches!(
            empty.validate(),
            Err(ObserverError::InvalidOptions(_))
        ));

        let out_of_range = ObserverOptions {
            thresholds: vec![0.2, 1.5],
            ..options.clone()
        };
        assert!(matches!(
            out_of_range.validate(),
            Err(ObserverError::InvalidOptions(_))
        ));

        let nan = ObserverOptions {
            thresholds: vec![f64::NAN],
            ..options
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_visible_ratio_ignores_non_finite() {
        let seen = |is_intersecting, ratio| IntersectionEntry {
            target: "a",
            is_intersecting,
            ratio,
        };
        assert_eq!(seen(true, 0.4).visible_ratio(), Some(0.4));
        assert_eq!(seen(true, 0.0).visible_ratio(), Some(0.0));
        assert_eq!(seen(false, 0.4).visible_ratio(), None);
        assert_eq!(seen(true, f64::NAN).visible_ratio(), None);
        assert_eq!(seen(true, f64::INFINITY).visible_ratio(), None);
        assert_eq!(seen(true, f64::NEG_INFINITY).visible_ratio(), None);
    }

    #[test]
    fn test_guard_disconnects_on_drop() {
        let scheduler = FakeScheduler::<&'static str>::new();
        let options = ObserverOptions {
            root_margin: RootMargin::ZERO,
            thresholds: vec![0.0],
        };
        let observer = scheduler
            .create(&options, Box::new(|_, _| {}))
            .expect("fake observer should be created");
        {
            let guard = ObserverGuard::new(observer);
            guard.observe(&"a");
            assert!(guard.is_active());
            assert_eq!(scheduler.active_observers(), 1);
        }
        assert_eq!(scheduler.active_observers(), 0);
    }

    #[test]
    fn test_guard_release_is_idempotent() {
        let scheduler = FakeScheduler::<&'static str>::new();
        let options = ObserverOptions {
            root_margin: RootMargin::ZERO,
            thresholds: vec![0.0],
        };
        let observer = scheduler
            .create(&options, Box::new(|_, _| {}))
            .expect("fake observer should be created");
        let mut guard = ObserverGuard::new(observer);
        guard.release();
        guard.release();
        assert!(!guard.is_active());
        // observing through a released guard is a no-op
        guard.observe(&"a");
        assert_eq!(scheduler.active_observers(), 0);

        let empty: ObserverGuard<&'static str, FakeObserver<&'static str>> = ObserverGuard::empty();
        assert!(!empty.is_active());
    }
}
