//! In-memory stand-ins for the browser: a scheduler that hands out observers
//! and delivers synthetic intersection batches, and a document of named regions.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use super::observer::{
    BatchCallback, Document, IntersectionEntry, ObserverError, ObserverFactory, ObserverOptions,
    VisibilityObserver,
};

/// An entry for a target that is `ratio` visible.
pub fn entry<R>(target: R, ratio: f64) -> IntersectionEntry<R> {
    IntersectionEntry {
        target,
        is_intersecting: ratio > 0.0,
        ratio,
    }
}

/// An entry the platform reports as intersecting, whatever its ratio.
pub fn intersecting<R>(target: R, ratio: f64) -> IntersectionEntry<R> {
    IntersectionEntry {
        target,
        is_intersecting: true,
        ratio,
    }
}

/// An entry for a target that left the window.
pub fn leaving<R>(target: R) -> IntersectionEntry<R> {
    IntersectionEntry {
        target,
        is_intersecting: false,
        ratio: 0.0,
    }
}

struct FakeObserverInner<R> {
    options: ObserverOptions,
    targets: RefCell<Vec<R>>,
    connected: Cell<bool>,
    callback: RefCell<Option<BatchCallback<R>>>,
}

pub struct FakeObserver<R>(Rc<FakeObserverInner<R>>);

impl<R> Clone for FakeObserver<R> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<R: Clone + PartialEq> FakeObserver<R> {
    pub fn options(&self) -> &ObserverOptions {
        &self.0.options
    }

    pub fn targets(&self) -> Vec<R> {
        self.0.targets.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.0.connected.get()
    }

    fn is_observing(&self, region: &R) -> bool {
        self.0.targets.borrow().contains(region)
    }

    fn dispatch(&self, entries: &[IntersectionEntry<R>]) {
        let batch = entries
            .iter()
            .filter(|e| self.is_observing(&e.target))
            .cloned()
            .collect::<Vec<_>>();
        if batch.is_empty() {
            return;
        }
        // take the callback out so it may call back into this observer
        let callback = self.0.callback.borrow_mut().take();
        if let Some(mut callback) = callback {
            callback(batch, self);
            if self.is_connected() {
                *self.0.callback.borrow_mut() = Some(callback);
            }
        }
    }
}

impl<R: Clone + PartialEq> VisibilityObserver<R> for FakeObserver<R> {
    fn observe(&self, region: &R) {
        if !self.is_connected() || self.is_observing(region) {
            return;
        }
        self.0.targets.borrow_mut().push(region.clone());
    }

    fn unobserve(&self, region: &R) {
        self.0.targets.borrow_mut().retain(|r| r != region);
    }

    fn disconnect(&self) {
        self.0.connected.set(false);
        self.0.targets.borrow_mut().clear();
        // dropping the callback drops whatever state it captured
        let _ = self.0.callback.try_borrow_mut().map(|mut cb| cb.take());
    }
}

pub struct FakeScheduler<R> {
    observers: RefCell<Vec<FakeObserver<R>>>,
    fail_next: Cell<bool>,
}

impl<R: Clone + PartialEq> FakeScheduler<R> {
    pub fn new() -> Self {
        Self {
            observers: RefCell::new(Vec::new()),
            fail_next: Cell::new(false),
        }
    }

    /// The next `create` call returns an error.
    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }

    pub fn observers(&self) -> Vec<FakeObserver<R>> {
        self.observers.borrow().clone()
    }

    /// Observers still connected with at least one target.
    pub fn active_observers(&self) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|o| o.is_connected() && !o.0.targets.borrow().is_empty())
            .count()
    }

    /// Deliver one batch. Each observer only sees entries for its own targets.
    pub fn deliver(&self, entries: Vec<IntersectionEntry<R>>) {
        let observers = self.observers();
        for observer in observers {
            observer.dispatch(&entries);
        }
    }
}

impl<R: Clone + PartialEq> Default for FakeScheduler<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone + PartialEq> ObserverFactory<R> for FakeScheduler<R> {
    type Observer = FakeObserver<R>;

    fn create(
        &self,
        options: &ObserverOptions,
        callback: BatchCallback<R>,
    ) -> Result<Self::Observer, ObserverError> {
        if self.fail_next.replace(false) {
            return Err(ObserverError::Unavailable("fake failure".to_string()));
        }
        options.validate()?;
        let observer = FakeObserver(Rc::new(FakeObserverInner {
            options: options.clone(),
            targets: RefCell::new(Vec::new()),
            connected: Cell::new(true),
            callback: RefCell::new(Some(callback)),
        }));
        self.observers.borrow_mut().push(observer.clone());
        Ok(observer)
    }
}

#[derive(Default)]
struct FakeDocumentInner {
    sections: RefCell<Vec<&'static str>>,
    revealable: RefCell<Vec<&'static str>>,
    marks: RefCell<Vec<&'static str>>,
    ready: Cell<bool>,
}

/// Regions are identified by their id string.
#[derive(Clone, Default)]
pub struct FakeDocument(Rc<FakeDocumentInner>);

impl FakeDocument {
    pub fn with_sections(ids: &[&'static str]) -> Self {
        let doc = Self::default();
        doc.0.sections.borrow_mut().extend_from_slice(ids);
        doc
    }

    pub fn add_revealable(&self, id: &'static str) {
        self.0.revealable.borrow_mut().push(id);
    }

    pub fn mark_count(&self, id: &str) -> usize {
        self.0.marks.borrow().iter().filter(|m| **m == id).count()
    }

    pub fn is_reveal_ready(&self) -> bool {
        self.0.ready.get()
    }
}

impl Document<&'static str> for FakeDocument {
    fn region_by_id(&self, id: &str) -> Option<&'static str> {
        self.0.sections.borrow().iter().find(|s| **s == id).copied()
    }

    fn revealable_regions(&self) -> Vec<&'static str> {
        self.0.revealable.borrow().clone()
    }

    fn mark_revealed(&self, region: &&'static str) {
        self.0.marks.borrow_mut().push(*region);
    }

    fn set_reveal_ready(&self, ready: bool) {
        self.0.ready.set(ready);
    }
}
