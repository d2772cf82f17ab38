use std::{cell::RefCell, rc::Rc};

use super::observer::{
    BatchCallback, Document, Inset, ObserverError, ObserverFactory, ObserverGuard,
    ObserverOptions, RootMargin, VisibilityObserver,
};

/// Elements carrying this attribute animate in on first sight.
pub const REVEAL_ATTRIBUTE: &str = "data-reveal";
/// Class added once an element has been revealed.
pub const REVEALED_CLASS: &str = "revealed";
/// Class set on the root element while an animator is watching. Unrevealed
/// elements are only hidden under it, so they stay visible without one.
pub const REVEAL_READY_CLASS: &str = "reveal-ready";

#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub options: ObserverOptions,
    /// Entries below this ratio are ignored even when intersecting.
    pub min_ratio: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            options: ObserverOptions {
                root_margin: RootMargin::vertical(Inset::Px(0.0), Inset::Percent(-10.0)),
                thresholds: vec![0.15],
            },
            min_ratio: 0.15,
        }
    }
}

struct RevealState<R> {
    pending: Vec<R>,
    revealed: Vec<R>,
}

impl<R: PartialEq> RevealState<R> {
    fn knows(&self, region: &R) -> bool {
        self.pending.contains(region) || self.revealed.contains(region)
    }
}

/// Plays each flagged element's entrance once, on the document it was started on.
pub struct RevealAnimator<R, O, D>
where
    O: VisibilityObserver<R>,
    D: Document<R>,
{
    config: RevealConfig,
    document: D,
    state: Rc<RefCell<RevealState<R>>>,
    guard: ObserverGuard<R, O>,
    ready: bool,
}

impl<R, O, D> RevealAnimator<R, O, D>
where
    R: Clone + PartialEq + 'static,
    O: VisibilityObserver<R>,
    D: Document<R> + Clone + 'static,
{
    /// Scans the document once and watches every flagged element.
    ///
    /// Elements added afterwards are only picked up by [`RevealAnimator::rescan`].
    pub fn start<F>(document: &D, factory: &F, config: RevealConfig) -> Result<Self, ObserverError>
    where
        F: ObserverFactory<R, Observer = O>,
    {
        let mut animator = Self {
            config,
            document: document.clone(),
            state: Rc::new(RefCell::new(RevealState {
                pending: Vec::new(),
                revealed: Vec::new(),
            })),
            guard: ObserverGuard::empty(),
            ready: false,
        };
        animator.rescan(factory)?;
        Ok(animator)
    }

    /// Registers flagged elements not seen before, returning how many were added.
    ///
    /// Creates an observer when none is watching; nothing is created while there is
    /// nothing to watch. The observer disconnects itself once every element is revealed.
    pub fn rescan<F>(&mut self, factory: &F) -> Result<usize, ObserverError>
    where
        F: ObserverFactory<R, Observer = O>,
    {
        let (fresh, exhausted) = {
            let state = self.state.borrow();
            let fresh = self
                .document
                .revealable_regions()
                .into_iter()
                .filter(|r| !state.knows(r))
                .collect::<Vec<_>>();
            (fresh, state.pending.is_empty())
        };
        if fresh.is_empty() {
            return Ok(0);
        }

        if !self.guard.is_active() || exhausted {
            let observer = factory.create(&self.config.options, self.callback())?;
            self.guard = ObserverGuard::new(observer);
        }
        for region in fresh.iter() {
            self.guard.observe(region);
        }
        let added = fresh.len();
        self.state.borrow_mut().pending.extend(fresh);
        if !self.ready {
            self.document.set_reveal_ready(true);
            self.ready = true;
        }
        log::debug!("Watching {added} elements for reveal");
        Ok(added)
    }

    fn callback(&self) -> BatchCallback<R> {
        let state = Rc::clone(&self.state);
        let document = self.document.clone();
        let min_ratio = self.config.min_ratio;
        Box::new(move |entries, observer| {
            let mut state = state.borrow_mut();
            for entry in entries {
                let visible_enough = entry.visible_ratio().is_some_and(|r| r >= min_ratio);
                if !visible_enough {
                    continue;
                }
                let Some(pos) = state.pending.iter().position(|r| *r == entry.target) else {
                    continue;
                };
                let region = state.pending.remove(pos);
                observer.unobserve(&region);
                document.mark_revealed(&region);
                state.revealed.push(region);
            }
            if state.pending.is_empty() {
                log::debug!("All {} elements revealed", state.revealed.len());
                observer.disconnect();
            } else {
                log::trace!(
                    "Reveal batch handled, {} elements still pending",
                    state.pending.len()
                );
            }
        })
    }

    pub fn is_observing(&self) -> bool {
        self.guard.is_active() && !self.state.borrow().pending.is_empty()
    }

    pub fn is_revealed(&self, region: &R) -> bool {
        self.state.borrow().revealed.contains(region)
    }

    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.state.borrow().revealed.len()
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl<R, O, D> Drop for RevealAnimator<R, O, D>
where
    O: VisibilityObserver<R>,
    D: Document<R>,
{
    fn drop(&mut self) {
        self.guard.release();
        // elements still pending must not stay hidden
        if self.ready {
            self.document.set_reveal_ready(false);
        }
    }
}
