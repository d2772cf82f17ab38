use std::{cell::RefCell, fmt, rc::Rc};

use super::observer::{
    Document, Inset, IntersectionEntry, ObserverError, ObserverFactory, ObserverGuard,
    ObserverOptions, RootMargin, VisibilityObserver,
};

/// A navigation link and the section it scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavItem {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }

    pub fn section_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section<R> {
    pub id: SectionId,
    pub region: R,
    pub ratio: f64,
}

/// Which navigation target is highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active: SectionId,
}

impl NavigationState {
    /// Starts on the first navigation entry. An empty list leaves the id empty.
    pub fn for_items(items: &[NavItem]) -> Self {
        let active = items
            .first()
            .map(|item| SectionId::from(item.section_id()))
            .unwrap_or_default();
        Self { active }
    }

    pub fn active(&self) -> &SectionId {
        &self.active
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub options: ObserverOptions,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            options: ObserverOptions {
                root_margin: RootMargin::vertical(Inset::Percent(-40.0), Inset::Percent(-55.0)),
                thresholds: vec![0.0, 0.25, 0.5, 0.75, 1.0],
            },
        }
    }
}

struct TrackerState<R> {
    sections: Vec<Section<R>>,
    nav: NavigationState,
}

impl<R: PartialEq> TrackerState<R> {
    /// Returns the new active id if the batch changed it.
    fn apply(&mut self, entries: &[IntersectionEntry<R>]) -> Option<SectionId> {
        for entry in entries {
            if let Some(section) = self.sections.iter_mut().find(|s| s.region == entry.target) {
                section.ratio = entry.visible_ratio().unwrap_or(0.0);
            }
        }

        let (winner, _) = entries
            .iter()
            .filter_map(|e| {
                let ratio = e.visible_ratio()?;
                self.sections
                    .iter()
                    .find(|s| s.region == e.target)
                    .map(|s| (&s.id, ratio))
            })
            // strictly greater, so ties keep the earlier entry
            .fold(None, |best: Option<(&SectionId, f64)>, (id, ratio)| match best {
                Some((_, best_ratio)) if best_ratio >= ratio => best,
                _ => Some((id, ratio)),
            })?;

        if *winner == self.nav.active {
            return None;
        }
        let winner = winner.clone();
        self.nav.active = winner.clone();
        Some(winner)
    }
}

/// Publishes the id of the section that dominates the viewport.
pub struct ViewportTracker<R, O: VisibilityObserver<R>> {
    state: Rc<RefCell<TrackerState<R>>>,
    guard: ObserverGuard<R, O>,
}

impl<R, O> ViewportTracker<R, O>
where
    R: Clone + PartialEq + 'static,
    O: VisibilityObserver<R>,
{
    /// Resolves each navigation target to its region and starts observing them.
    ///
    /// `publish` is called with the new id every time the active section changes.
    /// It is never called with the initial id.
    pub fn start<D, F, P>(
        items: &[NavItem],
        document: &D,
        factory: &F,
        config: &TrackerConfig,
        publish: P,
    ) -> Result<Self, ObserverError>
    where
        D: Document<R>,
        F: ObserverFactory<R, Observer = O>,
        P: Fn(&SectionId) + 'static,
    {
        let sections = items
            .iter()
            .filter_map(|item| {
                let id = item.section_id();
                match document.region_by_id(id) {
                    Some(region) => Some(Section {
                        id: SectionId::from(id),
                        region,
                        ratio: 0.0,
                    }),
                    None => {
                        log::debug!("No section found for navigation target {id}, skipping");
                        None
                    }
                }
            })
            .collect::<Vec<_>>();

        let state = Rc::new(RefCell::new(TrackerState {
            sections,
            nav: NavigationState::for_items(items),
        }));

        if state.borrow().sections.is_empty() {
            return Ok(Self {
                state,
                guard: ObserverGuard::empty(),
            });
        }

        let callback_state = Rc::clone(&state);
        let observer = factory.create(
            &config.options,
            Box::new(move |entries, _| {
                let changed = callback_state.borrow_mut().apply(&entries);
                if let Some(id) = changed {
                    log::debug!("Active section is now {id}");
                    publish(&id);
                }
            }),
        )?;
        let guard = ObserverGuard::new(observer);
        for section in state.borrow().sections.iter() {
            guard.observe(&section.region);
        }
        log::debug!(
            "Tracking {} sections with root margin {}",
            state.borrow().sections.len(),
            config.options.root_margin
        );

        Ok(Self { state, guard })
    }

    pub fn active_section(&self) -> SectionId {
        self.state.borrow().nav.active().clone()
    }

    /// The registered sections with their last reported ratios.
    pub fn sections(&self) -> Vec<(SectionId, f64)> {
        self.state
            .borrow()
            .sections
            .iter()
            .map(|s| (s.id.clone(), s.ratio))
            .collect()
    }

    pub fn is_tracking(&self) -> bool {
        self.guard.is_active()
    }

    pub fn stop(mut self) {
        self.guard.release();
    }
}
