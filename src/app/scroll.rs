use leptos::prelude::*;

use crate::viewport::{NavItem, NavigationState, SectionId};
#[cfg(feature = "hydrate")]
use crate::viewport::{
    browser::{BrowserDocument, BrowserObserverFactory},
    RevealAnimator, RevealConfig, TrackerConfig, ViewportTracker,
};
#[cfg(feature = "hydrate")]
use send_wrapper::SendWrapper;

/// The id of the section currently dominating the viewport.
///
/// Starts on the first navigation entry; on the client a tracker keeps it up to date
/// until the calling component is unmounted.
pub fn use_active_section(items: &'static [NavItem]) -> ReadSignal<SectionId> {
    let (active, set_active) = signal(NavigationState::for_items(items).active().clone());

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let document = match BrowserDocument::current() {
            Ok(document) => document,
            Err(err) => {
                log::warn!("Section tracking disabled: {err}");
                return;
            }
        };
        let tracker = ViewportTracker::start(
            items,
            &document,
            &BrowserObserverFactory,
            &TrackerConfig::default(),
            move |id: &SectionId| set_active.set(id.clone()),
        );
        match tracker {
            Ok(tracker) => {
                let tracker = SendWrapper::new(tracker);
                on_cleanup(move || tracker.take().stop());
            }
            Err(err) => log::warn!("Section tracking disabled: {err}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = set_active;

    active
}

/// Adds the revealed class to each `data-reveal` element the first time it scrolls into view.
///
/// Unrevealed elements are only hidden once the animator is running, so a page that
/// never hydrates, or whose observer fails to start, shows everything.
pub fn use_scroll_reveal() {
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let document = match BrowserDocument::current() {
            Ok(document) => document,
            Err(err) => {
                log::warn!("Scroll reveal disabled: {err}");
                return;
            }
        };
        match RevealAnimator::start(&document, &BrowserObserverFactory, RevealConfig::default()) {
            Ok(animator) => {
                let animator = SendWrapper::new(animator);
                on_cleanup(move || animator.take().stop());
            }
            Err(err) => log::warn!("Scroll reveal disabled: {err}"),
        }
    });
}
