use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Element, IntersectionObserverEntry, IntersectionObserverInit};

use super::{
    observer::{
        BatchCallback, Document, IntersectionEntry, ObserverError, ObserverFactory,
        ObserverOptions, VisibilityObserver,
    },
    reveal::{REVEALED_CLASS, REVEAL_ATTRIBUTE, REVEAL_READY_CLASS},
};

type ObserverClosure = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

impl VisibilityObserver<Element> for web_sys::IntersectionObserver {
    fn observe(&self, region: &Element) {
        web_sys::IntersectionObserver::observe(self, region);
    }

    fn unobserve(&self, region: &Element) {
        web_sys::IntersectionObserver::unobserve(self, region);
    }

    fn disconnect(&self) {
        web_sys::IntersectionObserver::disconnect(self);
    }
}

/// A platform observer together with the closure it calls into.
pub struct BrowserObserver {
    observer: web_sys::IntersectionObserver,
    // the JS side only holds a reference; dropping this invalidates the callback
    _callback: ObserverClosure,
}

impl VisibilityObserver<Element> for BrowserObserver {
    fn observe(&self, region: &Element) {
        VisibilityObserver::observe(&self.observer, region);
    }

    fn unobserve(&self, region: &Element) {
        VisibilityObserver::unobserve(&self.observer, region);
    }

    fn disconnect(&self) {
        VisibilityObserver::disconnect(&self.observer);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserObserverFactory;

impl ObserverFactory<Element> for BrowserObserverFactory {
    type Observer = BrowserObserver;

    fn create(
        &self,
        options: &ObserverOptions,
        mut callback: BatchCallback<Element>,
    ) -> Result<Self::Observer, ObserverError> {
        options.validate()?;

        let closure = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|e| IntersectionEntry {
                        target: e.target(),
                        is_intersecting: e.is_intersecting(),
                        ratio: e.intersection_ratio(),
                    })
                    .collect::<Vec<_>>();
                callback(batch, &observer);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin.to_string());
        let thresholds = options
            .thresholds
            .iter()
            .map(|t| JsValue::from_f64(*t))
            .collect::<js_sys::Array>();
        init.set_threshold(&thresholds);

        let observer = web_sys::IntersectionObserver::new_with_options(
            closure.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|err| ObserverError::Unavailable(format!("{err:?}")))?;
        log::debug!(
            "Created intersection observer with root margin {}",
            options.root_margin
        );

        Ok(BrowserObserver {
            observer,
            _callback: closure,
        })
    }
}

#[derive(Debug, Clone)]
pub struct BrowserDocument(web_sys::Document);

impl BrowserDocument {
    pub fn current() -> Result<Self, ObserverError> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self)
            .ok_or(ObserverError::NoDocument)
    }
}

impl Document<Element> for BrowserDocument {
    fn region_by_id(&self, id: &str) -> Option<Element> {
        self.0.get_element_by_id(id)
    }

    fn revealable_regions(&self) -> Vec<Element> {
        let selector = format!("[{REVEAL_ATTRIBUTE}]");
        let nodes = match self.0.query_selector_all(&selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::warn!("Couldn't query {selector}: {err:?}");
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn mark_revealed(&self, region: &Element) {
        if let Err(err) = region.class_list().add_1(REVEALED_CLASS) {
            log::warn!("Couldn't mark element as revealed: {err:?}");
        }
    }

    fn set_reveal_ready(&self, ready: bool) {
        let Some(root) = self.0.document_element() else {
            return;
        };
        let classes = root.class_list();
        let res = if ready {
            classes.add_1(REVEAL_READY_CLASS)
        } else {
            classes.remove_1(REVEAL_READY_CLASS)
        };
        if let Err(err) = res {
            log::warn!("Couldn't toggle {REVEAL_READY_CLASS}: {err:?}");
        }
    }
}
