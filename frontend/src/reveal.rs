use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;

/// Shrinks the observed viewport from the bottom so elements reveal a bit late.
pub fn root_margin(bottom_px: u32) -> String {
    format!("0px 0px -{}px 0px", bottom_px)
}

/// Adds the fade-in class to matching elements the first time they enter the
/// viewport. Revealed elements are unobserved, so the class is never removed
/// or replayed. Dropping the value disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn attach(selector: &str) -> Option<Self> {
        let document = window()?.document()?;

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        if let Err(e) = target.class_list().add_1(config::REVEALED_CLASS) {
                            warn!("Could not mark element revealed: {:?}", e);
                        }
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        options.set_root_margin(&root_margin(config::REVEAL_BOTTOM_MARGIN_PX));

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };

        let nodes = document.query_selector_all(selector).ok()?;
        let mut observed = 0;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
                observed += 1;
            }
        }
        debug!("Observing {} elements for reveal", observed);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
