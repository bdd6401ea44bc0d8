// src/viewport.rs
use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub fn observer_supported() -> bool {
    Reflect::has(
        &gloo_utils::window(),
        &JsValue::from_str("IntersectionObserver"),
    )
    .unwrap_or(false)
}

type EntriesHandler = dyn FnMut(Array, IntersectionObserver);

/// Calls `on_enter` once per target the first time it comes near the
/// viewport. Dropping the watch disconnects the observer.
pub struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<EntriesHandler>,
}

impl ViewportWatch {
    pub fn new<F>(
        targets: &[Element],
        root_margin: &str,
        threshold: f64,
        mut on_enter: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(Element) + 'static,
    {
        let handler = move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_enter(target);
                }
            }
        };
        let callback = Closure::wrap(Box::new(handler) as Box<EntriesHandler>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        init.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for target in targets {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
