//! Infinite scroll sentinel.
//!
//! An `IntersectionObserver` watches a sentinel element placed after the list
//! and calls back when the sentinel becomes fully visible. The observer lives
//! in a [`SentinelObserver`] handle that disconnects on drop, so replacing or
//! dropping the handle always releases the browser-side watcher.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Sentinel must be 100% visible
const VISIBILITY_THRESHOLD: f64 = 1.0;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct SentinelObserver {
    observer: IntersectionObserver,
    // Closure must outlive the observer
    _callback: ObserverCallback,
}

impl SentinelObserver {
    pub fn attach(target: &Element, on_visible: impl Fn() + 'static) -> Result<Self, JsValue> {
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let visible = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if visible {
                    on_visible();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SentinelObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Attach a sentinel observer while `enabled` is true.
///
/// Every change of `enabled` drops the previous observer before a new one is
/// created; the last one is dropped when the owning component unmounts. A
/// fresh observer reports the sentinel right away if it is already on screen,
/// which keeps loading while the viewport is not yet filled.
pub fn use_infinite_scroll(sentinel: NodeRef<Div>, enabled: Signal<bool>, on_visible: Callback<()>) {
    let slot = StoredValue::new_local(None::<SentinelObserver>);

    Effect::new(move |_| {
        let enabled = enabled.get();
        let element = sentinel.get();

        slot.set_value(None);
        if !enabled {
            return;
        }
        let Some(element) = element else {
            return;
        };

        match SentinelObserver::attach(&element, move || on_visible.run(())) {
            Ok(observer) => slot.set_value(Some(observer)),
            Err(err) => log::error!("Failed to attach IntersectionObserver: {:?}", err),
        }
    });

    on_cleanup(move || slot.set_value(None));
}
