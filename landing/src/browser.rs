//! Browser side of section tracking: the window as a scroll source and the
//! DOM as a section layout.

use munch_core::{MunchError, ScrollHandler, ScrollSource, SectionBounds, SectionLayout};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

const SCROLL_EVENT: &str = "scroll";

/// Current `window.scrollY`, or 0 when there is no window.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Scroll events of the global `window`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScrollSource;

impl ScrollSource for WindowScrollSource {
    type Listener = Closure<dyn Fn()>;

    fn attach(&self, handler: ScrollHandler) -> munch_core::Result<Self::Listener> {
        let window =
            web_sys::window().ok_or_else(|| MunchError::Subscribe("no global window".into()))?;

        let callback = Closure::<dyn Fn()>::new(move || handler(scroll_y()));
        window
            .add_event_listener_with_callback(SCROLL_EVENT, callback.as_ref().unchecked_ref())
            .map_err(|err| MunchError::Subscribe(format!("{err:?}")))?;

        Ok(callback)
    }

    fn detach(&self, listener: Self::Listener) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window
            .remove_event_listener_with_callback(SCROLL_EVENT, listener.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "failed to remove scroll listener");
        }
    }
}

/// Measures sections straight from the DOM (`offsetTop` / `offsetHeight`).
///
/// Elements that are missing or not `HtmlElement`s measure as `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomLayout;

impl SectionLayout for DomLayout {
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;

        Some(SectionBounds::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use munch_core::ScrollSubscription;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fire_scroll() {
        let window = web_sys::window().unwrap();
        let event = web_sys::Event::new(SCROLL_EVENT).unwrap();
        window.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn missing_section_measures_as_none() {
        assert_eq!(DomLayout.bounds("no-such-section"), None);
    }

    #[wasm_bindgen_test]
    fn mounted_section_is_measured() {
        let document = web_sys::window().unwrap().document().unwrap();
        let section = document.create_element("section").unwrap();
        section.set_id("measured");
        section
            .set_attribute("style", "display: block; height: 320px;")
            .unwrap();
        document.body().unwrap().append_child(&section).unwrap();

        let bounds = DomLayout.bounds("measured").expect("section is mounted");
        assert_eq!(bounds.height, 320.0);

        section.remove();
    }

    #[wasm_bindgen_test]
    fn dropped_subscription_stops_listening() {
        let hits = Rc::new(Cell::new(0u32));
        let counter = hits.clone();

        let subscription = ScrollSubscription::subscribe(WindowScrollSource, move |_| {
            counter.set(counter.get() + 1)
        })
        .unwrap();

        fire_scroll();
        assert_eq!(hits.get(), 1);

        drop(subscription);
        fire_scroll();
        assert_eq!(hits.get(), 1);
    }
}
