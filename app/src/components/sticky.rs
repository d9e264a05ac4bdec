//! Browser glue for the sticky nav bar.
//!
//! An `IntersectionObserver` watches the sentinel element rendered above the
//! header. Each observation is fed to a [`StickyController`] and the
//! resulting [`Presentation`] is published through a signal that drives the
//! header's class list.

use header_state::{Presentation, StickyController};
use leptos::{html, prelude::*};

/// Wires the sentinel to a sticky controller and returns the header's
/// presentation.
///
/// On the server (and before hydration) this is the controller's initial
/// presentation: inline when sticky mode is enabled, non-sticky otherwise.
pub fn use_sticky_nav(sentinel: NodeRef<html::Div>, sticky_enabled: bool) -> Signal<Presentation> {
    let presentation = RwSignal::new(StickyController::new(sticky_enabled).presentation());

    #[cfg(feature = "hydrate")]
    observe_sentinel(sentinel, sticky_enabled, presentation);
    #[cfg(not(feature = "hydrate"))]
    let _ = sentinel;

    presentation.into()
}

#[cfg(feature = "hydrate")]
struct DomIntersection {
    observer: web_sys::IntersectionObserver,
    _on_change: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array)>,
}

#[cfg(feature = "hydrate")]
impl header_state::IntersectionSource for DomIntersection {
    type Node = web_sys::Element;

    fn observe(&self, node: &Self::Node) {
        self.observer.observe(node);
    }

    fn unobserve(&self, node: &Self::Node) {
        self.observer.unobserve(node);
    }
}

#[cfg(feature = "hydrate")]
fn observe_sentinel(
    sentinel: NodeRef<html::Div>,
    sticky_enabled: bool,
    presentation: RwSignal<Presentation>,
) {
    use header_state::ObserverGuard;
    use send_wrapper::SendWrapper;
    use wasm_bindgen::{JsCast as _, closure::Closure};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

    Effect::new(move |_| {
        let node: Option<Element> = sentinel.get().map(Into::into);

        let mut controller = StickyController::new(sticky_enabled);
        let on_change = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let latest = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .last();
            if let Some(entry) = latest {
                presentation.set(controller.observe(entry.is_intersecting()));
            }
        });

        let observer = match IntersectionObserver::new(on_change.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                leptos::logging::warn!("IntersectionObserver unavailable: {err:?}");
                presentation.set(StickyController::new(sticky_enabled).degrade());
                return;
            }
        };

        let source = DomIntersection {
            observer,
            _on_change: on_change,
        };
        let guard = SendWrapper::new(ObserverGuard::subscribe(source, node));
        on_cleanup(move || {
            let mut guard = guard.take();
            guard.release();
        });
    });
}
