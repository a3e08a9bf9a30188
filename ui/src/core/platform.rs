//! Browser glue. Everything that touches `web_sys` directly lives here; native
//! builds get inert fallbacks so the views still render (and tests still link)
//! outside the browser.

use dioxus::prelude::MountedData;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use crate::core::config::DEFAULT_HEADER_HEIGHT_PX;

/// Vertical extent of a page section in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[cfg(target_arch = "wasm32")]
fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    window().and_then(|w| w.document())
}

#[cfg(target_arch = "wasm32")]
fn html_element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

pub fn viewport_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::MAX)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        f64::MAX
    }
}

pub fn scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Suspend (or restore) page scrolling behind an overlay.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = document().and_then(|d| d.body()) {
            let value = if locked { "hidden" } else { "" };
            if let Err(err) = body.style().set_property("overflow", value) {
                tracing::warn!("[platform] failed to toggle scroll lock: {err:?}");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locked;
    }
}

/// Set `data-theme` on the root `<html>` element.
pub fn apply_document_theme(theme: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = document().and_then(|d| d.document_element()) {
            if let Err(err) = root.set_attribute("data-theme", theme) {
                tracing::warn!("[platform] failed to apply theme {theme}: {err:?}");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

pub fn header_height() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        document()
            .and_then(|d| d.query_selector("header").ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| f64::from(el.offset_height()))
            .unwrap_or(DEFAULT_HEADER_HEIGHT_PX)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_HEADER_HEIGHT_PX
    }
}

/// Document-relative top of an element, if it exists.
pub fn element_top(id: &str) -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        html_element_by_id(id).map(|el| f64::from(el.offset_top()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}

pub fn section_bounds(ids: &[&str]) -> Vec<SectionBounds> {
    #[cfg(target_arch = "wasm32")]
    {
        ids.iter()
            .filter_map(|id| {
                html_element_by_id(id).map(|el| SectionBounds {
                    id: (*id).to_string(),
                    top: f64::from(el.offset_top()),
                    height: f64::from(el.offset_height()),
                })
            })
            .collect()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ids;
        Vec::new()
    }
}

pub fn smooth_scroll_to(top: f64) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(win) = window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top.max(0.0));
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = top;
    }
}

/// A window-level event listener that is detached when dropped.
pub struct WindowListener {
    #[cfg(target_arch = "wasm32")]
    event: &'static str,
    #[cfg(target_arch = "wasm32")]
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    /// Listen for `event` (`"scroll"`, `"resize"`, `"load"`, ...).
    pub fn on(event: &'static str, mut handler: impl FnMut() + 'static) -> Option<Self> {
        Self::attach(event, move |_event| handler())
    }

    /// Listen for `keydown`, handing the handler the `KeyboardEvent.key` value.
    pub fn on_key(mut handler: impl FnMut(&str) + 'static) -> Option<Self> {
        Self::attach("keydown", move |_event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(key_event) = _event.dyn_ref::<web_sys::KeyboardEvent>() {
                    handler(&key_event.key());
                }
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = &mut handler;
            }
        })
    }

    #[cfg(target_arch = "wasm32")]
    fn attach(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let win = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        if let Err(err) =
            win.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            tracing::warn!("[platform] failed to listen for {event}: {err:?}");
            return None;
        }
        Some(Self { event, callback })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn attach(_event: &'static str, handler: impl FnMut(NativeEvent) + 'static) -> Option<Self> {
        drop(handler);
        None
    }
}

#[cfg(not(target_arch = "wasm32"))]
type NativeEvent = ();

#[cfg(target_arch = "wasm32")]
impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Intersection parameters for [`watch_visibility`].
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    /// CSS `rootMargin`, e.g. `"0px 0px -50px 0px"`.
    pub root_margin: String,
}

/// Live intersection observer; disconnects when dropped.
pub struct VisibilityWatch {
    #[cfg(target_arch = "wasm32")]
    observer: web_sys::IntersectionObserver,
    #[cfg(target_arch = "wasm32")]
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

/// Watch a mounted element entering/leaving the viewport. The handler gets the
/// current intersection state and returns whether to keep watching.
///
/// Whenever no observer can be attached (outside the browser, a non-element
/// node, or no `IntersectionObserver` support) the element is treated as
/// visible: the handler is called once with `true` and no watch is returned.
pub fn watch_visibility(
    mounted: &MountedData,
    options: &VisibilityOptions,
    mut handler: impl FnMut(bool) -> bool + 'static,
) -> Option<VisibilityWatch> {
    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let Some(element) = mounted.downcast::<web_sys::Element>() else {
            return unobserved(&mut handler);
        };

        let handler = Rc::new(RefCell::new(handler));
        let on_entries = handler.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !(*on_entries.borrow_mut())(entry.is_intersecting()) {
                        observer.disconnect();
                        break;
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                tracing::warn!("[platform] IntersectionObserver unavailable: {err:?}");
                return unobserved(&mut *handler.borrow_mut());
            }
        };
        observer.observe(element);

        Some(VisibilityWatch {
            observer,
            _callback: callback,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (mounted, options);
        unobserved(&mut handler)
    }
}

/// Fallback when nothing can observe the element: report it visible once.
fn unobserved(handler: &mut impl FnMut(bool) -> bool) -> Option<VisibilityWatch> {
    handler(true);
    None
}

#[cfg(target_arch = "wasm32")]
impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unobserved_elements_are_reported_visible_once() {
        let mut calls = Vec::new();
        let watch = unobserved(&mut |visible: bool| {
            calls.push(visible);
            true
        });
        assert!(watch.is_none());
        assert_eq!(calls, vec![true]);
    }
}
