use dioxus::prelude::*;

#[cfg(target_family = "wasm")]
use aurus_common::scroll::anchor_scroll_target;

/// Scroll offset past which the header picks up its `scrolled` class.
const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Smooth-scroll to an in-page anchor, stopping below the fixed header
/// instead of underneath it. Unknown ids are ignored.
pub fn scroll_to_anchor(id: &str) {
    #[cfg(target_family = "wasm")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let element = window
            .document()
            .and_then(|doc| doc.get_element_by_id(id));
        let Some(element) = element else {
            return;
        };
        let top = anchor_scroll_target(
            element.get_bounding_client_rect().top(),
            window.page_y_offset().unwrap_or(0.0),
        );
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = id;
    }
}

/// Wrapper that fades its content in the first time it scrolls into view.
/// The effect fires once; later scrolling never hides it again.
#[component]
pub fn Reveal(class: Option<String>, children: Element) -> Element {
    let mut shown = use_signal(|| false);
    let extra = class.unwrap_or_default();

    rsx! {
        div {
            class: if shown() { "reveal is-visible {extra}" } else { "reveal {extra}" },
            onvisible: move |evt| {
                if evt.data().is_intersecting().unwrap_or(false) {
                    shown.set(true);
                }
            },
            {children}
        }
    }
}

/// Tracks whether the page is scrolled past the header threshold.
///
/// Binds a window scroll listener once per mount; the listener lives for the
/// rest of the page, matching the single-page lifetime of the layout.
pub fn use_header_scrolled() -> Signal<bool> {
    let scrolled = use_signal(|| false);

    use_effect(move || {
        #[cfg(target_family = "wasm")]
        {
            use wasm_bindgen::prelude::*;
            use wasm_bindgen::JsCast;

            let mut scrolled = scrolled;
            if let Some(window) = web_sys::window() {
                let win = window.clone();
                let on_scroll = Closure::<dyn FnMut()>::new(move || {
                    let y = win.scroll_y().unwrap_or(0.0);
                    scrolled.set(y > HEADER_SCROLL_THRESHOLD);
                });
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    on_scroll.as_ref().unchecked_ref(),
                );
                on_scroll.forget();
            }
        }
    });

    scrolled
}
