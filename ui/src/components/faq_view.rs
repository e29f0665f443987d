use dioxus::prelude::*;

use aurus_common::faq::{display_index, next_expanded, resolve_payload, FaqEntry};

use super::fetch::fetch_text;

/// Well-known location of the live FAQ resource.
const FAQ_URL: &str = "/assets/data/faq.json";

/// The FAQ section: one fetch per page load, fallback on any failure.
#[component]
pub fn FaqView() -> Element {
    let entries = use_resource(|| async move {
        let outcome = fetch_text(FAQ_URL).await;
        if let Err(err) = &outcome {
            tracing::warn!("FAQ resource unavailable, using fallback: {err}");
        }
        resolve_payload(outcome)
    });

    match entries() {
        Some(items) => rsx! { FaqAccordion { items } },
        // Fetch still outstanding; the list renders once it settles.
        None => rsx! { div { class: "faq-list", id: "faq-list" } },
    }
}

/// Accordion over a loaded FAQ set.
///
/// Expansion state is the id of the open entry, so at most one entry is
/// expanded and clicking it again closes it with nothing else opening.
#[component]
fn FaqAccordion(items: Vec<FaqEntry>) -> Element {
    let mut expanded = use_signal(|| None::<u32>);

    rsx! {
        div { class: "faq-list", id: "faq-list",
            for item in items.iter() {
                {
                    let id = item.id;
                    let number = display_index(id);
                    let is_open = expanded() == Some(id);
                    rsx! {
                        div {
                            key: "{id}",
                            class: if is_open { "faq-item active" } else { "faq-item" },
                            "data-faq-id": "{id}",
                            button {
                                class: "faq-question",
                                aria_expanded: if is_open { "true" } else { "false" },
                                onclick: move |_| {
                                    let next = next_expanded(expanded(), id);
                                    expanded.set(next);
                                },
                                span { class: "faq-number", "{number}" }
                                span { class: "faq-text", "{item.question}" }
                                span { class: "faq-icon", "\u{2192}" }
                            }
                            if is_open {
                                div { class: "faq-answer",
                                    p { "{item.answer}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
