use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use super::fetch::fetch_text;

/// Well-known location of the footer fragment.
const FOOTER_URL: &str = "/assets/footer/footer.html";

/// Site footer: a fetched HTML fragment (trusted, site-operator content)
/// plus a natively rendered copyright line. A failed fetch leaves only the
/// copyright line.
#[component]
pub fn FooterView() -> Element {
    let fragment = use_resource(|| async move {
        fetch_text(FOOTER_URL).await.map_err(|err| {
            tracing::debug!("Footer fragment unavailable: {err}");
            err
        })
    });
    let year = Utc::now().year();

    rsx! {
        footer { class: "site-footer", id: "footer-container",
            {
                match fragment() {
                    Some(Ok(html)) => rsx! {
                        div { class: "footer-links", dangerous_inner_html: "{html}" }
                    },
                    _ => rsx! {},
                }
            }
            p { class: "footer-copyright",
                "\u{a9} "
                span { id: "y", "{year}" }
                " Aurus Vastgoedbeheer"
            }
        }
    }
}
