use dioxus::prelude::*;

use aurus_common::forms::{FormKind, OverlayState};

use super::faq_view::FaqView;
use super::footer_view::FooterView;
use super::form_overlay::{open_overlay, use_overlay_state, FormOverlay};
use super::people_view::{load_people, PeopleView, PersonView};
use super::reveal::{scroll_to_anchor, use_header_scrolled, Reveal};

static MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/people")]
    People {},
    #[route("/people/:id")]
    Person { id: String },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(OverlayState::new()));

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Resolve a `data-form` trigger value and close the menus that hosted it.
fn fire_form_trigger(
    value: &str,
    overlay: Signal<OverlayState>,
    mut nav_open: Signal<bool>,
    mut dropdown_open: Signal<bool>,
) {
    match FormKind::from_trigger(value) {
        Some(kind) => open_overlay(overlay, kind),
        None => tracing::warn!("Unknown form trigger: {value}"),
    }
    dropdown_open.set(false);
    nav_open.set(false);
}

#[component]
fn SiteLayout() -> Element {
    let overlay = use_overlay_state();
    let mut nav_open = use_signal(|| false);
    let mut dropdown_open = use_signal(|| false);
    let scrolled = use_header_scrolled();

    let people_count = use_resource(|| async move {
        load_people().await.map(|dir| dir.members.len()).ok()
    });
    let people_label = match people_count().flatten() {
        Some(count) => format!("people: {count}"),
        None => "people".to_string(),
    };

    rsx! {
        // Any click outside the dropdown closes it.
        div { class: "aurus-app", onclick: move |_| dropdown_open.set(false),
            header {
                class: if scrolled() { "header scrolled" } else { "header" },
                Link { class: "logo", to: Route::Home {}, "AURUS" }
                button {
                    class: if nav_open() { "hamburger active" } else { "hamburger" },
                    onclick: move |_| {
                        let open = nav_open();
                        nav_open.set(!open);
                    },
                    span {}
                    span {}
                    span {}
                }
                nav {
                    class: if nav_open() { "nav active" } else { "nav" },
                    a {
                        href: "#diensten",
                        onclick: move |evt| {
                            evt.prevent_default();
                            scroll_to_anchor("diensten");
                            nav_open.set(false);
                        },
                        "Diensten"
                    }
                    a {
                        href: "#faq",
                        onclick: move |evt| {
                            evt.prevent_default();
                            scroll_to_anchor("faq");
                            nav_open.set(false);
                        },
                        "FAQ"
                    }
                    Link {
                        id: "people-link",
                        to: Route::People {},
                        onclick: move |_| nav_open.set(false),
                        "{people_label}"
                    }
                    div {
                        class: if dropdown_open() { "nav-dropdown active" } else { "nav-dropdown" },
                        button {
                            class: "nav-btn-dropdown",
                            onclick: move |evt| {
                                evt.stop_propagation();
                                let open = dropdown_open();
                                dropdown_open.set(!open);
                            },
                            "Aanvragen"
                        }
                        div { class: "nav-dropdown-menu",
                            button {
                                class: "nav-dropdown-link",
                                "data-form": "sleutel",
                                onclick: move |evt| {
                                    evt.stop_propagation();
                                    fire_form_trigger("sleutel", overlay, nav_open, dropdown_open);
                                },
                                "Extra sleutel"
                            }
                            button {
                                class: "nav-dropdown-link",
                                "data-form": "label",
                                onclick: move |evt| {
                                    evt.stop_propagation();
                                    fire_form_trigger("label", overlay, nav_open, dropdown_open);
                                },
                                "Naamplaatje"
                            }
                            button {
                                class: "nav-dropdown-link",
                                "data-form": "contact",
                                onclick: move |evt| {
                                    evt.stop_propagation();
                                    fire_form_trigger("contact", overlay, nav_open, dropdown_open);
                                },
                                "Contact"
                            }
                        }
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
            FooterView {}
            FormOverlay {}
        }
    }
}

/// Route component: the landing page.
#[component]
fn Home() -> Element {
    let overlay = use_overlay_state();

    rsx! {
        section { class: "hero",
            p { class: "hero-tag", "Syndicus & rentmeesterschap" }
            h1 { "Professioneel vastgoedbeheer in Oost- en West-Vlaanderen" }
            p { class: "hero-sub",
                "Wij ontzorgen eigenaars van mede-eigendommen en private \
                 eigendommen, van algemene vergadering tot dagelijks beheer."
            }
            button {
                class: "btn-intro",
                "data-form": "contact",
                onclick: move |_| open_overlay(overlay, FormKind::Contact),
                "Maak een afspraak"
            }
        }
        section { class: "services", id: "diensten",
            h2 { "Onze diensten" }
            div { class: "service-grid",
                Reveal { class: "service-card",
                    h3 { "Syndicus" }
                    p {
                        "Volledig beheer van mede-eigendommen: vergaderingen, \
                         boekhouding, onderhoud en opvolging van het gebouw."
                    }
                }
                Reveal { class: "service-card",
                    h3 { "Rentmeesterschap" }
                    p {
                        "Beheer van private eigendommen voor individuele \
                         eigenaars, inclusief huurdersopvolging en financi\u{eb}le \
                         afhandeling."
                    }
                }
                Reveal { class: "service-card",
                    h3 { "Opdrachten op maat" }
                    p {
                        "Flexibele dienstverlening voor specifieke opdrachten, \
                         van plaatsbeschrijving tot administratieve ondersteuning."
                    }
                }
            }
        }
        section { class: "faq-section", id: "faq",
            h2 { "Veelgestelde vragen" }
            FaqView {}
        }
    }
}

/// Route component: the people list.
#[component]
fn People() -> Element {
    rsx! { PeopleView {} }
}

/// Route component: one person's detail page.
#[component]
fn Person(id: String) -> Element {
    rsx! { PersonView { id } }
}
