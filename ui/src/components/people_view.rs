use dioxus::prelude::*;

use aurus_common::people::{parse_payload, PeopleDirectory, Person};

use super::app::Route;
use super::fetch::fetch_text;

/// Well-known location of the people resource.
const PEOPLE_URL: &str = "/assets/people/people.json";

/// One fetch of the directory. Parse failure is folded into the error path;
/// views degrade to an empty state.
pub async fn load_people() -> Result<PeopleDirectory, String> {
    let body = fetch_text(PEOPLE_URL).await?;
    parse_payload(&body).ok_or_else(|| "Malformed people payload".to_string())
}

/// List view: every member as a link to their detail page.
#[component]
pub fn PeopleView() -> Element {
    let directory = use_resource(|| async move {
        load_people().await.map_err(|err| {
            tracing::warn!("People resource unavailable: {err}");
            err
        })
    });

    rsx! {
        div { class: "people-view", id: "people-list-view",
            p { class: "breadcrumb", "aurus / people" }
            h2 { "People" }
            {
                match directory() {
                    Some(Ok(dir)) => rsx! {
                        ul { class: "people-list", id: "people-list",
                            for member in dir.members.iter() {
                                li { class: "people-item", key: "{member.id}",
                                    Link {
                                        to: Route::Person { id: member.id.clone() },
                                        span { class: "people-name", "{member.name}" }
                                        " - "
                                        span { class: "people-position", "{member.position}" }
                                    }
                                }
                            }
                        }
                    },
                    Some(Err(_)) => rsx! {
                        p { class: "sub", "No people found." }
                    },
                    None => rsx! {
                        p { class: "sub", "Loading..." }
                    },
                }
            }
        }
    }
}

/// Detail view for a single member.
#[component]
pub fn PersonView(id: String) -> Element {
    let directory = use_resource(|| async move {
        load_people().await.map_err(|err| {
            tracing::warn!("People resource unavailable: {err}");
            err
        })
    });

    rsx! {
        div { class: "person-view", id: "person-view",
            p { class: "breadcrumb",
                Link { to: Route::People {}, "aurus / people" }
                span { id: "crumb-id-wrap", " / {id}" }
            }
            {
                match directory() {
                    Some(Ok(dir)) => match dir.find(&id) {
                        Some(person) => rsx! { PersonDetail { person: person.clone() } },
                        None => rsx! {
                            p { class: "sub", "Person not found." }
                            Link { to: Route::People {}, "\u{2190} Back to people" }
                        },
                    },
                    Some(Err(_)) => rsx! {
                        p { class: "sub", "Person not found." }
                        Link { to: Route::People {}, "\u{2190} Back to people" }
                    },
                    None => rsx! {
                        p { class: "sub", "Loading..." }
                    },
                }
            }
        }
    }
}

#[component]
fn PersonDetail(person: Person) -> Element {
    rsx! {
        h2 { id: "person-name", "{person.name}" }
        p { class: "person-position", "{person.position}" }
        section {
            h3 { "About" }
            p { id: "person-about", "{person.about}" }
        }
        section {
            h3 { "Links" }
            ul { id: "person-links",
                if person.links.is_empty() {
                    li {
                        span { class: "sub", "No links yet." }
                    }
                } else {
                    for link in person.links.iter() {
                        li { key: "{link.href}",
                            a {
                                href: "{link.href}",
                                target: "_blank",
                                rel: "noreferrer",
                                "{link.text}"
                            }
                        }
                    }
                }
            }
        }
    }
}
