use dioxus::prelude::*;

use aurus_common::forms::{
    body_overflow, file_upload_label, shows_delivery_address, FormKind, OverlayState,
    DELIVERY_BY_POST,
};

/// How long the close animation runs before form state is reset.
#[allow(dead_code)] // used in WASM builds
const OVERLAY_RESET_MS: u32 = 300;

pub fn use_overlay_state() -> Signal<OverlayState> {
    use_context::<Signal<OverlayState>>()
}

/// Lock or restore page scrolling behind the overlay.
fn set_body_scroll(overlay_open: bool) {
    #[cfg(target_family = "wasm")]
    {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            let _ = body
                .style()
                .set_property("overflow", body_overflow(overlay_open));
        }
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = body_overflow(overlay_open);
    }
}

/// Open the overlay on the given form, hiding any previous form or success
/// panel first and locking page scroll.
pub fn open_overlay(mut state: Signal<OverlayState>, kind: FormKind) {
    state.write().open_form(kind);
    set_body_scroll(true);
    tracing::debug!("Overlay opened: {}", kind.as_str());
}

/// Close the overlay and restore page scroll, then reset its contents once
/// the close animation has played. Form fields are local signals that drop
/// with their form.
pub fn close_overlay(mut state: Signal<OverlayState>) {
    state.write().begin_close();
    set_body_scroll(false);

    #[cfg(target_family = "wasm")]
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(OVERLAY_RESET_MS).await;
        state.write().reset();
    });
    #[cfg(not(target_family = "wasm"))]
    state.write().reset();
}

#[component]
pub fn FormOverlay() -> Element {
    let state = use_overlay_state();
    let snapshot = state.read().clone();

    // Stay in the document while the close animation plays; the delayed
    // reset in close_overlay unmounts for real.
    if !snapshot.is_mounted() {
        return rsx! {};
    }

    rsx! {
        div {
            class: if snapshot.open { "form-overlay active" } else { "form-overlay" },
            id: "form-overlay",
            tabindex: "-1",
            // Escape handling needs the overlay focused when it opens.
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    close_overlay(state);
                }
            },
            div {
                class: "form-overlay-backdrop",
                onclick: move |_| close_overlay(state),
            }
            div { class: "form-overlay-panel",
                button {
                    class: "form-close",
                    id: "form-close",
                    onclick: move |_| close_overlay(state),
                    "\u{d7}"
                }
                if snapshot.show_success {
                    SuccessPanel {}
                } else {
                    {
                        match snapshot.active_form {
                            Some(FormKind::Contact) => rsx! { ContactForm {} },
                            Some(FormKind::KeyRequest) => rsx! { KeyRequestForm {} },
                            Some(FormKind::NamePlate) => rsx! { NamePlateForm {} },
                            None => rsx! {},
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SuccessPanel() -> Element {
    let state = use_overlay_state();

    rsx! {
        div { class: "form-success active", id: "form-success",
            h3 { "Bedankt voor uw aanvraag!" }
            p { "We nemen spoedig contact met u op." }
            button {
                id: "success-close",
                onclick: move |_| close_overlay(state),
                "Sluiten"
            }
        }
    }
}

/// Mark the current form submitted: data stays local (logged only), the
/// success panel takes its place.
fn submit_form(mut state: Signal<OverlayState>, kind: FormKind, summary: String) {
    tracing::info!("Form submitted ({}): {summary}", kind.as_str());
    state.write().complete_submission();
}

#[component]
fn ContactForm() -> Element {
    let state = use_overlay_state();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    rsx! {
        form {
            class: "overlay-form active",
            id: "form-contact",
            onsubmit: move |evt| {
                evt.prevent_default();
                if name.read().trim().is_empty()
                    || email.read().trim().is_empty()
                    || message.read().trim().is_empty()
                {
                    return;
                }
                let summary = format!("name={}, email={}", name.read(), email.read());
                submit_form(state, FormKind::Contact, summary);
            },
            h3 { "Contacteer ons" }
            div { class: "form-group",
                label { "Naam" }
                input {
                    r#type: "text",
                    name: "name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "E-mail" }
                input {
                    r#type: "email",
                    name: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Bericht" }
                textarea {
                    name: "message",
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }
            }
            button { r#type: "submit", "Verstuur" }
        }
    }
}

/// Radio pair choosing between pickup and postal delivery.
#[component]
fn DeliveryChoice(choice: Signal<String>) -> Element {
    let mut choice = choice;

    rsx! {
        div { class: "form-group delivery-choice",
            label { "Levering" }
            label { class: "radio-option",
                input {
                    r#type: "radio",
                    name: "levering",
                    value: "afhalen",
                    checked: *choice.read() == "afhalen",
                    onchange: move |_| choice.set("afhalen".into()),
                }
                " Afhalen op kantoor"
            }
            label { class: "radio-option",
                input {
                    r#type: "radio",
                    name: "levering",
                    value: DELIVERY_BY_POST,
                    checked: *choice.read() == DELIVERY_BY_POST,
                    onchange: move |_| choice.set(DELIVERY_BY_POST.into()),
                }
                " Per post"
            }
        }
    }
}

/// Address block that appears only for postal delivery.
#[component]
fn DeliveryAddress(id: &'static str, address: Signal<String>) -> Element {
    let mut address = address;

    rsx! {
        div { class: "form-group conditional", id: id,
            label { "Leveringsadres" }
            input {
                r#type: "text",
                name: "adres",
                value: "{address}",
                oninput: move |evt| address.set(evt.value()),
            }
        }
    }
}

#[component]
fn KeyRequestForm() -> Element {
    let state = use_overlay_state();
    let mut name = use_signal(String::new);
    let mut building = use_signal(String::new);
    let delivery = use_signal(String::new);
    let address = use_signal(String::new);

    rsx! {
        form {
            class: "overlay-form active",
            id: "form-sleutel",
            onsubmit: move |evt| {
                evt.prevent_default();
                if name.read().trim().is_empty() || building.read().trim().is_empty() {
                    return;
                }
                let summary = format!(
                    "name={}, building={}, levering={}",
                    name.read(),
                    building.read(),
                    delivery.read()
                );
                submit_form(state, FormKind::KeyRequest, summary);
            },
            h3 { "Extra sleutel aanvragen" }
            div { class: "form-group",
                label { "Naam" }
                input {
                    r#type: "text",
                    name: "name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Gebouw / appartement" }
                input {
                    r#type: "text",
                    name: "gebouw",
                    value: "{building}",
                    oninput: move |evt| building.set(evt.value()),
                }
            }
            DeliveryChoice { choice: delivery }
            if shows_delivery_address(&delivery.read()) {
                DeliveryAddress { id: "sleutel-adres", address }
            }
            button { r#type: "submit", "Verstuur aanvraag" }
        }
    }
}

#[component]
fn NamePlateForm() -> Element {
    let state = use_overlay_state();
    let mut name = use_signal(String::new);
    let mut plate_text = use_signal(String::new);
    let delivery = use_signal(String::new);
    let address = use_signal(String::new);
    let mut file_names = use_signal(Vec::<String>::new);
    let upload_label = file_upload_label(&file_names.read(), true);

    rsx! {
        form {
            class: "overlay-form active",
            id: "form-label",
            onsubmit: move |evt| {
                evt.prevent_default();
                if name.read().trim().is_empty() || plate_text.read().trim().is_empty() {
                    return;
                }
                let summary = format!(
                    "name={}, tekst={}, levering={}, bijlagen={}",
                    name.read(),
                    plate_text.read(),
                    delivery.read(),
                    file_names.read().len()
                );
                submit_form(state, FormKind::NamePlate, summary);
            },
            h3 { "Naamplaatje aanvragen" }
            div { class: "form-group",
                label { "Naam" }
                input {
                    r#type: "text",
                    name: "name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Tekst op het plaatje" }
                input {
                    r#type: "text",
                    name: "tekst",
                    value: "{plate_text}",
                    oninput: move |evt| plate_text.set(evt.value()),
                }
            }
            div { class: "form-group file-upload",
                label { "Voorbeeld of foto (optioneel)" }
                input {
                    r#type: "file",
                    name: "bijlagen",
                    multiple: true,
                    onchange: move |evt| {
                        let names: Vec<String> =
                            evt.files().into_iter().map(|f| f.name()).collect();
                        file_names.set(names);
                    },
                }
                span { class: "file-upload-text", "{upload_label}" }
            }
            DeliveryChoice { choice: delivery }
            if shows_delivery_address(&delivery.read()) {
                DeliveryAddress { id: "label-adres", address }
            }
            button { r#type: "submit", "Verstuur aanvraag" }
        }
    }
}
