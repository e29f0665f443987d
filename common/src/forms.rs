/// Which overlay form a trigger opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// General contact form.
    Contact,
    /// Extra key request (sleutel).
    KeyRequest,
    /// Name-plate request (label).
    NamePlate,
}

impl FormKind {
    /// The `data-form` trigger value this kind answers to.
    pub fn from_trigger(value: &str) -> Option<Self> {
        match value {
            "contact" => Some(Self::Contact),
            "sleutel" => Some(Self::KeyRequest),
            "label" => Some(Self::NamePlate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::KeyRequest => "sleutel",
            Self::NamePlate => "label",
        }
    }
}

/// Overlay lifecycle: which form is showing, whether the success panel has
/// replaced it, and whether the close animation is still playing.
///
/// `begin_close` drops the active state immediately while the contents stay
/// mounted; `reset` clears them once the animation window has passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub open: bool,
    pub active_form: Option<FormKind>,
    pub show_success: bool,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the given form, hiding any previous form or success panel.
    pub fn open_form(&mut self, kind: FormKind) {
        self.active_form = Some(kind);
        self.show_success = false;
        self.open = true;
    }

    /// Start closing. Contents are kept for the animation window.
    pub fn begin_close(&mut self) {
        self.open = false;
    }

    /// Clear the overlay contents after the close animation.
    pub fn reset(&mut self) {
        self.active_form = None;
        self.show_success = false;
    }

    /// The active form was submitted; the success panel takes its place.
    pub fn complete_submission(&mut self) {
        self.show_success = true;
    }

    /// Whether the overlay node belongs in the document at all.
    pub fn is_mounted(&self) -> bool {
        self.open || self.active_form.is_some() || self.show_success
    }
}

/// Inline `overflow` value for `<body>`: page scrolling is locked while the
/// overlay is open and restored when it closes.
pub fn body_overflow(overlay_open: bool) -> &'static str {
    if overlay_open {
        "hidden"
    } else {
        ""
    }
}

/// Delivery option value that makes the address block visible.
pub const DELIVERY_BY_POST: &str = "post";

/// The address block shows only for postal delivery.
pub fn shows_delivery_address(choice: &str) -> bool {
    choice == DELIVERY_BY_POST
}

/// Label text for a file-upload control.
///
/// No selection restores the prompt, one file shows its name, more show a
/// count.
pub fn file_upload_label(names: &[String], multiple: bool) -> String {
    match names {
        [] if multiple => "Bestanden kiezen".into(),
        [] => "Bestand kiezen".into(),
        [single] => single.clone(),
        many => format!("{} bestanden geselecteerd", many.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_round_trip() {
        for kind in [FormKind::Contact, FormKind::KeyRequest, FormKind::NamePlate] {
            assert_eq!(FormKind::from_trigger(kind.as_str()), Some(kind));
        }
        assert!(FormKind::from_trigger("newsletter").is_none());
    }

    #[test]
    fn test_overlay_open_shows_one_form() {
        let mut state = OverlayState::new();
        state.open_form(FormKind::Contact);
        state.complete_submission();
        // Opening another form replaces both the old form and the success panel.
        state.open_form(FormKind::KeyRequest);
        assert!(state.open);
        assert_eq!(state.active_form, Some(FormKind::KeyRequest));
        assert!(!state.show_success);
    }

    #[test]
    fn test_overlay_stays_mounted_through_close_window() {
        let mut state = OverlayState::new();
        state.open_form(FormKind::NamePlate);
        state.begin_close();
        // No longer active, but the contents survive until the reset runs.
        assert!(!state.open);
        assert!(state.is_mounted());
        state.reset();
        assert!(!state.is_mounted());
        assert_eq!(state.active_form, None);
    }

    #[test]
    fn test_overlay_success_kept_mounted_until_reset() {
        let mut state = OverlayState::new();
        state.open_form(FormKind::Contact);
        state.complete_submission();
        state.begin_close();
        assert!(state.is_mounted());
        state.reset();
        assert!(!state.show_success);
        assert!(!state.is_mounted());
    }

    #[test]
    fn test_body_scroll_locked_only_while_open() {
        assert_eq!(body_overflow(true), "hidden");
        assert_eq!(body_overflow(false), "");
    }

    #[test]
    fn test_address_only_for_post() {
        assert!(shows_delivery_address("post"));
        assert!(!shows_delivery_address("afhalen"));
        assert!(!shows_delivery_address(""));
    }

    #[test]
    fn test_file_label_empty_selection() {
        assert_eq!(file_upload_label(&[], false), "Bestand kiezen");
        assert_eq!(file_upload_label(&[], true), "Bestanden kiezen");
    }

    #[test]
    fn test_file_label_single_file_shows_name() {
        let names = vec!["akte.pdf".to_string()];
        assert_eq!(file_upload_label(&names, true), "akte.pdf");
    }

    #[test]
    fn test_file_label_many_files_shows_count() {
        let names = vec!["a.pdf".to_string(), "b.pdf".to_string(), "c.pdf".to_string()];
        assert_eq!(file_upload_label(&names, true), "3 bestanden geselecteerd");
    }
}
