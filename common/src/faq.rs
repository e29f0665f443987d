use serde::{Deserialize, Serialize};

/// A single question/answer pair in the FAQ.
///
/// The `id` doubles as display index and stable DOM anchor key; it is not
/// derived from position, so gaps in ids produce gaps in numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

/// Wire shape of the FAQ resource: `{ "faq": [ ... ] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqDocument {
    pub faq: Vec<FaqEntry>,
}

/// Parse an FAQ payload body.
///
/// An explicit empty `faq` array is a valid (empty) set. A missing `faq`
/// key, a non-array value, or broken JSON all yield `None`.
pub fn parse_payload(body: &str) -> Option<Vec<FaqEntry>> {
    serde_json::from_str::<FaqDocument>(body).ok().map(|d| d.faq)
}

/// Resolve a fetch outcome into the set to render.
///
/// Transport failure and malformed payload are not distinguished: both
/// substitute the compiled-in fallback set. This never errors, so exactly
/// one set reaches the renderer per page load.
pub fn resolve_payload(outcome: Result<String, String>) -> Vec<FaqEntry> {
    outcome
        .ok()
        .and_then(|body| parse_payload(&body))
        .unwrap_or_else(fallback_entries)
}

/// Zero-padded two-digit display index for an entry id.
pub fn display_index(id: u32) -> String {
    format!("{id:02}")
}

/// Exclusive-expansion click transition.
///
/// Clicking the open entry closes it; clicking any other entry opens it and
/// closes the rest. At most one entry is ever expanded.
pub fn next_expanded(current: Option<u32>, clicked: u32) -> Option<u32> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// The compiled-in FAQ content used when the live resource cannot be
/// loaded or parsed. Six fixed entries, ids 1-6.
pub fn fallback_entries() -> Vec<FaqEntry> {
    fn entry(id: u32, question: &str, answer: &str) -> FaqEntry {
        FaqEntry {
            id,
            question: question.into(),
            answer: answer.into(),
        }
    }

    vec![
        entry(
            1,
            "Hoe snel krijg ik antwoord op mijn vraag?",
            "Wij streven ernaar alle vragen binnen 24 uur te beantwoorden. \
             Dringende zaken behandelen wij met voorrang.",
        ),
        entry(
            2,
            "Hoe wordt een algemene vergadering georganiseerd?",
            "Wij plannen de vergadering, verzenden uitnodigingen, bereiden de \
             agenda voor en stellen het verslag op. U hoeft enkel aanwezig te zijn.",
        ),
        entry(
            3,
            "Wat is het verschil tussen syndicus en rentmeesterschap?",
            "Een syndicus beheert mede-eigendommen (zoals appartementsgebouwen) \
             en zorgt voor het gemeenschappelijk beheer. Een rentmeester beheert \
             private eigendommen voor individuele eigenaars, inclusief \
             huurdersopvolging en financi\u{eb}le afhandeling.",
        ),
        entry(
            4,
            "Voor wie zijn jullie diensten bedoeld?",
            "Onze diensten zijn bedoeld voor eigenaars van mede-eigendommen, \
             private vastgoedeigenaars, en iedereen die professioneel beheer van \
             hun vastgoed wenst in Oost- en West-Vlaanderen.",
        ),
        entry(
            5,
            "Hoe transparant is de financi\u{eb}le en administratieve opvolging?",
            "Wij bieden volledige transparantie via duidelijke rapportages, \
             online toegang tot documenten, en regelmatige updates over alle \
             financi\u{eb}le en administratieve zaken van uw eigendom.",
        ),
        entry(
            6,
            "Kan ik ook beroep doen op jullie voor een specifieke opdracht?",
            "Ja, naast volledig beheer bieden wij ook flexibele dienstverlening \
             voor specifieke opdrachten. Contacteer ons om uw situatie te \
             bespreken en een oplossing op maat te vinden.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let entries = fallback_entries();
        assert_eq!(entries.len(), 6);
        let ids: Vec<u32> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        for e in &entries {
            assert!(!e.question.is_empty());
            assert!(!e.answer.is_empty());
        }
    }

    #[test]
    fn test_parse_valid_payload() {
        let body = r#"{"faq":[{"id":7,"question":"Q?","answer":"A."}]}"#;
        let entries = parse_payload(body).expect("valid payload");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 7);
        assert_eq!(entries[0].question, "Q?");
    }

    #[test]
    fn test_explicit_empty_array_is_valid() {
        let entries = parse_payload(r#"{"faq":[]}"#).expect("empty set is valid");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_missing_key_is_failure() {
        assert!(parse_payload(r#"{"questions":[]}"#).is_none());
        assert!(parse_payload(r#"{"faq":"nope"}"#).is_none());
        assert!(parse_payload("not json at all").is_none());
    }

    #[test]
    fn test_resolve_transport_failure_uses_fallback() {
        let entries = resolve_payload(Err("HTTP 503".into()));
        assert_eq!(entries, fallback_entries());
    }

    #[test]
    fn test_resolve_malformed_payload_uses_fallback() {
        let entries = resolve_payload(Ok("<!doctype html>".into()));
        assert_eq!(entries, fallback_entries());
    }

    #[test]
    fn test_resolve_valid_payload_replaces_fallback() {
        let body = r#"{"faq":[{"id":12,"question":"Q","answer":"A"}]}"#;
        let entries = resolve_payload(Ok(body.into()));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 12);
    }

    #[test]
    fn test_resolve_empty_set_is_not_fallback() {
        assert!(resolve_payload(Ok(r#"{"faq":[]}"#.into())).is_empty());
    }

    #[test]
    fn test_display_index_pads_to_two_digits() {
        assert_eq!(display_index(1), "01");
        assert_eq!(display_index(7), "07");
        assert_eq!(display_index(12), "12");
    }

    #[test]
    fn test_click_opens_and_switches() {
        assert_eq!(next_expanded(None, 3), Some(3));
        assert_eq!(next_expanded(Some(3), 5), Some(5));
    }

    #[test]
    fn test_click_on_open_entry_closes_it() {
        assert_eq!(next_expanded(Some(3), 3), None);
    }

    #[test]
    fn test_click_sequences_keep_at_most_one_open() {
        let mut state = None;
        for &clicked in &[1u32, 2, 2, 4, 4, 4, 1, 6] {
            state = next_expanded(state, clicked);
            // state is Option<u32>: at most one entry open by construction,
            // and any open entry is the one last clicked.
            if let Some(open) = state {
                assert_eq!(open, clicked);
            }
        }
    }
}
