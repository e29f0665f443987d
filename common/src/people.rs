use serde::{Deserialize, Serialize};

/// An outbound link on a person's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "type")]
    pub link_type: String,
    pub href: String,
    pub text: String,
}

/// A member of the people directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub position: String,
    pub about: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// The people resource: `{ "members": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleDirectory {
    pub members: Vec<Person>,
}

impl PeopleDirectory {
    /// Look up a member by id. First match wins.
    pub fn find(&self, id: &str) -> Option<&Person> {
        self.members.iter().find(|p| p.id == id)
    }
}

/// Parse a people payload body. Any shape deviation yields `None`.
pub fn parse_payload(body: &str) -> Option<PeopleDirectory> {
    serde_json::from_str(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "members": [
            {
                "id": "gabriel",
                "name": "Gabriel",
                "position": "Founder",
                "about": "Keeps the lights on.",
                "links": [
                    { "type": "web", "href": "https://example.org", "text": "site" }
                ]
            },
            {
                "id": "mira",
                "name": "Mira",
                "position": "Operations",
                "about": "Runs the day to day."
            }
        ]
    }"#;

    #[test]
    fn test_parse_members() {
        let dir = parse_payload(BODY).expect("valid payload");
        assert_eq!(dir.members.len(), 2);
        assert_eq!(dir.members[0].name, "Gabriel");
        assert_eq!(dir.members[0].links[0].link_type, "web");
    }

    #[test]
    fn test_missing_links_defaults_to_empty() {
        let dir = parse_payload(BODY).unwrap();
        assert!(dir.members[1].links.is_empty());
    }

    #[test]
    fn test_find_hit_and_miss() {
        let dir = parse_payload(BODY).unwrap();
        assert_eq!(dir.find("mira").map(|p| p.name.as_str()), Some("Mira"));
        assert!(dir.find("nobody").is_none());
    }

    #[test]
    fn test_malformed_payload() {
        assert!(parse_payload(r#"{"members": 3}"#).is_none());
        assert!(parse_payload("<!doctype html>").is_none());
    }
}
