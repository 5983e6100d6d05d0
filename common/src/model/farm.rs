use serde::{Deserialize, Serialize};

/// A farm registered in a user's profile, as returned by the profile store.
///
/// `document_uri` is the stable external identifier of the farm. The store
/// hands it out in path form (`/<id>`); deletion uses the bare form produced
/// by [`bare_document_id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    pub name: String,
    /// Area in km².
    pub surface: f64,
    pub owner: Owner,
    #[serde(default)]
    pub document_uri: String,
    #[serde(default)]
    pub plots: Vec<Plot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub first_name: String,
    pub last_name: String,
}

impl Owner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A plot inside a farm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    pub name: String,
    /// Area in km².
    pub surface: f64,
    #[serde(default)]
    pub document_uri: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// An agricultural event recorded on a plot. The profile view never looks
/// inside it; only the event table renders its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub document_uri: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub description: String,
}

/// Characters treated as path separators inside a document URI.
pub const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// Strips every path separator from `uri`, producing the bare identifier the
/// delete endpoint expects (`"/abc123"` becomes `"abc123"`).
pub fn bare_document_id(uri: &str) -> String {
    uri.chars().filter(|c| !PATH_SEPARATORS.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_id_strips_separators() {
        assert_eq!(bare_document_id("/abc123"), "abc123");
        assert_eq!(bare_document_id("/a/b\\c"), "abc");
        assert_eq!(bare_document_id("plain"), "plain");
        assert_eq!(bare_document_id(""), "");
    }

    #[test]
    fn farm_uses_camel_case_wire_names() {
        let json = r#"{
            "name": "North Field",
            "surface": 12.5,
            "owner": { "firstName": "Ana", "lastName": "Pérez" },
            "documentUri": "/f1",
            "plots": [
                { "name": "P1", "surface": 2.0, "documentUri": "/p1",
                  "events": [{ "date": "2024-03-01", "eventType": "Siembra" }] },
                { "name": "P2", "surface": 3.0 }
            ]
        }"#;

        let farm: Farm = serde_json::from_str(json).unwrap();
        assert_eq!(farm.owner.full_name(), "Ana Pérez");
        assert_eq!(farm.plots.len(), 2);
        assert_eq!(farm.plots[0].events[0].event_type, "Siembra");
        assert_eq!(farm.plots[0].events[0].description, "");
        assert!(farm.plots[1].events.is_empty());
        assert_eq!(farm.plots[1].document_uri, "");

        let back = serde_json::to_value(&farm).unwrap();
        assert_eq!(back["documentUri"], "/f1");
        assert_eq!(back["owner"]["firstName"], "Ana");
    }
}
