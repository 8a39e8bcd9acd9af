//! Wire types for Zotero library records.
//!
//! Item endpoints return envelopes (`key`, `version`, `library`, `links`,
//! `meta`, `data`); the client unwraps `data` into [`LibraryRecord`]. Every
//! field is optional because Zotero omits fields that do not apply to an item
//! type.

use serde::{Deserialize, Serialize};

/// One creator entry. Two-field creators use `firstName`/`lastName`,
/// single-field creators (institutions) use `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_type: Option<String>,
}

impl Creator {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    /// Rendered display name, trimmed. Empty when the creator carries no name.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (None, None) => self.name.as_deref().unwrap_or_default().trim().to_string(),
            (first, last) => format!(
                "{} {}",
                first.as_deref().unwrap_or_default(),
                last.as_deref().unwrap_or_default()
            )
            .trim()
            .to_string(),
        }
    }
}

/// A tag attached to an item. `type` is 1 for automatic tags, absent or 0
/// for manual ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub tag: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<i64>,
}

impl Tag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            kind: None,
        }
    }
}

/// The `data` payload of a Zotero item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryRecord {
    pub key: Option<String>,
    pub version: Option<u64>,
    pub item_type: Option<String>,
    pub title: Option<String>,
    pub creators: Option<Vec<Creator>>,
    pub date: Option<String>,
    pub date_added: Option<String>,
    pub abstract_note: Option<String>,
    pub tags: Option<Vec<Tag>>,
    pub collections: Option<Vec<String>>,
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
    pub url: Option<String>,
    pub publication_title: Option<String>,
}

/// API envelope around a [`LibraryRecord`].
#[derive(Debug, Clone, Deserialize)]
pub struct ItemEnvelope {
    pub key: String,
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub meta: serde_json::Value,
    #[serde(default)]
    pub data: LibraryRecord,
}

impl ItemEnvelope {
    /// Unwrap the record, backfilling `key` from the envelope when `data` lacks it.
    pub fn into_record(self) -> LibraryRecord {
        let mut record = self.data;
        if record.key.is_none() {
            record.key = Some(self.key);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_two_field() {
        assert_eq!(Creator::new("Ada", "Lovelace").display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_display_name_last_only_is_trimmed() {
        let creator = Creator {
            last_name: Some("X".to_string()),
            ..Creator::default()
        };
        assert_eq!(creator.display_name(), "X");
    }

    #[test]
    fn test_display_name_single_field() {
        let creator = Creator {
            name: Some("World Health Organization".to_string()),
            creator_type: Some("author".to_string()),
            ..Creator::default()
        };
        assert_eq!(creator.display_name(), "World Health Organization");
    }

    #[test]
    fn test_display_name_empty() {
        assert_eq!(Creator::default().display_name(), "");
    }

    #[test]
    fn test_deserialize_envelope() {
        let raw = serde_json::json!({
            "key": "ABCD2345",
            "version": 1,
            "library": { "type": "user", "id": 475425, "name": "Z public library" },
            "meta": { "numChildren": 1 },
            "data": {
                "key": "ABCD2345",
                "itemType": "journalArticle",
                "title": "On Computable Numbers",
                "creators": [
                    { "creatorType": "author", "firstName": "Alan", "lastName": "Turing" }
                ],
                "abstractNote": "",
                "DOI": "10.1112/plms/s2-42.1.230",
                "tags": [ { "tag": "computability" }, { "tag": "auto", "type": 1 } ],
                "collections": ["BCDE3456"],
                "dateAdded": "2024-01-02T03:04:05Z",
                "dateModified": "2024-02-03T04:05:06Z"
            }
        });

        let envelope: ItemEnvelope = serde_json::from_value(raw).unwrap();
        let record = envelope.into_record();
        assert_eq!(record.item_type.as_deref(), Some("journalArticle"));
        assert_eq!(record.doi.as_deref(), Some("10.1112/plms/s2-42.1.230"));
        assert_eq!(record.abstract_note.as_deref(), Some(""));
        assert_eq!(record.tags.as_ref().unwrap()[1].kind, Some(1));
        assert_eq!(record.collections.clone().unwrap(), vec!["BCDE3456"]);
        assert!(record.url.is_none());

        let reserialized = serde_json::to_value(&record).unwrap();
        assert!(reserialized.get("dateModified").is_none());
    }

    #[test]
    fn test_envelope_backfills_key() {
        let raw = serde_json::json!({ "key": "ZZZZ9999", "data": { "title": "No key in data" } });
        let envelope: ItemEnvelope = serde_json::from_value(raw).unwrap();
        assert_eq!(envelope.into_record().key.as_deref(), Some("ZZZZ9999"));
    }
}
