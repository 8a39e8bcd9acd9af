//! Field projection from raw library records to the simplified views returned
//! by each tool.
//!
//! Absent fields are replaced with human-readable defaults. Which fields are
//! kept, and which defaults apply, depends on the [`Projection`] variant.

use serde::Serialize;
use zotero_client::{Creator, LibraryRecord, Tag};

pub const UNTITLED: &str = "Untitled";
pub const NO_AUTHORS: &str = "No authors listed";
pub const NO_DATE: &str = "No date";
pub const NO_KEY: &str = "No key";
pub const UNKNOWN_TYPE: &str = "Unknown type";
pub const NO_ABSTRACT: &str = "No abstract available";
pub const NO_PUBLICATION_TITLE: &str = "No publication title";
pub const NO_DOI: &str = "No DOI";
pub const NO_URL: &str = "No URL";

/// Which view a record is projected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Search results: identity, authorship and abstract only.
    ListBrief,
    /// Collection listings: brief fields plus tags and links.
    ListFull,
    /// Single-item details.
    Detail,
    /// Recently added listing, keyed on `dateAdded`.
    Recent,
}

/// Collection listing view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemView {
    pub title: String,
    pub authors: String,
    pub date: String,
    pub key: String,
    pub item_type: String,
    pub abstract_note: String,
    pub tags: Vec<String>,
    pub doi: Option<String>,
    pub url: Option<String>,
    pub publication_title: Option<String>,
}

/// Search result view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefItemView {
    pub title: String,
    pub authors: String,
    pub date: String,
    pub key: Option<String>,
    pub item_type: Option<String>,
    pub abstract_note: String,
}

/// Recently added view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentItemView {
    pub title: String,
    pub authors: String,
    pub date_added: String,
    pub key: Option<String>,
    pub item_type: Option<String>,
}

/// Single-item detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetailView {
    pub title: String,
    pub authors: String,
    pub date: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub publication_title: String,
    pub doi: String,
    pub url: String,
    pub tags: Vec<String>,
    pub collections: Vec<String>,
}

/// A projected record, serialized without a variant tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedItemView {
    ListBrief(BriefItemView),
    ListFull(ListItemView),
    Detail(ItemDetailView),
    Recent(RecentItemView),
}

/// Project `record` into the view selected by `projection`.
pub fn project(record: &LibraryRecord, projection: Projection) -> NormalizedItemView {
    let title = or_default(&record.title, UNTITLED);
    let authors = format_authors(record.creators.as_deref().unwrap_or_default());

    match projection {
        Projection::ListBrief => NormalizedItemView::ListBrief(BriefItemView {
            title,
            authors,
            date: or_default(&record.date, NO_DATE),
            key: record.key.clone(),
            item_type: record.item_type.clone(),
            abstract_note: or_default(&record.abstract_note, NO_ABSTRACT),
        }),
        Projection::ListFull => NormalizedItemView::ListFull(ListItemView {
            title,
            authors,
            date: or_default(&record.date, NO_DATE),
            key: or_default(&record.key, NO_KEY),
            item_type: or_default(&record.item_type, UNKNOWN_TYPE),
            abstract_note: or_default(&record.abstract_note, NO_ABSTRACT),
            tags: non_empty_tags(record.tags.as_deref().unwrap_or_default()),
            doi: record.doi.clone(),
            url: record.url.clone(),
            publication_title: record.publication_title.clone(),
        }),
        Projection::Detail => NormalizedItemView::Detail(ItemDetailView {
            title,
            authors,
            date: or_default(&record.date, NO_DATE),
            abstract_text: or_default(&record.abstract_note, NO_ABSTRACT),
            publication_title: or_default(&record.publication_title, NO_PUBLICATION_TITLE),
            doi: or_default(&record.doi, NO_DOI),
            url: or_default(&record.url, NO_URL),
            tags: all_tags(record.tags.as_deref().unwrap_or_default()),
            collections: record.collections.clone().unwrap_or_default(),
        }),
        Projection::Recent => NormalizedItemView::Recent(RecentItemView {
            title,
            authors,
            date_added: or_default(&record.date_added, NO_DATE),
            key: record.key.clone(),
            item_type: record.item_type.clone(),
        }),
    }
}

/// Project every record with the same projection.
pub fn project_all(records: &[LibraryRecord], projection: Projection) -> Vec<NormalizedItemView> {
    records.iter().map(|r| project(r, projection)).collect()
}

/// Join creators as `"First Last, First Last"`.
///
/// Creators whose rendered name is empty are skipped; with nothing left the
/// result is [`NO_AUTHORS`].
pub fn format_authors(creators: &[Creator]) -> String {
    let names: Vec<String> = creators
        .iter()
        .map(Creator::display_name)
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        NO_AUTHORS.to_string()
    } else {
        names.join(", ")
    }
}

fn or_default(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

// Listing views drop empty tags, detail views keep every tag verbatim.
fn non_empty_tags(tags: &[Tag]) -> Vec<String> {
    tags.iter()
        .filter(|t| !t.tag.is_empty())
        .map(|t| t.tag.clone())
        .collect()
}

fn all_tags(tags: &[Tag]) -> Vec<String> {
    tags.iter().map(|t| t.tag.clone()).collect()
}
