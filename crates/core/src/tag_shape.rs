//! Normalization of item-tag associations.
//!
//! Associations reach us in two shapes: nested under a `tag` key (the
//! join-row shape, `{"tag": {"id": 1, "name": "winter"}}`) or flat
//! (`{"id": 1, "name": "winter"}`). Both collapse to [`TagRef`] here so
//! nothing downstream has to care.

use serde::Deserialize;

use crate::item::TagRef;

/// One association in either accepted shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTagLink {
    Nested { tag: TagRef },
    Flat(TagRef),
}

impl RawTagLink {
    pub fn into_tag(self) -> TagRef {
        match self {
            Self::Nested { tag } => tag,
            Self::Flat(tag) => tag,
        }
    }
}

/// Collapse associations to tags, dropping repeats of the same tag id.
/// First occurrence wins and input order is kept.
pub fn normalize_tags(links: Vec<RawTagLink>) -> Vec<TagRef> {
    let mut out: Vec<TagRef> = Vec::with_capacity(links.len());
    for tag in links.into_iter().map(RawTagLink::into_tag) {
        if !out.iter().any(|t| t.id == tag.id) {
            out.push(tag);
        }
    }
    out
}

/// Parse a JSON array of associations. Entries in neither shape are
/// skipped; a non-array value yields no tags.
pub fn tags_from_json(value: &serde_json::Value) -> Vec<TagRef> {
    let Some(arr) = value.as_array() else {
        return Vec::new();
    };
    let links = arr
        .iter()
        .filter_map(|v| serde_json::from_value::<RawTagLink>(v.clone()).ok())
        .collect();
    normalize_tags(links)
}
