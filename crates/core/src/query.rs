//! Wardrobe query engine: search, filter, and sort over loaded items.
//!
//! The engine works on an in-memory slice handed in by the caller and never
//! fails. Filter and sort selections travel as plain serializable view state
//! ([`ItemFilters`], [`SortKey`]) so a list endpoint can deserialize them
//! straight from the query string.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::item::{WardrobeItem, FILTER_ALL};

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// Sort modes offered by the wardrobe list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Alphabetical,
    MostWorn,
    LeastWorn,
    Favorites,
}

/// Independent filter predicates. String fields use `"all"` to disable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFilters {
    pub category: String,
    pub season: String,
    pub occasion: String,
    pub color: String,
    pub condition: String,
    pub favorites_only: bool,
    pub never_worn: bool,
}

impl Default for ItemFilters {
    fn default() -> Self {
        Self {
            category: FILTER_ALL.to_string(),
            season: FILTER_ALL.to_string(),
            occasion: FILTER_ALL.to_string(),
            color: FILTER_ALL.to_string(),
            condition: FILTER_ALL.to_string(),
            favorites_only: false,
            never_worn: false,
        }
    }
}

/// Search term, filters, and sort as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub search: String,
    #[serde(flatten)]
    pub filters: ItemFilters,
    pub sort: SortKey,
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn is_all(value: &str) -> bool {
    value.is_empty() || value == FILTER_ALL
}

/// Case-insensitive substring match on name, description, or any tag name.
pub fn matches_search(item: &WardrobeItem, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let contains = |s: &str| s.to_lowercase().contains(&needle);

    contains(&item.name)
        || item.description.as_deref().is_some_and(contains)
        || item.tags.iter().any(|t| contains(&t.name))
}

/// True when the item passes every filter in `filters`.
pub fn matches_filters(item: &WardrobeItem, filters: &ItemFilters) -> bool {
    (is_all(&filters.category) || item.category_key() == filters.category)
        && (is_all(&filters.season) || item.has_tag(&filters.season))
        && (is_all(&filters.occasion) || item.has_tag(&filters.occasion))
        && (is_all(&filters.color) || item.has_tag(&filters.color))
        && (is_all(&filters.condition)
            || item.condition.map(|c| c.as_str()) == Some(filters.condition.as_str()))
        && (!filters.favorites_only || item.is_favorite)
        && (!filters.never_worn || item.wear_count == 0)
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Comparator for one sort mode. Ties compare equal so a stable sort keeps
/// their incoming order.
pub fn compare(a: &WardrobeItem, b: &WardrobeItem, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => b.id.cmp(&a.id),
        SortKey::Oldest => a.id.cmp(&b.id),
        SortKey::Alphabetical => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::MostWorn => b.wear_count.cmp(&a.wear_count),
        SortKey::LeastWorn => a.wear_count.cmp(&b.wear_count),
        SortKey::Favorites => b.is_favorite.cmp(&a.is_favorite),
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Filter `items` then sort the survivors.
pub fn query<'a>(
    items: &'a [WardrobeItem],
    search: &str,
    filters: &ItemFilters,
    sort: SortKey,
) -> Vec<&'a WardrobeItem> {
    let mut out: Vec<&WardrobeItem> = items
        .iter()
        .filter(|item| matches_search(item, search) && matches_filters(item, filters))
        .collect();
    out.sort_by(|a, b| compare(a, b, sort));
    out
}

/// [`query`] driven by a [`ViewState`].
pub fn query_view<'a>(items: &'a [WardrobeItem], view: &ViewState) -> Vec<&'a WardrobeItem> {
    query(items, &view.search, &view.filters, view.sort)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
