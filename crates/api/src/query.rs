//! Shared query parameter types for API handlers.

use serde::Deserialize;
use wardrobe_core::item::FILTER_ALL;
use wardrobe_core::profile::ProfileScope;
use wardrobe_core::query::{ItemFilters, SortKey, ViewState};

use crate::error::{AppError, AppResult};

/// `?limit=` for endpoints returning a bounded recent list.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// Query string of `GET /api/v1/items`.
///
/// Kept flat (no `#[serde(flatten)]`) so booleans and the sort key decode
/// from urlencoded values.
#[derive(Debug, Default, Deserialize)]
pub struct ItemListParams {
    /// `main` or a profile id. Absent lists every item.
    pub profile: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub season: Option<String>,
    pub occasion: Option<String>,
    pub color: Option<String>,
    pub condition: Option<String>,
    #[serde(default)]
    pub favorites_only: bool,
    #[serde(default)]
    pub never_worn: bool,
    pub sort: Option<SortKey>,
}

impl ItemListParams {
    pub fn scope(&self) -> AppResult<Option<ProfileScope>> {
        self.profile
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(ProfileScope::parse)
            .transpose()
            .map_err(AppError::from)
    }

    pub fn view(&self) -> ViewState {
        let or_all = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(FILTER_ALL)
                .to_string()
        };
        ViewState {
            search: self.search.clone().unwrap_or_default(),
            filters: ItemFilters {
                category: or_all(&self.category),
                season: or_all(&self.season),
                occasion: or_all(&self.occasion),
                color: or_all(&self.color),
                condition: or_all(&self.condition),
                favorites_only: self.favorites_only,
                never_worn: self.never_worn,
            },
            sort: self.sort.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(qs: &str) -> ItemListParams {
        axum::extract::Query::<ItemListParams>::try_from_uri(
            &format!("http://x/items?{qs}").parse().unwrap(),
        )
        .unwrap()
        .0
    }

    #[test]
    fn empty_query_is_default_view() {
        let p = parse("");
        assert_eq!(p.view(), ViewState::default());
        assert_eq!(p.scope().unwrap(), None);
    }

    #[test]
    fn flags_sort_and_filters_decode() {
        let p = parse("favorites_only=true&never_worn=true&sort=mostWorn&season=Summer&color=");
        let view = p.view();
        assert!(view.filters.favorites_only);
        assert!(view.filters.never_worn);
        assert_eq!(view.sort, SortKey::MostWorn);
        assert_eq!(view.filters.season, "Summer");
        assert_eq!(view.filters.color, FILTER_ALL);
    }

    #[test]
    fn profile_scope_parses() {
        assert_eq!(parse("profile=main").scope().unwrap(), Some(ProfileScope::Main));
        assert_eq!(
            parse("profile=7").scope().unwrap(),
            Some(ProfileScope::Profile(7))
        );
        assert!(parse("profile=kids").scope().is_err());
    }
}
