//! Aggregate statistics over a user's full item collection.
//!
//! Always computed from the unfiltered list so the numbers do not move when
//! the user changes filters.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::item::WardrobeItem;

/// Summary numbers shown above the wardrobe grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WardrobeStats {
    pub total_items: usize,
    /// Item count per category name; missing categories count as
    /// `"uncategorized"`.
    pub category_counts: BTreeMap<String, usize>,
    /// Sum of prices, absent prices counted as 0.
    pub total_value: f64,
    /// Mean wear count; 0 for an empty collection.
    pub average_wear_count: f64,
    pub favorite_count: usize,
    pub never_worn_count: usize,
}

/// Compute statistics over `items`.
pub fn compute_stats(items: &[WardrobeItem]) -> WardrobeStats {
    let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut total_value = 0.0;
    let mut total_wears: i64 = 0;
    let mut favorite_count = 0;
    let mut never_worn_count = 0;

    for item in items {
        *category_counts
            .entry(item.category_key().to_string())
            .or_default() += 1;
        total_value += item.price.filter(|p| p.is_finite()).unwrap_or(0.0);
        total_wears += item.wear_count_or_zero();
        if item.is_favorite {
            favorite_count += 1;
        }
        if item.wear_count == 0 {
            never_worn_count += 1;
        }
    }

    let average_wear_count = if items.is_empty() {
        0.0
    } else {
        total_wears as f64 / items.len() as f64
    };

    WardrobeStats {
        total_items: items.len(),
        category_counts,
        total_value,
        average_wear_count,
        favorite_count,
        never_worn_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::tests::item;

    #[test]
    fn example_collection() {
        let mut red = item(1, "Red Shirt");
        red.price = Some(20.0);
        let mut blue = item(2, "Blue Jeans");
        blue.price = Some(50.0);
        blue.wear_count = 5;

        let stats = compute_stats(&[red, blue]);
        assert_eq!(stats.total_items, 2);
        assert_eq!(stats.total_value, 70.0);
        assert_eq!(stats.average_wear_count, 2.5);
        assert_eq!(stats.never_worn_count, 1);
    }

    #[test]
    fn empty_collection_is_zeroed() {
        let stats = compute_stats(&[]);
        assert!(stats.category_counts.is_empty());
        assert_eq!(stats.total_value, 0.0);
        assert_eq!(stats.average_wear_count, 0.0);
        assert!(!stats.average_wear_count.is_nan());
    }

    #[test]
    fn category_counts_group_with_fallback() {
        let mut a = item(1, "a");
        a.category_name = Some("tops".into());
        let mut b = item(2, "b");
        b.category_name = Some("tops".into());
        let c = item(3, "c");

        let stats = compute_stats(&[a, b, c]);
        assert_eq!(stats.category_counts.get("tops"), Some(&2));
        assert_eq!(stats.category_counts.get("uncategorized"), Some(&1));
    }

    #[test]
    fn missing_prices_count_as_zero() {
        let mut a = item(1, "a");
        a.price = Some(12.5);
        let b = item(2, "b");
        assert_eq!(compute_stats(&[a, b]).total_value, 12.5);
    }

    #[test]
    fn favorites_counted() {
        let mut a = item(1, "a");
        a.is_favorite = true;
        let b = item(2, "b");
        assert_eq!(compute_stats(&[a, b]).favorite_count, 1);
    }
}
