//! The fixed catalog of known zmanim.
//!
//! Identifiers follow the calculation service's payload keys. The catalog is
//! ordered chronologically through the day, and that order is used whenever
//! a selection of zmanim has to be presented.

use serde::Serialize;

/// Part of the day a zman belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Category {
    /// All categories in day order.
    pub const ALL: [Category; 4] = [
        Category::Morning,
        Category::Afternoon,
        Category::Evening,
        Category::Night,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Morning => write!(f, "morning"),
            Category::Afternoon => write!(f, "afternoon"),
            Category::Evening => write!(f, "evening"),
            Category::Night => write!(f, "night"),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZmanOption {
    /// Payload key, e.g. `sofZmanShma`.
    pub id: &'static str,
    /// Human-readable label, e.g. `Sof Zman Shma`.
    pub label: &'static str,
    pub category: Category,
}

const fn option(id: &'static str, label: &'static str, category: Category) -> ZmanOption {
    ZmanOption {
        id,
        label,
        category,
    }
}

/// Every zman the engine knows by name, in day order.
pub const ZMANIM_OPTIONS: [ZmanOption; 12] = [
    option("alotHaShachar", "Alot HaShachar", Category::Morning),
    option("misheyakir", "Misheyakir", Category::Morning),
    option("sunrise", "Sunrise", Category::Morning),
    option("sofZmanShma", "Sof Zman Shma", Category::Morning),
    option("sofZmanTfilla", "Sof Zman Tfilla", Category::Morning),
    option("chatzot", "Chatzot", Category::Afternoon),
    option("minchaGedola", "Mincha Gedola", Category::Afternoon),
    option("minchaKetana", "Mincha Ketana", Category::Afternoon),
    option("plagHaMincha", "Plag HaMincha", Category::Afternoon),
    option("sunset", "Sunset", Category::Evening),
    option("tzeit42min", "Tzeit 42 min", Category::Night),
    option("tzeit72min", "Tzeit 72 min", Category::Night),
];

/// Look up a catalog entry by its identifier.
///
/// ```
/// use zmanim_core::catalog::{Category, find_zman};
///
/// assert_eq!(find_zman("sunset").unwrap().category, Category::Evening);
/// assert!(find_zman("moonrise").is_none());
/// ```
pub fn find_zman(id: &str) -> Option<&'static ZmanOption> {
    ZMANIM_OPTIONS.iter().find(|opt| opt.id == id)
}

/// Display label for a zman, falling back to the raw identifier for ids
/// outside the catalog.
pub fn zman_label(id: &str) -> &str {
    find_zman(id).map_or(id, |opt| opt.label)
}

/// Position of a zman in the catalog.
pub fn catalog_position(id: &str) -> Option<usize> {
    ZMANIM_OPTIONS.iter().position(|opt| opt.id == id)
}

/// Catalog entries belonging to one category, in day order.
pub fn zmanim_in_category(category: Category) -> impl Iterator<Item = &'static ZmanOption> {
    ZMANIM_OPTIONS
        .iter()
        .filter(move |opt| opt.category == category)
}

/// Order a selection of zman ids for presentation.
///
/// Known ids come first in catalog order; unknown ids follow in the order
/// they were given. Duplicates are removed.
pub fn order_selection<S: AsRef<str>>(selection: &[S]) -> Vec<String> {
    let mut known: Vec<(usize, &str)> = Vec::new();
    let mut unknown: Vec<&str> = Vec::new();

    for id in selection.iter().map(AsRef::as_ref) {
        if known.iter().any(|(_, k)| *k == id) || unknown.contains(&id) {
            continue;
        }
        match catalog_position(id) {
            Some(pos) => known.push((pos, id)),
            None => unknown.push(id),
        }
    }

    known.sort_by_key(|(pos, _)| *pos);
    known
        .into_iter()
        .map(|(_, id)| id)
        .chain(unknown)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_twelve_unique_ids() {
        let mut ids: Vec<_> = ZMANIM_OPTIONS.iter().map(|o| o.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn categories_are_contiguous_in_day_order() {
        let categories: Vec<_> = ZMANIM_OPTIONS.iter().map(|o| o.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn label_lookup() {
        assert_eq!(zman_label("tzeit72min"), "Tzeit 72 min");
        assert_eq!(zman_label("plagHaMincha"), "Plag HaMincha");
    }

    #[test]
    fn unknown_label_falls_back_to_id() {
        assert_eq!(zman_label("candleLighting"), "candleLighting");
    }

    #[test]
    fn category_listing() {
        let morning: Vec<_> = zmanim_in_category(Category::Morning)
            .map(|o| o.id)
            .collect();
        assert_eq!(
            morning,
            vec![
                "alotHaShachar",
                "misheyakir",
                "sunrise",
                "sofZmanShma",
                "sofZmanTfilla"
            ]
        );
        assert_eq!(zmanim_in_category(Category::Evening).count(), 1);
        assert_eq!(zmanim_in_category(Category::Night).count(), 2);
    }

    #[test]
    fn selection_ordering() {
        let ordered = order_selection(&["sunset", "custom", "sunrise", "sunset", "chatzot"]);
        assert_eq!(ordered, vec!["sunrise", "chatzot", "sunset", "custom"]);
    }

    #[test]
    fn category_display_and_serialization() {
        assert_eq!(Category::Afternoon.to_string(), "afternoon");
        assert_eq!(
            serde_json::to_string(&Category::Night).unwrap(),
            "\"night\""
        );
    }
}
