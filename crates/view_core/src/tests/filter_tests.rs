use super::*;
use shared::catalog::CATALOG;
use shared::domain::{Category, CategoryFilter, ItemId, PortfolioItem};

static MINI_CATALOG: [PortfolioItem; 3] = [
    PortfolioItem {
        id: ItemId(1),
        category: Category::Portrait,
        title: "One",
        tint: [0, 0, 0],
    },
    PortfolioItem {
        id: ItemId(2),
        category: Category::Wedding,
        title: "Two",
        tint: [0, 0, 0],
    },
    PortfolioItem {
        id: ItemId(3),
        category: Category::Landscape,
        title: "Three",
        tint: [0, 0, 0],
    },
];

fn visible_ids(filter: &PortfolioFilter) -> Vec<ItemId> {
    filter.visible_items().map(|item| item.id).collect()
}

#[test]
fn defaults_to_all_with_full_catalog_in_order() {
    let filter = PortfolioFilter::new(&CATALOG);
    assert_eq!(filter.active(), CategoryFilter::All);
    let ids = visible_ids(&filter);
    assert_eq!(ids, CATALOG.iter().map(|item| item.id).collect::<Vec<_>>());
}

#[test]
fn every_category_returns_exactly_its_items_in_catalog_order() {
    let mut filter = PortfolioFilter::new(&CATALOG);
    for category in Category::ALL {
        filter.set_category(CategoryFilter::Only(category));
        let expected: Vec<ItemId> = CATALOG
            .iter()
            .filter(|item| item.category == category)
            .map(|item| item.id)
            .collect();
        assert_eq!(visible_ids(&filter), expected, "category {category:?}");
    }
}

#[test]
fn selecting_wedding_in_three_item_catalog_yields_item_two() {
    let mut filter = PortfolioFilter::new(&MINI_CATALOG);
    filter.set_category(CategoryFilter::Only(Category::Wedding));
    let visible: Vec<_> = filter.visible_items().collect();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, ItemId(2));
    assert_eq!(visible[0].category, Category::Wedding);
}

#[test]
fn set_category_is_idempotent() {
    let mut filter = PortfolioFilter::new(&CATALOG);
    filter.set_category(CategoryFilter::Only(Category::Portrait));
    let once = visible_ids(&filter);
    filter.set_category(CategoryFilter::Only(Category::Portrait));
    assert_eq!(visible_ids(&filter), once);
}

#[test]
fn visible_items_is_pure_across_repeated_calls() {
    let mut filter = PortfolioFilter::new(&CATALOG);
    filter.set_category(CategoryFilter::Only(Category::Events));
    let first = visible_ids(&filter);
    let second = visible_ids(&filter);
    assert_eq!(first, second);
}

#[test]
fn label_entry_point_accepts_all_and_known_categories() {
    let mut filter = PortfolioFilter::new(&CATALOG);
    filter.set_category_label("Wedding").expect("known label");
    assert_eq!(filter.active(), CategoryFilter::Only(Category::Wedding));
    filter.set_category_label("all").expect("case-insensitive");
    assert_eq!(filter.active(), CategoryFilter::All);
}

#[test]
fn unknown_label_is_rejected_and_leaves_selection_unchanged() {
    let mut filter = PortfolioFilter::new(&CATALOG);
    filter.set_category(CategoryFilter::Only(Category::Fashion));
    let err = filter.set_category_label("Astrophotography").unwrap_err();
    assert_eq!(err, FilterError::UnknownCategory("Astrophotography".to_string()));
    assert_eq!(filter.active(), CategoryFilter::Only(Category::Fashion));
}
