use super::*;
use crate::seed::fallback_products;
use shared::domain::{ProductDraft, Rating};

fn product(id: i64, category: &str) -> Product {
    Product::from_draft(
        ProductId(id),
        ProductDraft {
            title: format!("item {id}"),
            price: 1.0,
            description: "d".into(),
            category: category.into(),
            image: None,
        },
    )
}

fn loaded() -> CatalogState {
    let mut state = CatalogState::default();
    state.replace_all(fallback_products());
    state
}

#[test]
fn starts_empty() {
    let state = CatalogState::default();
    assert!(state.products().is_empty());
    assert!(state.categories().is_empty());
    assert!(state.filtered().is_empty());
    assert_eq!(state.max_id(), None);
}

#[test]
fn replace_all_recomputes_derived_views() {
    let state = loaded();
    assert_eq!(state.products().len(), 4);
    assert_eq!(state.filtered(), state.products());
    assert_eq!(state.categories(), ["men's clothing", "jewelery"]);
    assert_eq!(state.max_id(), Some(ProductId(4)));
}

#[test]
fn prepend_appends_new_category_at_end() {
    let mut state = loaded();
    state.prepend(product(5, "accessories")).expect("prepend");
    assert_eq!(state.products()[0].id, ProductId(5));
    assert_eq!(
        state.categories(),
        ["men's clothing", "jewelery", "accessories"]
    );
}

#[test]
fn prepend_rejects_duplicate_id() {
    let mut state = loaded();
    let before = state.clone();
    let err = state.prepend(product(3, "x")).expect_err("duplicate");
    assert_eq!(err, CatalogError::DuplicateId(ProductId(3)));
    assert_eq!(state, before);
}

#[test]
fn replace_keeps_position() {
    let mut state = loaded();
    let mut edited = state.get(ProductId(2)).cloned().expect("present");
    edited.title = "Renamed".into();
    state.replace(edited).expect("replace");

    assert_eq!(state.products()[1].title, "Renamed");
    assert_eq!(state.products()[1].rating, Rating { rate: 4.1, count: 259 });
    assert_eq!(state.products().len(), 4);
}

#[test]
fn replace_unknown_id_fails() {
    let mut state = loaded();
    let err = state.replace(product(42, "x")).expect_err("missing");
    assert_eq!(err, CatalogError::ProductNotFound(ProductId(42)));
}

#[test]
fn remove_prunes_unused_category() {
    let mut state = loaded();
    let removed = state.remove(ProductId(4)).expect("remove");
    assert_eq!(removed.category, "jewelery");
    assert_eq!(state.categories(), ["men's clothing"]);
    assert_eq!(state.products().len(), 3);
}

#[test]
fn criteria_changes_leave_source_untouched() {
    let mut state = loaded();
    let products = state.products().to_vec();
    state.set_criteria(FilterCriteria {
        search: "jacket".into(),
        category: None,
    });
    assert_eq!(state.filtered().len(), 1);
    assert_eq!(state.products(), products.as_slice());

    state.remove(ProductId(3)).expect("remove");
    assert!(state.filtered().is_empty());
}
