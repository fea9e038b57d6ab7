use super::*;
use crate::{filter::FilterCriteria, seed::fallback_products};

#[test]
fn labels_capitalize_each_word() {
    assert_eq!(category_label("men's clothing"), "Men's Clothing");
    assert_eq!(category_label("jewelery"), "Jewelery");
    assert_eq!(category_label(""), "");
}

#[test]
fn summary_reports_counts_and_badges() {
    let mut state = CatalogState::default();
    state.replace_all(fallback_products());
    assert_eq!(
        summary_line(&state, LoadStatus::Ready),
        "Showing 4 of 4 products"
    );

    state.set_criteria(FilterCriteria {
        search: "jacket".into(),
        category: Some("men's clothing".into()),
    });
    assert_eq!(
        summary_line(&state, LoadStatus::Ready),
        "Showing 1 of 4 products  [Category: men's clothing]  [Search: \"jacket\"]"
    );
}

#[test]
fn summary_while_loading() {
    assert_eq!(
        summary_line(&CatalogState::default(), LoadStatus::Loading),
        "Loading..."
    );
}
