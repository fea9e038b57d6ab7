use super::*;
use crate::seed::fallback_products;

fn criteria(search: &str, category: Option<&str>) -> FilterCriteria {
    FilterCriteria {
        search: search.to_string(),
        category: category.map(str::to_string),
    }
}

fn titles(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.title.as_str()).collect()
}

#[test]
fn empty_criteria_returns_full_list_in_order() {
    let products = fallback_products();
    assert_eq!(project(&products, &FilterCriteria::default()), products);
}

#[test]
fn whitespace_search_counts_as_absent() {
    let products = fallback_products();
    let filtered = project(&products, &criteria("   ", None));
    assert_eq!(filtered.len(), products.len());
    assert!(criteria("  ", None).is_empty());
}

#[test]
fn jacket_matches_only_the_cotton_jacket() {
    let filtered = project(&fallback_products(), &criteria("jacket", None));
    assert_eq!(titles(&filtered), vec!["Mens Cotton Jacket"]);
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let products = fallback_products();
    // matches the category of every item except the bracelet
    let filtered = project(&products, &criteria("CLOTHING", None));
    assert_eq!(filtered.len(), 3);

    let filtered = project(&products, &criteria("Dragon", None));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].category, "jewelery");
}

#[test]
fn category_is_exact_and_anded_with_search() {
    let products = fallback_products();
    assert_eq!(project(&products, &criteria("", Some("jewelery"))).len(), 1);
    assert!(project(&products, &criteria("", Some("Jewelery"))).is_empty());
    assert!(project(&products, &criteria("jacket", Some("jewelery"))).is_empty());
    assert_eq!(
        project(&products, &criteria("slim", Some("men's clothing"))).len(),
        1
    );
}

#[test]
fn projection_is_idempotent() {
    let products = fallback_products();
    let c = criteria("men", Some("men's clothing"));
    let once = project(&products, &c);
    let twice = project(&once, &c);
    assert_eq!(once, twice);
    assert_eq!(once, project(&products, &c));
}

#[test]
fn matches_agrees_with_project() {
    let products = fallback_products();
    let c = criteria("pack", None);
    let expected: Vec<_> = products.iter().filter(|p| c.matches(p)).cloned().collect();
    assert_eq!(project(&products, &c), expected);
}

#[test]
fn distinct_categories_keep_first_occurrence_order() {
    assert_eq!(
        distinct_categories(&fallback_products()),
        vec!["men's clothing".to_string(), "jewelery".to_string()]
    );
    assert!(distinct_categories(&[]).is_empty());
}
