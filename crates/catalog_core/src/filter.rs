//! Derived views over the product list. Everything here is a pure function
//! of its inputs and never touches the source sequence.

use shared::domain::Product;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none() && self.category.is_none()
    }

    /// The lowercased term, or `None` when the input is blank.
    fn search_term(&self) -> Option<String> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        matches_term(product, self.search_term().as_deref())
            && matches_category(product, self.category.as_deref())
    }
}

fn matches_category(product: &Product, category: Option<&str>) -> bool {
    category.map_or(true, |category| product.category == category)
}

fn matches_term(product: &Product, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return true;
    };
    product.title.to_lowercase().contains(term)
        || product.description.to_lowercase().contains(term)
        || product.category.to_lowercase().contains(term)
}

pub fn project(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let term = criteria.search_term();
    products
        .iter()
        .filter(|product| {
            matches_term(product, term.as_deref())
                && matches_category(product, criteria.category.as_deref())
        })
        .cloned()
        .collect()
}

/// Distinct categories in order of first occurrence.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
