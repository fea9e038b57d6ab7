//! Text shown around the product grid.

use crate::{filter::FilterCriteria, manager::LoadStatus, state::CatalogState};

/// Capitalizes the first letter of each space-separated word.
pub fn category_label(category: &str) -> String {
    category
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn summary_line(state: &CatalogState, status: LoadStatus) -> String {
    let mut line = if status == LoadStatus::Loading {
        "Loading...".to_string()
    } else {
        format!(
            "Showing {} of {} products",
            state.filtered().len(),
            state.products().len()
        )
    };
    line.push_str(&criteria_badges(state.criteria()));
    line
}

fn criteria_badges(criteria: &FilterCriteria) -> String {
    let mut badges = String::new();
    if let Some(category) = &criteria.category {
        badges.push_str(&format!("  [Category: {category}]"));
    }
    if !criteria.search.is_empty() {
        badges.push_str(&format!("  [Search: \"{}\"]", criteria.search));
    }
    badges
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
