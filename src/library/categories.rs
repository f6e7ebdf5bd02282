//! Filter categories for the gallery views.

use crate::domain::Categorized;

/// Synthetic category that selects everything
pub const ALL_CATEGORIES: &str = "All";

/// "All" followed by every distinct category, in first-seen order
pub fn categories<T: Categorized>(items: &[T]) -> Vec<String> {
    let mut cats = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        if !cats.iter().any(|c| c == item.category()) {
            cats.push(item.category().to_string());
        }
    }
    cats
}

/// Items in `category`; "All" returns every item
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], category: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| category == ALL_CATEGORIES || item.category() == category)
        .collect()
}
