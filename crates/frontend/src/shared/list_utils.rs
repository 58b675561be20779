//! Client-side search over in-memory lists

/// Types the list search can match against
pub trait Searchable {
    /// Values of the fields a search term is matched against
    fn search_fields(&self) -> Vec<String>;

    /// Case-insensitive substring match on any search field.
    /// `needle` must already be lowercase.
    fn matches_filter(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|value| value.to_lowercase().contains(needle))
    }
}

/// Filters a list by a search term
///
/// No minimum length: every keystroke re-filters the full list. The term is
/// matched as typed, spaces included; only an empty term returns the list
/// unchanged, in its original order.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    let needle = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&needle))
        .cloned()
        .collect()
}
