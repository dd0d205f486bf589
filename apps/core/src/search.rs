use crate::model::{lowercase_key, Catalog, Entry};

/// Hard cap on results returned to the presentation layer.
pub const MAX_RESULTS: usize = 10;

/// Scans the catalog in its stored (sorted) order and collects entries whose
/// search key contains the lowercased query as a substring, stopping at
/// `limit`. An empty query yields nothing. Result order is catalog order,
/// not relevance.
pub fn search(catalog: &Catalog, query: &str, limit: usize) -> Vec<Entry> {
    if limit == 0 || catalog.is_empty() {
        return Vec::new();
    }

    let needle = lowercase_key(query);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    for entry in catalog.entries() {
        if entry.search_key().contains(&needle) {
            results.push(entry.clone());
            if results.len() >= limit {
                break;
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::{search, MAX_RESULTS};
    use crate::model::{Catalog, Entry};

    #[test]
    fn empty_query_yields_nothing() {
        let catalog = Catalog::from_unsorted(vec![Entry::new("Notepad", "C:\\notepad.exe")]);
        assert!(search(&catalog, "", MAX_RESULTS).is_empty());
    }

    #[test]
    fn zero_limit_yields_nothing() {
        let catalog = Catalog::from_unsorted(vec![Entry::new("Notepad", "C:\\notepad.exe")]);
        assert!(search(&catalog, "note", 0).is_empty());
    }
}
