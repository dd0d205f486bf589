/// One launchable item discovered by the index build.
///
/// The search key is the lowercase form of `name`, computed once at
/// construction; entries are immutable afterwards, so the two can never
/// drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: String,
    search_key: String,
}

impl Entry {
    pub fn new(name: &str, path: &str) -> Self {
        Self::from_owned(name.to_string(), path.to_string())
    }

    pub fn from_owned(name: String, path: String) -> Self {
        let search_key = lowercase_key(&name);
        Self {
            name,
            path,
            search_key,
        }
    }

    pub fn search_key(&self) -> &str {
        &self.search_key
    }
}

pub fn lowercase_key(input: &str) -> String {
    input.to_lowercase()
}

/// The deduplicated, sorted collection of all entries.
///
/// Unique by search key (case-insensitive name uniqueness), ascending by
/// search key. Read-only after construction; shared as `Arc<Catalog>`
/// snapshots by the index service.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Sorts by search key (stable, so source order breaks ties) and drops
    /// adjacent duplicates, keeping the first occurrence.
    pub fn from_unsorted(mut entries: Vec<Entry>) -> Self {
        entries.sort_by(|a, b| a.search_key.cmp(&b.search_key));
        entries.dedup_by(|current, kept| current.search_key == kept.search_key);
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
