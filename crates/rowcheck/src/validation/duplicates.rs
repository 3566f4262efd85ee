//! Table-wide duplicate index over normalized identity numbers.

use indexmap::IndexMap;

/// Occurrence counts of each identity number, in first-seen order.
///
/// Built once over the whole table before any row is checked; every row
/// whose value occurs two or more times is a duplicate, including the
/// first occurrence.
#[derive(Debug, Clone, Default)]
pub struct DuplicateIndex {
    counts: IndexMap<String, usize>,
}

impl DuplicateIndex {
    /// Count every value.
    pub fn build<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for value in values {
            *counts.entry(value.to_string()).or_default() += 1;
        }
        Self { counts }
    }

    /// Whether the value occurs in more than one row.
    pub fn is_duplicate(&self, value: &str) -> bool {
        self.counts.get(value).is_some_and(|&count| count > 1)
    }

    /// Values occurring more than once, with their counts.
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(value, count)| (value.as_str(), *count))
    }
}
