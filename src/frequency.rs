use std::collections::BTreeMap;

/// Occurrence counts keyed by value, built in a single pass.
///
/// Only seen keys have entries, every count is at least 1, and the counts
/// always sum to the number of recorded values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K: Ord> {
    counts: BTreeMap<K, usize>,
    total: usize,
}

impl<K: Ord> FrequencyTable<K> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }

    pub fn record(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Count for `key`, or 0 if it was never recorded.
    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Highest count in the table, 0 when empty.
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of values recorded, i.e. the sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }
}

impl<K: Ord> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.record(key);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_total() {
        let table: FrequencyTable<&str> = ["b", "a", "b", "c", "b"].into_iter().collect();
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 5);
        assert_eq!(table.iter().map(|(_, c)| c).sum::<usize>(), table.total());
        assert_eq!(table.count(&"b"), 3);
        assert_eq!(table.count(&"z"), 0);
        assert_eq!(table.max_count(), 3);
    }

    #[test]
    fn test_iteration_is_sorted() {
        let table: FrequencyTable<String> = ["pear", "apple", "fig"]
            .into_iter()
            .map(str::to_owned)
            .collect();
        let keys: Vec<&str> = table.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::<u8>::default();
        assert!(table.is_empty());
        assert_eq!(table.max_count(), 0);
        assert_eq!(table.total(), 0);
    }
}
