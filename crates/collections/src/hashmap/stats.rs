use std::fmt;

/// Summary figures of a [`HashTable`](super::HashTable).
///
/// The `Display` impl renders the three line report printed after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Sum of every entry's count, i.e. the number of occurrences inserted
    pub total_words: u64,
    /// Number of buckets
    pub table_size: usize,
    /// Entries across all chains, integer-divided by the number of buckets
    pub average_chain_len: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total number of words -> {}\nHashTable size -> {}\nAverage length of collision lists -> {}",
            self.total_words, self.table_size, self.average_chain_len
        )
    }
}
