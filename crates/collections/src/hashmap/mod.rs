mod entry;
mod hash_table;
mod stats;

pub use entry::Entry;
pub use hash_table::{DEFAULT_CAPACITY, HashTable, Iter, bucket_index, hash};
pub use stats::Stats;
