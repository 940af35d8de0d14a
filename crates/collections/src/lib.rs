//! Word-frequency hash table with separate chaining.

mod macros;

pub mod hashmap;

pub use hashmap::{DEFAULT_CAPACITY, Entry, HashTable, Stats};
