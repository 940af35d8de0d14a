use std::{fmt, iter::Flatten, slice};

use log::debug;

use super::{Entry, Stats};

/// Bucket count of a table created with [`HashTable::new`]
pub const DEFAULT_CAPACITY: usize = 17;

/// Separate chaining hash table counting word occurrences.
///
/// Every entry lives in bucket `hash(key) mod capacity`. The table grows
/// (doubling its bucket count) as soon as a single chain holds more
/// entries than there are buckets.
#[derive(Debug, Clone)]
pub struct HashTable {
    pub(crate) buckets: Vec<Vec<Entry>>,
    pub(crate) items: usize,
    rehashes: usize,
}

#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: Flatten<slice::Iter<'a, Vec<Entry>>>,
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HashTable {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new `HashTable` with `cap` many buckets
    ///
    /// # Note
    ///
    /// A table always has at least one bucket, `cap == 0` is treated as 1.
    /// Chains are empty `Vec`s which do not allocate until first used.
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            buckets: (0..cap).map(|_| Vec::new()).collect(),
            items: 0,
            rehashes: 0,
        }
    }

    /// Returns the number of distinct keys
    pub fn len(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// How many times this table has doubled since it was created
    pub fn rehash_count(&self) -> usize {
        self.rehashes
    }

    /// Records one occurrence of `key`.
    ///
    /// A key seen for the first time is stored with `frequency` as its count,
    /// a key already present has its count bumped by one and `frequency` is
    /// ignored. May rebuild the whole table afterwards, see [`Self::needs_rehash`].
    pub fn insert(&mut self, key: &str, frequency: u64) {
        match self.locate(key) {
            (i, Some(pos)) => self.buckets[i][pos].increment(),
            (i, None) => self.push(i, Entry::with_count(key, frequency)),
        }

        if self.needs_rehash() {
            self.rehash();
        }
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.buckets[self.idx(key)].iter().find(|e| e.key == key)
    }

    /// Count recorded for `key`, zero if it was never inserted
    pub fn count(&self, key: &str) -> u64 {
        self.get(key).map_or(0, Entry::count)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Length of the chain in bucket `index`
    ///
    /// # Panics
    ///
    /// If `index >= self.capacity()`
    pub fn chain_len(&self, index: usize) -> usize {
        self.buckets[index].len()
    }

    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// True iff some chain is strictly longer than the bucket count.
    ///
    /// # Note
    ///
    /// This compares a single chain against the whole table's capacity,
    /// it is not a `len / capacity` load factor. One long chain is enough
    /// to grow the table even if every other bucket is empty.
    pub fn needs_rehash(&self) -> bool {
        let cap = self.capacity();
        self.buckets.iter().any(|b| b.len() > cap)
    }

    /// Occurrence total, bucket count and average chain length
    pub fn stats(&self) -> Stats {
        let (total_words, chained) = self
            .buckets
            .iter()
            .fold((0u64, 0usize), |(words, chained), bucket| {
                let words = words + bucket.iter().map(Entry::count).sum::<u64>();
                (words, chained + bucket.len())
            });

        Stats {
            total_words,
            table_size: self.capacity(),
            average_chain_len: chained / self.capacity(),
        }
    }

    /// Renders every bucket in order, one line per bucket.
    ///
    /// Shorthand for `self.to_string()`
    pub fn dump(&self) -> String {
        self.to_string()
    }

    // [adapters]

    /// Entries in bucket order, then chain order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.buckets.iter().flatten(),
        }
    }

    // [private]

    fn idx(&self, key: &str) -> usize {
        bucket_index(hash(key), self.capacity())
    }

    /// Bucket of `key`, and its position in that chain if present
    fn locate(&self, key: &str) -> (usize, Option<usize>) {
        let i = self.idx(key);
        let pos = self.buckets[i].iter().position(|e| e.key == key);
        (i, pos)
    }

    fn push(&mut self, i: usize, entry: Entry) {
        self.buckets[i].push(entry);
        self.items += 1;
    }

    /// Same as [`Self::insert`] but moves an existing entry in,
    /// keeping its accumulated count as the initial frequency
    fn insert_entry(&mut self, entry: Entry) {
        match self.locate(&entry.key) {
            (i, Some(pos)) => self.buckets[i][pos].increment(),
            (i, None) => self.push(i, entry),
        }

        if self.needs_rehash() {
            self.rehash();
        }
    }

    /// Rebuilds the table with twice the buckets.
    ///
    /// Entries are moved into the new table through the regular insert
    /// path, so the new table may itself grow while being filled. The old
    /// buckets are dropped only once every entry has been placed.
    fn rehash(&mut self) {
        let old_cap = self.capacity();
        let mut next = HashTable::with_capacity(old_cap * 2);

        for entry in self.buckets.drain(..).flatten() {
            next.insert_entry(entry);
        }
        next.rehashes += self.rehashes + 1;

        debug!(
            target: "rehash",
            "grew table from {} to {} buckets ({} entries, longest chain {})",
            old_cap,
            next.capacity(),
            next.len(),
            next.longest_chain()
        );

        *self = next;
    }
}

/// Deterministic 32-bit string hash: `h = 31 * h + c` over the UTF-16 code
/// units of `key`, wrapping on overflow. The result is frequently negative.
pub fn hash(key: &str) -> i32 {
    key.encode_utf16()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(i32::from(c)))
}

/// Maps a raw hash into `0..capacity`, negative hashes included
///
/// # Panics
///
/// If `capacity == 0`
pub fn bucket_index(hash: i32, capacity: usize) -> usize {
    i64::from(hash).rem_euclid(capacity as i64) as usize
}

impl fmt::Display for HashTable {
    /// Each bucket's entries back to back, then a newline, for every
    /// bucket including the empty ones
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in &self.buckets {
            for entry in bucket {
                write!(f, "{entry}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a> IntoIterator for &'a HashTable {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> Extend<S> for HashTable {
    /// Inserts every item as one occurrence
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key.as_ref(), 1);
        }
    }
}
