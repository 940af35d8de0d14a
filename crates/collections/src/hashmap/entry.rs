use std::fmt;

/// One word and the number of times it has been seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub(crate) key: String,
    pub(crate) count: u64,
}

impl Entry {
    /// Creates an entry with a count of zero
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self::with_count(key, 0)
    }

    pub fn with_count<S: Into<String>>(key: S, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Records one more occurrence.
    ///
    /// # Note
    ///
    /// There is no overflow check, a `u64` will not wrap on any real input
    pub fn increment(&mut self) {
        self.count += 1;
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}: {})", self.key, self.count)
    }
}

#[cfg(test)]
mod test {
    use super::Entry;
    use crate::entry;

    #[test]
    fn new_starts_at_zero() {
        let e = Entry::new("word");
        assert_eq!(e.key(), "word");
        assert_eq!(e.count(), 0);
    }

    #[test]
    fn increment() {
        let mut e = entry!("word", 1);
        e.increment();
        e.increment();
        assert_eq!(e.count(), 3);
        assert_eq!(e, entry!("word", 3));
    }

    #[test]
    fn display() {
        assert_eq!(entry!("the", 3).to_string(), "(the: 3)");
        assert_eq!(entry!("fox").to_string(), "(fox: 0)");
    }
}
