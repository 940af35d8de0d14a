use collections::HashTable;

/// Lowercased runs of ASCII letters in `line`.
///
/// Every byte outside `A-Z`/`a-z` separates words and empty runs are skipped,
/// so `"Don't stop!"` yields `don`, `t`, `stop`.
pub fn tokens(line: &[u8]) -> impl Iterator<Item = String> + '_ {
    line.split(|b| !b.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
        .map(|w| w.iter().map(|b| char::from(b.to_ascii_lowercase())).collect())
}

/// Inserts every word of `line` into `table` as one occurrence, returning
/// how many words were found
pub fn feed(table: &mut HashTable, line: &[u8]) -> usize {
    let mut n = 0;
    for word in tokens(line) {
        table.insert(&word, 1);
        n += 1;
    }
    n
}

#[cfg(test)]
mod test {
    use super::{feed, tokens};
    use collections::HashTable;

    fn collect(line: &str) -> Vec<String> {
        tokens(line.as_bytes()).collect()
    }

    #[test]
    fn splits_on_non_letters() {
        assert_eq!(collect("Don't stop!"), ["don", "t", "stop"]);
        assert_eq!(collect("a1b2c3"), ["a", "b", "c"]);
        assert_eq!(collect("  --  "), Vec::<String>::new());
        assert_eq!(collect(""), Vec::<String>::new());
    }

    #[test]
    fn lowercases() {
        assert_eq!(collect("The QUICK Fox"), ["the", "quick", "fox"]);
    }

    #[test]
    fn non_ascii_separates() {
        assert_eq!(collect("café au lait"), ["caf", "au", "lait"]);
        assert_eq!(tokens(b"ab\xffcd").collect::<Vec<_>>(), ["ab", "cd"]);
    }

    #[test]
    fn feed_counts_occurrences() {
        let mut t = HashTable::new();
        let n = feed(&mut t, b"The quick, the fox; THE end.");

        assert_eq!(n, 6);
        assert_eq!(t.count("the"), 3);
        assert_eq!(t.count("quick"), 1);
        assert_eq!(t.count("end"), 1);
        assert_eq!(t.stats().total_words, 6);
    }
}
