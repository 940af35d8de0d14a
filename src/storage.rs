use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use collections::HashTable;
use log::{debug, trace};

use crate::{Error, Result, tokenizer};

/// Reads `path` line by line, inserting every word into `table`
pub fn load<P: AsRef<Path>>(table: &mut HashTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let input_err = |source| Error::InputUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(input_err)?;
    let words = load_from(table, BufReader::new(file)).map_err(input_err)?;
    debug!("read {} words from {}", words, path.display());
    Ok(())
}

/// Same as [`load`] over any buffered reader, returning the number of
/// words inserted
pub fn load_from<R: BufRead>(table: &mut HashTable, mut reader: R) -> io::Result<usize> {
    let mut line = Vec::new();
    let mut words = 0;
    let mut lineno = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        lineno += 1;
        let n = tokenizer::feed(table, &line);
        trace!(target: "load", "line {lineno}: {n} words");
        words += n;
    }

    Ok(words)
}

/// Writes the table's dump to `path`, replacing any previous content
pub fn save<P: AsRef<Path>>(table: &HashTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let output_err = |source| Error::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(output_err)?;
    save_to(table, BufWriter::new(file)).map_err(output_err)?;
    debug!("wrote {} buckets to {}", table.capacity(), path.display());
    Ok(())
}

/// Writes the table's dump verbatim to `writer` and flushes it
pub fn save_to<W: Write>(table: &HashTable, mut writer: W) -> io::Result<()> {
    write!(writer, "{table}")?;
    writer.flush()
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::{load_from, save_to};
    use collections::HashTable;

    #[test]
    fn load_from_reader() {
        let mut t = HashTable::new();
        let text = "The quick brown fox\njumps over the lazy dog.\r\n\nTHE END";

        let n = load_from(&mut t, Cursor::new(text)).unwrap();
        assert_eq!(n, 11);
        assert_eq!(t.count("the"), 3);
        assert_eq!(t.count("dog"), 1);
        assert_eq!(t.stats().total_words, 11);
    }

    #[test]
    fn save_writes_dump_verbatim() {
        let mut t = HashTable::new();
        t.extend(["the", "quick", "the", "fox", "the"]);

        let mut out = Vec::new();
        save_to(&t, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), t.dump());
    }
}
