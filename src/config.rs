use std::path::PathBuf;

use collections::DEFAULT_CAPACITY;

use crate::{Error, Result};

/// Settings of a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Bucket count the table starts with
    pub initial_capacity: usize,
}

impl Config {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(input: P, output: Q) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            initial_capacity: DEFAULT_CAPACITY,
        }
    }

    /// Builds the config from the positional arguments, program name excluded.
    ///
    /// Exactly two are accepted: the input path, then the output path.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<PathBuf>,
    {
        let mut args: Vec<PathBuf> = args.into_iter().map(Into::into).collect();
        if args.len() != 2 {
            return Err(Error::Usage { got: args.len() });
        }

        let output = args.pop().ok_or(Error::Usage { got: 1 })?;
        let input = args.pop().ok_or(Error::Usage { got: 0 })?;
        Ok(Self::new(input, output))
    }

    pub fn with_initial_capacity(mut self, cap: usize) -> Self {
        self.initial_capacity = cap;
        self
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use crate::Error;

    #[test]
    fn two_args() {
        let c = Config::from_args(["in.txt", "out.txt"]).unwrap();
        assert_eq!(c.input.to_str(), Some("in.txt"));
        assert_eq!(c.output.to_str(), Some("out.txt"));
        assert_eq!(c.initial_capacity, 17);
    }

    #[test]
    fn wrong_arg_count() {
        for args in [vec![], vec!["in.txt"], vec!["a", "b", "c"]] {
            let n = args.len();
            match Config::from_args(args) {
                Err(Error::Usage { got }) => assert_eq!(got, n),
                other => panic!("expected usage error, got {other:?}"),
            }
        }
    }

    #[test]
    fn usage_message() {
        let e = Config::from_args(["only-one"]).unwrap_err();
        assert_eq!(e.to_string(), "Not enough arguments.");
    }
}
