//! Symbol list loading and ordering.
//!
//! Symbols are opaque ticker strings. The input format is one symbol per line;
//! each line is trimmed on both sides and kept as-is otherwise. Duplicates are
//! never removed: a repeated line simply lands wherever its sorted position
//! places it.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::ShardError;

/// A ticker symbol. Compared bytewise.
pub type Symbol = String;

/// Options controlling how an input file is turned into a [`SymbolList`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Drop lines that are empty after trimming instead of keeping them as
    /// empty symbols.
    pub skip_blank_lines: bool,
}

/// An ordered sequence of symbols, loaded once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolList {
    symbols: Vec<Symbol>,
}

impl SymbolList {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Read one symbol per line from `reader`.
    ///
    /// Fails with the underlying I/O error on read failure or invalid UTF-8.
    pub fn from_reader<R: BufRead>(reader: R, opts: &LoadOptions) -> std::io::Result<Self> {
        let mut symbols = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let sym = line.trim();
            if sym.is_empty() && opts.skip_blank_lines {
                continue;
            }
            symbols.push(sym.to_string());
        }
        Ok(Self { symbols })
    }

    /// Open `path` and read it with [`SymbolList::from_reader`].
    pub fn load(path: &Path, opts: &LoadOptions) -> Result<Self, ShardError> {
        let file = File::open(path).map_err(|e| ShardError::file_access(path, e))?;
        Self::from_reader(BufReader::new(file), opts).map_err(|e| ShardError::file_access(path, e))
    }

    /// Sort ascending. Equal symbols have no meaningful order between them.
    pub fn sort(&mut self) {
        self.symbols.sort_unstable();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.symbols.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl<'a> FromIterator<&'a str> for SymbolList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    #[test]
    fn lines_are_trimmed() {
        let input = "  MSFT \nAAPL\t\r\nGOOG\n";
        let list = SymbolList::from_reader(Cursor::new(input), &LoadOptions::default()).unwrap();
        assert_eq!(list.as_slice(), ["MSFT", "AAPL", "GOOG"]);
    }

    #[test]
    fn blank_lines_kept_by_default() {
        let input = "MSFT\n\n   \nAAPL\n";
        let list = SymbolList::from_reader(Cursor::new(input), &LoadOptions::default()).unwrap();
        assert_eq!(list.as_slice(), ["MSFT", "", "", "AAPL"]);
    }

    #[test]
    fn blank_lines_skipped_on_request() {
        let input = "MSFT\n\n   \nAAPL\n";
        let opts = LoadOptions { skip_blank_lines: true };
        let list = SymbolList::from_reader(Cursor::new(input), &opts).unwrap();
        assert_eq!(list.as_slice(), ["MSFT", "AAPL"]);
    }

    #[test]
    fn duplicates_survive_sorting() {
        let mut list: SymbolList = ["IBM", "AAPL", "IBM", "AAPL"].into_iter().collect();
        list.sort();
        assert_eq!(list.as_slice(), ["AAPL", "AAPL", "IBM", "IBM"]);
    }

    #[test]
    fn sort_is_bytewise() {
        let mut list: SymbolList = ["aapl", "MSFT", "BRK.B", "BRK-A"].into_iter().collect();
        list.sort();
        assert_eq!(list.as_slice(), ["BRK-A", "BRK.B", "MSFT", "aapl"]);
    }

    #[test]
    fn get_past_end() {
        let list: SymbolList = ["A"].into_iter().collect();
        assert_eq!(list.get(0), Some("A"));
        assert_eq!(list.get(1), None);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "MSFT").unwrap();
        writeln!(file, "AAPL").unwrap();
        let list = SymbolList::load(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn missing_file_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("symbols_only.tsv");
        let err = SymbolList::load(&path, &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, ShardError::FileAccess { .. }), "{err:?}");
    }

    #[test]
    fn invalid_utf8_is_file_access_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"AAPL\n\xff\xfe\n").unwrap();
        let err = SymbolList::load(file.path(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, ShardError::FileAccess { .. }), "{err:?}");
    }
}
