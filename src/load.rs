//! Loading dictionaries and frequency tables from line-oriented files.
//!
//! ## Formats
//!
//! Word list, one entry per line:
//!
//! ```text
//! 研究
//! 研究生
//! 生命
//! ```
//!
//! Character frequencies, `<char> <count>` per line:
//!
//! ```text
//! 的 6538132
//! 是 1925123
//! ```
//!
//! Lines are trimmed of `\r`, `\n`, spaces and tabs. Blank dictionary lines
//! are skipped. Frequency lines without a space are skipped; only the first
//! character of the left field is used. A character listed twice keeps the
//! count from its last line.
//!
//! Both files must be UTF-8. A line that is not is reported as
//! [`Error::InvalidEncoding`] rather than silently dropped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::NonZeroU32;
use std::path::Path;

use tracing::{debug, info};

use crate::{Dictionary, Error, FrequencyTable, MmSeg, Result};

const TRIM: &[char] = &['\r', '\n', ' ', '\t'];

/// Feed each trimmed line of `reader` to `f` with its 1-based line number.
fn for_each_line<R, F>(mut reader: R, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &str) -> Result<()>,
{
    let mut buf = Vec::new();
    let mut line = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        line += 1;
        let text = std::str::from_utf8(&buf).map_err(|_| Error::InvalidEncoding { line })?;
        f(line, text.trim_matches(TRIM))?;
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::DictionaryUnavailable {
            path: path.to_path_buf(),
            source,
        })
}

/// Attach `path` to bare read errors so they surface as unavailability.
fn with_path<T>(result: Result<T>, path: &Path) -> Result<T> {
    result.map_err(|e| match e {
        Error::Io(source) => Error::DictionaryUnavailable {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

impl Dictionary {
    /// Read a word list, one word per line.
    ///
    /// ```rust
    /// use mmseg::Dictionary;
    ///
    /// let dict = Dictionary::from_reader("研究\r\n研究生\n\n生命\n".as_bytes()).unwrap();
    /// assert_eq!(dict.len(), 3);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEncoding`] for a non-UTF-8 line and
    /// [`Error::Io`] if the reader fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dict = Self::new();
        for_each_line(reader, |_, word| {
            dict.insert(word.chars());
            Ok(())
        })?;
        Ok(dict)
    }

    /// Read a word list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DictionaryUnavailable`] if the file cannot be opened
    /// or read, and [`Error::InvalidEncoding`] for a non-UTF-8 line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        with_path(Self::from_reader(open(path)?), path)
    }
}

impl FrequencyTable {
    /// Read `<char> <count>` lines.
    ///
    /// ```rust
    /// use mmseg::FrequencyTable;
    ///
    /// let freqs = FrequencyTable::from_reader("的 100\nnospace\n是 7\n".as_bytes()).unwrap();
    /// assert_eq!(freqs.len(), 2);
    /// assert_eq!(freqs.lookup('是'), Some(7));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFrequency`] when a count is not a positive
    /// integer, [`Error::InvalidEncoding`] for a non-UTF-8 line, and
    /// [`Error::Io`] if the reader fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = Self::new();
        for_each_line(reader, |line, text| {
            let Some((field, rest)) = text.split_once(' ') else {
                if !text.is_empty() {
                    debug!(line, "frequency line has no count, skipping");
                }
                return Ok(());
            };
            let Some(ch) = field.chars().next() else {
                return Ok(());
            };

            let value = rest.split_whitespace().next().unwrap_or_default();
            let count = value
                .parse::<NonZeroU32>()
                .map_err(|_| Error::InvalidFrequency {
                    line,
                    value: value.to_string(),
                })?;
            table.insert(ch, count);
            Ok(())
        })?;
        Ok(table)
    }

    /// Read a frequency table from a file.
    ///
    /// # Errors
    ///
    /// Same as [`FrequencyTable::from_reader`], with open and read failures
    /// reported as [`Error::DictionaryUnavailable`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        with_path(Self::from_reader(open(path)?), path)
    }
}

impl MmSeg {
    /// Build a segmenter from a word list and an optional frequency file.
    ///
    /// `freq_path` is a concrete `Option<&Path>` rather than a generic so that
    /// a bare `None` needs no type annotation. Pass an owned path with
    /// `Some(path.as_ref())` or `opt.as_deref()`.
    ///
    /// ```rust,no_run
    /// use std::path::PathBuf;
    /// use mmseg::MmSeg;
    ///
    /// let without = MmSeg::load("words.dic", None)?;
    /// let chars: Option<PathBuf> = Some("chars.dic".into());
    /// let with = MmSeg::load("words.dic", chars.as_deref())?;
    /// # Ok::<(), mmseg::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyDictionary`] if the word list yields no
    /// words, so callers never segment against a missing dictionary by
    /// accident. Any error from [`Dictionary::load`] or
    /// [`FrequencyTable::load`] is passed through.
    pub fn load(dict_path: impl AsRef<Path>, freq_path: Option<&Path>) -> Result<Self> {
        let dict_path = dict_path.as_ref();
        let dict = Dictionary::load(dict_path)?;
        if dict.is_empty() {
            return Err(Error::EmptyDictionary {
                path: dict_path.to_path_buf(),
            });
        }

        let freqs = match freq_path {
            Some(path) => FrequencyTable::load(path)?,
            None => FrequencyTable::new(),
        };

        info!(
            words = dict.len(),
            branches = dict.root_branches(),
            frequencies = freqs.len(),
            "loaded dictionary from {}",
            dict_path.display()
        );

        Ok(Self::new(dict, freqs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_trims_and_skips_blank() {
        let dict = Dictionary::from_reader(" 研究 \t\r\n\n\r\n生命\n".as_bytes()).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains(&['研', '究']));
        assert!(dict.contains(&['生', '命']));
    }

    #[test]
    fn test_dictionary_without_trailing_newline() {
        let dict = Dictionary::from_reader("研究\n命运".as_bytes()).unwrap();
        assert!(dict.contains(&['命', '运']));
    }

    #[test]
    fn test_dictionary_rejects_invalid_utf8() {
        let bytes: &[u8] = b"ok\n\xff\xfe\n";
        let err = Dictionary::from_reader(bytes).unwrap_err();
        assert!(matches!(err, Error::InvalidEncoding { line: 2 }));
    }

    #[test]
    fn test_frequency_first_char_only() {
        let freqs = FrequencyTable::from_reader("的确 42\n".as_bytes()).unwrap();
        assert_eq!(freqs.lookup('的'), Some(42));
        assert_eq!(freqs.lookup('确'), None);
    }

    #[test]
    fn test_frequency_last_line_wins() {
        let freqs = FrequencyTable::from_reader("的 1\n的 2\n".as_bytes()).unwrap();
        assert_eq!(freqs.lookup('的'), Some(2));
    }

    #[test]
    fn test_frequency_skips_lines_without_space() {
        let freqs = FrequencyTable::from_reader("的\n\n是 3\n".as_bytes()).unwrap();
        assert_eq!(freqs.len(), 1);
    }

    #[test]
    fn test_frequency_rejects_bad_counts() {
        for input in ["的 abc\n", "的 0\n", "的 -5\n", "的 12x\n"] {
            let err = FrequencyTable::from_reader(input.as_bytes()).unwrap_err();
            assert!(
                matches!(err, Error::InvalidFrequency { line: 1, .. }),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dictionary::load("/nonexistent/mmseg/words.dic").unwrap_err();
        assert!(matches!(err, Error::DictionaryUnavailable { .. }));
    }
}
