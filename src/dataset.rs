//! Dataset loading and tokenization
//!
//! Input is newline-separated records: a tab-delimited identifier followed
//! by one or more fields, each field space-delimited into tokens. The field
//! count is fixed by the first accepted record; lines that disagree are
//! warned about and dropped.

use anyhow::Result;
use std::io::BufRead;

/// One space-tokenized field of a record.
pub type Field = Vec<String>;

/// A record: identifier plus a fixed number of tokenized fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: String,
    pub fields: Vec<Field>,
}

/// An in-memory dataset, read-only after load.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<Record>,
    field_count: usize,
}

impl Dataset {
    /// Load records from a reader, one per line.
    ///
    /// Blank lines are skipped. Lines with fewer than two tab chunks, or
    /// whose field count disagrees with the count established by the first
    /// accepted line, get a warning on stderr and are excluded. Read errors
    /// are fatal.
    pub fn load<R: BufRead>(reader: R) -> Result<Dataset> {
        let mut records = Vec::new();
        let mut field_count = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let line_num = idx + 1;
            let chunks = split_on(&line, '\t');
            if chunks.len() <= 1 {
                eprintln!("pairdist: warning: line {}: malformed line: {}", line_num, line);
                continue;
            }

            let num_fields = chunks.len() - 1;
            if field_count == 0 {
                field_count = num_fields;
            } else if num_fields != field_count {
                eprintln!(
                    "pairdist: warning: line {}: expected {} fields, found {}: {}",
                    line_num, field_count, num_fields, line
                );
                continue;
            }

            records.push(Record {
                id: chunks[0].to_string(),
                fields: chunks[1..]
                    .iter()
                    .map(|chunk| {
                        split_on(chunk, ' ')
                            .into_iter()
                            .map(str::to_string)
                            .collect()
                    })
                    .collect(),
            });
        }

        Ok(Dataset {
            records,
            field_count,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of fields every record carries.
    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// Number of unordered record pairs: n(n-1)/2.
    pub fn pair_count(&self) -> u64 {
        let n = self.records.len() as u64;
        n * n.saturating_sub(1) / 2
    }
}

/// Split on a single-character delimiter.
///
/// An empty input yields no segments; interior empty segments are kept
/// (`"a  b"` splits into three on a space); a single trailing delimiter
/// produces no trailing empty segment.
pub fn split_on(input: &str, delim: char) -> Vec<&str> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut segments: Vec<&str> = input.split(delim).collect();
    if segments.last() == Some(&"") {
        segments.pop();
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load_str(input: &str) -> Dataset {
        Dataset::load(Cursor::new(input)).unwrap()
    }

    #[test]
    fn splits_keep_interior_empties_drop_trailing() {
        assert_eq!(split_on("a b", ' '), vec!["a", "b"]);
        assert_eq!(split_on("a  b", ' '), vec!["a", "", "b"]);
        assert_eq!(split_on("a ", ' '), vec!["a"]);
        assert_eq!(split_on(" a", ' '), vec!["", "a"]);
        assert_eq!(split_on(" ", ' '), vec![""]);
        assert!(split_on("", ' ').is_empty());
    }

    #[test]
    fn loads_basic_records() {
        let ds = load_str("r1\thello world\tfoo\nr2\tbye world\tbar\n");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.field_count(), 2);
        assert_eq!(ds.records()[0].id, "r1");
        assert_eq!(ds.records()[0].fields[0], vec!["hello", "world"]);
        assert_eq!(ds.records()[1].fields[1], vec!["bar"]);
    }

    #[test]
    fn skips_blank_lines() {
        let ds = load_str("\nr1\ta\n\n\nr2\tb\n");
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn rejects_lines_without_fields() {
        let ds = load_str("just-an-id\nr1\ta b\nr2\tc\n");
        assert_eq!(ds.len(), 2);
        assert!(ds.records().iter().all(|r| r.id != "just-an-id"));
    }

    #[test]
    fn rejects_field_count_mismatch() {
        let ds = load_str("r1\ta\tb\nr2\tc\nr3\td\te\n");
        assert_eq!(ds.field_count(), 2);
        assert_eq!(ds.len(), 2);
        let ids: Vec<&str> = ds.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);
    }

    #[test]
    fn first_accepted_line_fixes_field_count() {
        // The malformed first line must not establish a field count
        let ds = load_str("broken\nr1\ta\tb\tc\nr2\td\n");
        assert_eq!(ds.field_count(), 3);
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn empty_field_has_no_tokens() {
        let ds = load_str("r1\t\ta b\n");
        assert_eq!(ds.records()[0].fields[0], Vec::<String>::new());
        assert_eq!(ds.records()[0].fields[1], vec!["a", "b"]);
    }

    #[test]
    fn pair_counts() {
        assert_eq!(load_str("").pair_count(), 0);
        assert_eq!(load_str("r1\ta\n").pair_count(), 0);
        assert_eq!(load_str("r1\ta\nr2\tb\n").pair_count(), 1);
        assert_eq!(load_str("r1\ta\nr2\tb\nr3\tc\nr4\td\n").pair_count(), 6);
    }
}
