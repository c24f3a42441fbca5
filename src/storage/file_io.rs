//! File I/O utilities for line-oriented ledger files
//!
//! Records are comma-separated with quoting only where a field needs it, so
//! plain records stay byte-identical to the legacy `description,amount`
//! lines.

use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use csv::{ReaderBuilder, StringRecordsIntoIter, Terminator, WriterBuilder};

use crate::error::ExpenseError;

/// Append one record to a file, creating the file and its directory if needed
///
/// The record is flushed before returning. The file handle is dropped on
/// every exit path.
pub fn append_record<P: AsRef<Path>>(path: P, fields: &[&str]) -> Result<(), ExpenseError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ExpenseError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    writer
        .write_record(fields)
        .map_err(|e| ExpenseError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    writer
        .flush()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Open a file for record-by-record reading
///
/// Returns `Ok(None)` if the file doesn't exist. Records may have any number
/// of fields; callers decide what is well-formed.
pub fn read_records<P: AsRef<Path>>(
    path: P,
) -> Result<Option<StringRecordsIntoIter<File>>, ExpenseError> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ExpenseError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    Ok(Some(reader.into_records()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        assert!(read_records(&path).unwrap().is_none());
    }

    #[test]
    fn test_plain_record_has_no_quotes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plain.txt");

        append_record(&path, &["Coffee", "3.50"]).unwrap();
        append_record(&path, &["Tea", "2.00"]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Coffee,3.50\nTea,2.00\n");
    }

    #[test]
    fn test_field_with_delimiter_is_quoted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quoted.txt");

        append_record(&path, &["Cafe, bar", "4.00"]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "\"Cafe, bar\",4.00\n");

        let records: Vec<_> = read_records(&path)
            .unwrap()
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "Cafe, bar");
        assert_eq!(&records[0][1], "4.00");
    }

    #[test]
    fn test_append_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("log.txt");

        append_record(&path, &["x", "1.00"]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_append_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = append_record(blocker.join("log.txt"), &["x", "1.00"]).unwrap_err();
        assert!(matches!(err, ExpenseError::Io(_)));
    }

    #[test]
    fn test_ragged_records_are_readable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ragged.txt");
        fs::write(&path, "a,1\nb\nc,2,3\n").unwrap();

        let lengths: Vec<usize> = read_records(&path)
            .unwrap()
            .unwrap()
            .map(|r| r.unwrap().len())
            .collect();
        assert_eq!(lengths, vec![2, 1, 3]);
    }
}
