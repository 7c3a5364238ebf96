use crate::error::Result;
use crate::options::ParseOptions;
use crate::table::Table;
use std::fs;
use std::io::Read;
use std::path::Path;

impl Table {
    /// Read a whole file into memory and parse it
    pub fn from_path<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading table from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::parse_with_options(&text, options)
    }

    /// Read a source to its end and parse the buffered text
    pub fn from_reader<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse_with_options(&text, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Name\tValue\nA\t1\nB\t2.5\n").unwrap();

        let table = Table::from_path(file.path(), ParseOptions::default()).unwrap();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.value_by_name::<f64>("B", "Value").unwrap(), 2.5);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Table::from_path(dir.path().join("missing.csv"), ParseOptions::default());
        assert!(matches!(result, Err(TableError::Io(_))));
    }

    #[test]
    fn test_from_reader() {
        let table = Table::from_reader("a,b\nx,1".as_bytes(), ParseOptions::default()).unwrap();
        assert_eq!(table.value::<i64>(0, 1).unwrap(), 1);
    }

    #[test]
    fn test_from_reader_invalid_utf8() {
        let bytes: &[u8] = &[b'a', b',', 0xff, b'\n'];
        assert!(matches!(
            Table::from_reader(bytes, ParseOptions::default()),
            Err(TableError::Io(_))
        ));
    }

    #[test]
    fn test_from_reader_parse_failure() {
        assert!(matches!(
            Table::from_reader("a;b\n".as_bytes(), ParseOptions::default()),
            Err(TableError::Parse(_))
        ));
    }
}
