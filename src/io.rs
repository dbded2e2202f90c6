use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

pub type LineIter = Box<dyn Iterator<Item = io::Result<String>> + Send + 'static>;

/// Iterate lines of a JSON-lines file using a buffered reader. A trailing
/// '\r' is stripped so files written on Windows read the same.
pub fn iter_json_lines<P: AsRef<Path>>(path: P) -> Result<LineIter> {
    let file = File::open(&path).with_context(|| format!("open {}", path.as_ref().display()))?;
    Ok(lines_from_reader(BufReader::new(file)))
}

/// Same as [`iter_json_lines`] over any buffered reader.
pub fn lines_from_reader<R: BufRead + Send + 'static>(reader: R) -> LineIter {
    Box::new(reader.lines().map(|line| {
        line.map(|mut s| {
            if s.ends_with('\r') {
                s.pop();
            }
            s
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_carriage_returns() {
        let lines: Vec<String> = lines_from_reader(Cursor::new(b"{}\r\n{\"a\":1}\n".to_vec()))
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, vec!["{}", "{\"a\":1}"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = iter_json_lines(&path).err().unwrap();
        assert!(err.to_string().contains("nope.json"));
    }
}
