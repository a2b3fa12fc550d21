//! File helpers for the layout checks.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Result of trying to count lines in a file that may not exist.
#[derive(Debug)]
pub enum LineCount {
    Counted(usize),
    Missing,
    Unreadable(io::Error),
}

impl LineCount {
    /// Count used for threshold comparison; absent or unreadable files count as 0.
    pub fn lines_or_zero(&self) -> usize {
        match self {
            LineCount::Counted(lines) => *lines,
            LineCount::Missing | LineCount::Unreadable(_) => 0,
        }
    }
}

/// Count newline bytes in `path`, like `wc -l`.
///
/// A trailing line without `\n` is not counted and content is not required to
/// be UTF-8.
pub fn count_lines(path: &Path) -> LineCount {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return LineCount::Missing,
        Err(err) => return LineCount::Unreadable(err),
    };

    match count_newlines(BufReader::new(file)) {
        Ok(lines) => LineCount::Counted(lines),
        Err(err) => LineCount::Unreadable(err),
    }
}

fn count_newlines(mut reader: impl BufRead) -> io::Result<usize> {
    let mut lines = 0usize;
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if chunk.is_empty() {
            return Ok(lines);
        }
        lines += chunk.iter().filter(|byte| **byte == b'\n').count();
        let consumed = chunk.len();
        reader.consume(consumed);
    }
}
