use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read every line of the file, stripping `\n` and `\r\n` terminators.
    ///
    /// Fails on the first I/O or UTF-8 error; lines read before it are dropped.
    pub fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
        Self::open_buffered(path)?.lines().collect()
    }
}
