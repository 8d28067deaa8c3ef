use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
};

use line_filter_shared_kernel::WriteMode;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Open `path` for writing, creating it when missing. Existing contents are
    /// discarded or kept depending on `mode`. The parent directory must exist.
    pub fn open<P: AsRef<Path>>(path: P, mode: WriteMode) -> std::io::Result<BufWriter<File>> {
        let append = mode.is_append();
        OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path.as_ref())
            .map(BufWriter::new)
    }

    /// Write each line followed by `\n`, then flush.
    pub fn write_lines<W: Write>(writer: &mut W, lines: &[String]) -> std::io::Result<()> {
        for line in lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }
}
