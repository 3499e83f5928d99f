//! Activity record writer.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes each record's `Display` form on its own line.
pub fn write_records<W: Write, T: Display>(out: &mut W, records: &[T]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{record}")?;
    }
    Ok(())
}

/// Writes `records` to `path`, creating or truncating the file.
pub fn write_activity_records<T: Display>(path: &Path, records: &[T]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_records(&mut out, records)?;
    out.flush()
}
