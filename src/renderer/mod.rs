//! Entry renderer module
//!
//! Writes one delimiter/header/content block per collected file:
//!
//! ```text
//! ============================================================
//! FILE: lighting/csm.rs
//! ============================================================
//!
//! <contents>
//!
//! ```

use std::io::{self, Write};

use crate::models::FileRecord;

/// Width of the `=` delimiter lines
pub const DELIMITER_WIDTH: usize = 60;

/// Sequential entry writer over any output sink
pub struct EntryWriter<W: Write> {
    out: W,
    entries: usize,
}

impl<W: Write> EntryWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, entries: 0 }
    }

    /// Write one complete entry
    pub fn write_entry(&mut self, record: &FileRecord) -> io::Result<()> {
        let delimiter = "=".repeat(DELIMITER_WIDTH);

        writeln!(self.out, "{}", delimiter)?;
        writeln!(self.out, "FILE: {}", record.relative_path)?;
        writeln!(self.out, "{}", delimiter)?;
        writeln!(self.out)?;
        self.out.write_all(record.contents.as_bytes())?;
        self.out.write_all(b"\n\n")?;

        self.entries += 1;
        Ok(())
    }

    /// Number of entries written so far
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Flush and hand back the underlying sink
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
