use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::collectors::SourceCollector;
use crate::config;
use crate::error::{GatherError, Result};
use crate::models::{FileRecord, SourceFile};
use crate::renderer::EntryWriter;

/// Collect matching source files into the output file
pub fn run(
    config_path: Option<PathBuf>,
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    suffixes: Vec<String>,
    dry_run: bool,
    no_sort: bool,
) -> Result<()> {
    let mut config = config::load_or_default(config_path.as_deref())?;

    // Command-line overrides
    if let Some(source) = source {
        config.source_dir = source;
    }
    if let Some(output) = output {
        config.output_file = output;
    }
    if !suffixes.is_empty() {
        config.suffixes = suffixes;
    }
    if no_sort {
        config.sort_entries = false;
    }

    debug!(?config, "effective configuration");

    // Discovery validates the source directory before the output is touched
    let files = SourceCollector::new(&config).collect()?;
    info!(
        "Found {} matching files under {}",
        files.len(),
        config.source_dir.display()
    );

    if dry_run {
        let stdout = io::stdout();
        gather(&files, stdout.lock(), Path::new("<stdout>"))?;
        return Ok(());
    }

    let output_file = File::create(&config.output_file).map_err(|e| {
        GatherError::Output(format!(
            "Cannot create '{}': {}",
            config.output_file.display(),
            e
        ))
    })?;

    let count = gather(&files, BufWriter::new(output_file), &config.output_file)?;

    println!(
        "Done! Collected {} files into {}",
        count,
        config.output_file.display()
    );

    Ok(())
}

/// Read each file in order and append its entry to `out`.
///
/// Stops at the first failure; whatever was written so far stays in `out`.
pub fn gather<W: Write>(files: &[SourceFile], out: W, target: &Path) -> Result<usize> {
    let mut writer = EntryWriter::new(out);

    for file in files {
        let record = FileRecord::read(file)?;
        writer
            .write_entry(&record)
            .map_err(|e| write_error(target, e))?;
        debug!(path = %record.relative_path, bytes = record.contents.len(), "written");
    }

    let count = writer.entries();
    writer.finish().map_err(|e| write_error(target, e))?;

    Ok(count)
}

fn write_error(target: &Path, e: io::Error) -> GatherError {
    GatherError::Output(format!("Cannot write '{}': {}", target.display(), e))
}
