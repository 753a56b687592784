use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::Path;

use crate::differ::DiffResult;

/// Write the human-readable comparison report for a scan of `root`.
pub fn write_report<W: Write>(out: &mut W, root: &Path, result: &DiffResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Scanning directory: {}", root.display())?;
    writeln!(out)?;
    writeln!(out, "Comparison Results:")?;

    write_section(out, "New files detected:", &result.added)?;
    write_section(out, "Removed files:", &result.removed)?;
    write_section(out, "Modified files:", &result.changed)?;

    if result.is_empty() {
        writeln!(out, "No changes detected. All files are intact.")?;
    }

    Ok(())
}

fn write_section<W: Write>(out: &mut W, title: &str, paths: &BTreeSet<String>) -> io::Result<()> {
    if paths.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", title)?;
    for path in paths {
        writeln!(out, "   - {}", path)?;
    }
    Ok(())
}
