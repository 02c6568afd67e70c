use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Reads a file and decodes its bytes as ISO-8859-1. Every byte value maps
/// to the code point of the same value, so the decode itself never fails;
/// only the read can.
pub fn read_latin1(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    info!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes.iter().map(|&b| char::from(b)).collect())
}

/// Applies the table as a strict ordered sequence of full-content scans:
/// one pass per entry, every non-overlapping occurrence replaced, each pass
/// seeing the output of the previous one. Not equivalent to a simultaneous
/// multi-pattern replace when one entry's output contains another's key.
pub fn apply_replacements(content: &str, table: &[(&str, &str)]) -> String {
    let mut content = content.to_string();
    for (corrupted, correct) in table {
        let hits = content.matches(corrupted).count();
        if hits > 0 {
            debug!("replacing {} occurrence(s) of {:?}", hits, corrupted);
            content = content.replace(corrupted, correct);
        }
    }
    content
}

/// Repairs the file in place: fully read and decoded as Latin-1, substituted
/// in memory, then written back UTF-8-encoded, truncating the old content.
/// The write only starts once the whole replacement pass has finished, so a
/// read failure never leaves a partially overwritten file. No backup is made.
pub fn repair_file(path: &Path, table: &[(&str, &str)]) -> Result<()> {
    let content = read_latin1(path)?;

    let fixed = apply_replacements(&content, table);
    if fixed == content {
        info!("no corrupted sequences found");
    }

    fs::write(path, fixed.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {} bytes as UTF-8", fixed.len());

    Ok(())
}
