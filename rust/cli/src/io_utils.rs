//! File helpers shared by the commands that write output files.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Creates the parent directory of `path`, including missing ancestors.
///
/// A bare file name has no parent to create and succeeds immediately.
///
/// ```rust,no_run
/// use std::path::Path;
/// # use cardsim_cli::io_utils::ensure_parent_dir;
///
/// ensure_parent_dir(Path::new("target/sims/run.jsonl")).unwrap();
/// ```
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to create directory {}: {}", parent.display(), e),
            )
        })?;
    }
    Ok(())
}

/// Truncates or creates `path` for buffered writing.
pub fn create_output(path: &Path) -> std::io::Result<BufWriter<File>> {
    ensure_parent_dir(path)?;
    Ok(BufWriter::new(File::create(path)?))
}
