//! Output helpers. Contains [store_file], writing generated source to fs.

use anyhow::{Context, Error, bail};
use std::{io::Write, path::Path};
use tempfile::NamedTempFile;

/// File name used when output path is not given.
pub const OUTPUT_FILE_NAME_DEFAULT: &str = "data.rs";

/// Fails if `path` exists and `overwrite` is not set.
///
/// Called before generation to avoid wasting work, [store_file] checks again
/// when writing.
pub fn ensure_writable(
    path: &Path,
    overwrite: bool,
) -> Result<(), Error> {
    if !overwrite && path.try_exists()? {
        bail!(
            "can't output, {} exists (use -f to override)",
            path.display()
        );
    }

    Ok(())
}

/// Writes `content` to `path`.
///
/// Content goes to a temporary file in the target directory first, which is
/// then renamed over `path`, so a failed write never leaves partial output.
/// Without `overwrite` existing `path` is never replaced.
pub fn store_file(
    path: &Path,
    content: &[u8],
    overwrite: bool,
) -> Result<(), Error> {
    ensure_writable(path, overwrite)?;

    let directory_path = match path.parent() {
        Some(directory_path) if !directory_path.as_os_str().is_empty() => directory_path,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(directory_path)
        .with_context(|| directory_path.to_string_lossy().into_owned())?;
    file.write_all(content)?;
    file.as_file().sync_all()?;

    let persisted = if overwrite {
        file.persist(path)
    } else {
        file.persist_noclobber(path)
    };
    persisted.with_context(|| path.to_string_lossy().into_owned())?;

    log::info!("written {} bytes to {}", content.len(), path.display());

    Ok(())
}
