use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::StoreResult;

const TMP_SUFFIX: &str = "tmp";

/// Writes `data` to `path` by staging to a sibling temporary file and renaming it
/// into place, so a failed write never leaves a truncated file behind.
pub fn write_atomic(path: &Path, data: &str) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Reads a UTF-8 file into memory.
pub fn read_to_string(path: &Path) -> StoreResult<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn ensure_dir(path: &Path) -> StoreResult<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
