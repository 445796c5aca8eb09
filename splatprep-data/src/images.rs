//! Image file discovery, copying and renaming.

use crate::error::{PrepError, Result};
use crate::paths::has_image_extension;
use std::ffi::OsString;
use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};
use tracing::debug;

/// List the image files directly inside `dir`, sorted by file name.
///
/// Subdirectories are ignored even when their name looks like an image.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| PrepError::io(dir, e))? {
        let entry = entry.map_err(|e| PrepError::io(dir, e))?;
        let path = entry.path();
        let is_file = entry
            .file_type()
            .map_err(|e| PrepError::io(&path, e))?
            .is_file();
        if is_file && has_image_extension(&entry.file_name().to_string_lossy()) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

/// Copy `src` over `dst`, carrying the access and modification times along.
pub fn copy_preserving_times(src: &Path, dst: &Path) -> Result<u64> {
    let bytes = fs::copy(src, dst).map_err(|e| PrepError::io(src, e))?;

    let meta = fs::metadata(src).map_err(|e| PrepError::io(src, e))?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    // The copy carries the source's permissions and may be read-only.
    File::open(dst)
        .and_then(|file| file.set_times(times))
        .map_err(|e| PrepError::io(dst, e))?;

    Ok(bytes)
}

/// Copy every image in `src_dir` into `dest_dir`, overwriting same-named files.
///
/// Returns the number of images copied.
pub fn copy_images(src_dir: &Path, dest_dir: &Path) -> Result<usize> {
    fs::create_dir_all(dest_dir).map_err(|e| PrepError::io(dest_dir, e))?;

    let images = list_images(src_dir)?;
    for src in &images {
        let Some(name) = src.file_name() else {
            continue;
        };
        let dst = dest_dir.join(name);
        let bytes = copy_preserving_times(src, &dst)?;
        debug!("Copied {} -> {} ({} bytes)", src.display(), dst.display(), bytes);
    }
    Ok(images.len())
}

/// Rename every image in `dir` that lacks `prefix` to `<prefix><name>`.
///
/// Already prefixed files are left alone, so running this twice is the same
/// as running it once. Returns the number of files renamed.
pub fn prefix_images(dir: &Path, prefix: &str) -> Result<usize> {
    let mut renamed = 0;
    for src in list_images(dir)? {
        let Some(name) = src.file_name() else {
            continue;
        };
        if name.to_string_lossy().starts_with(prefix) {
            continue;
        }
        let mut new_name = OsString::from(prefix);
        new_name.push(name);
        let dst = dir.join(new_name);
        fs::rename(&src, &dst).map_err(|e| PrepError::io(&src, e))?;
        debug!("Renamed {} -> {}", src.display(), dst.display());
        renamed += 1;
    }
    Ok(renamed)
}
