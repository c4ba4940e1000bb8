use crate::constants::{SOURCE_EXTENSIONS, TARGET_EXTENSION};
use crate::error::{ConvertError, Result};
use crate::warn;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Returns `true` when the file name ends with `.png`, `.jpg` or `.jpeg`,
/// ignoring case.
///
/// The check runs on the whole file name rather than `Path::extension`, so a
/// dotfile such as `.png` still counts as a source image.
pub fn is_convertible_image(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy().to_lowercase();
            SOURCE_EXTENSIONS
                .iter()
                .any(|ext| name.ends_with(&format!(".{}", ext)))
        })
        .unwrap_or(false)
}

/// Derives the sibling `.webp` path for a source image.
///
/// The directory and base name are kept and the extension is replaced. When
/// the file name has no extension of its own (`.png`), `.webp` is appended.
pub fn webp_output_path(input_path: &Path) -> Result<PathBuf> {
    let file_name = input_path
        .file_name()
        .ok_or_else(|| ConvertError::InvalidFileName(input_path.to_path_buf()))?;

    if input_path.extension().is_some() {
        return Ok(input_path.with_extension(TARGET_EXTENSION));
    }

    let mut output_name = file_name.to_os_string();
    output_name.push(".");
    output_name.push(TARGET_EXTENSION);
    Ok(input_path.with_file_name(output_name))
}

/// Collects every convertible image below `root`, descending into all
/// subdirectories.
///
/// A missing or unreadable root is an error. Failures further down the tree
/// are reported as warnings and the walk continues.
pub fn collect_image_files(root: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConvertError::RootNotFound(root.to_path_buf()),
        _ => ConvertError::Io(e),
    })?;
    if !metadata.is_dir() {
        return Err(ConvertError::RootNotDirectory(root.to_path_buf()));
    }

    let mut image_files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if is_file_like(&entry) && is_convertible_image(entry.path()) {
            image_files.push(entry.path().to_path_buf());
        }
    }

    Ok(image_files)
}

/// Regular files and symlinks that do not resolve to a directory.
///
/// Dangling links are kept so the failed open is reported like any other
/// unreadable image. Directory symlinks are never descended into.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    file_type.is_file()
}
