//! File discovery for a configured collection directory.
//!
//! Walks a collection root and returns the relative paths of files that
//! should be indexed: hidden files and directories are skipped, as are files
//! with a recognized binary extension.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

/// Discovers the relative paths of indexable files under `root`.
pub fn discover_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
    {
        let Ok(entry) = entry else { continue };

        if entry.file_type().is_dir() || entry.file_type().is_symlink() {
            continue;
        }

        let Ok(rel_path) = entry.path().strip_prefix(root) else { continue };

        if is_binary_file(rel_path) {
            continue;
        }

        files.push(rel_path.to_path_buf());
    }

    files
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

fn is_binary_file(path: &Path) -> bool {
    const BINARY_EXTENSIONS: &[&str] = &[
        "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "svg", "tiff", "tif", "psd", "raw",
        "heic", "heif", "mp3", "wav", "flac", "aac", "ogg", "wma", "m4a", "opus", "mp4", "avi",
        "mkv", "mov", "wmv", "flv", "webm", "m4v", "mpeg", "mpg", "zip", "tar", "gz", "bz2", "xz",
        "7z", "rar", "iso", "dmg", "exe", "dll", "so", "dylib", "bin", "app", "pdf", "doc", "docx",
        "xls", "xlsx", "ppt", "pptx", "odt", "ods", "odp", "ttf", "otf", "woff", "woff2", "eot",
        "db", "sqlite", "sqlite3", "mdb", "class", "pyc", "pyo", "o", "a", "lib", "obj", "wasm",
    ];

    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}
