//! Font file lookup
//!
//! A name is tried as given first. Bare file names are then searched for in
//! the usual per-user and system font directories, recursively.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Locate a font file, returning the first exact file name match
pub fn find_font(name: &str) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Some(direct.to_path_buf());
    }
    if direct.is_absolute() || direct.components().count() != 1 {
        return None;
    }

    let file_name = direct.file_name()?;
    font_dirs()
        .iter()
        .find_map(|dir| search_dir(dir, file_name))
}

/// Directories searched for bare font names, in priority order
fn font_dirs() -> Vec<PathBuf> {
    let home = env::var_os("HOME").map(PathBuf::from);
    let mut dirs = Vec::new();

    if let Some(data_home) = env::var_os("XDG_DATA_HOME") {
        dirs.push(PathBuf::from(data_home).join("fonts"));
    }
    if let Some(home) = &home {
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join(".fonts"));
    }

    let data_dirs = env::var_os("XDG_DATA_DIRS")
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "/usr/local/share:/usr/share".into());
    dirs.extend(env::split_paths(&data_dirs).map(|d| d.join("fonts")));

    dirs.push(PathBuf::from("/Library/Fonts"));
    dirs.push(PathBuf::from("/System/Library/Fonts"));
    if let Some(home) = &home {
        dirs.push(home.join("Library/Fonts"));
    }
    if let Some(windir) = env::var_os("WINDIR") {
        dirs.push(PathBuf::from(windir).join("Fonts"));
    }

    dirs
}

/// Depth-first search. Files in a directory are checked before its
/// subdirectories; symlinked directories are not followed.
fn search_dir(dir: &Path, file_name: &OsStr) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            subdirs.push(path);
        } else if path.file_name() == Some(file_name) && path.is_file() {
            return Some(path);
        }
    }

    subdirs.sort();
    subdirs.iter().find_map(|sub| search_dir(sub, file_name))
}
