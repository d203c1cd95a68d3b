// src/file.rs

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use crate::catalog::ChannelCatalog;
use crate::config::consts::{DEFAULT_FILE, PART_EXT};
use crate::config::options::ExportOptions;
use crate::error::{ChannelError, Result};

/// Write the catalog as pretty JSON to `export.out_path()`.
/// Returns the final path written to.
///
/// The text goes to a transient `<name>.part` sibling first and is renamed into
/// place; the transient file is removed on failure, so a failed export never
/// leaves a half-written `channels.json` behind.
pub fn export_catalog(catalog: &ChannelCatalog, export: &ExportOptions) -> Result<PathBuf> {
    let path = export.out_path();
    let contents = catalog.to_json_pretty()?;
    write_via_part(&path, contents.as_bytes())?;
    log::info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(path)
}

/// Same as `export_catalog`, for any already-rendered text.
pub fn write_via_part(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let part = part_path(path);
    let res = fs::write(&part, contents).and_then(|_| fs::rename(&part, path));
    if let Err(e) = res {
        let _ = fs::remove_file(&part);
        return Err(e.into());
    }
    Ok(())
}

/// `dir/channels.json` → `dir/channels.json.part`
pub fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_else(|| OsString::from(DEFAULT_FILE));
    name.push(".");
    name.push(PART_EXT);
    path.with_file_name(name)
}

pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf> {
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?; Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ChannelError::Config(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
