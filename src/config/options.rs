// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
}

/// Where the page comes from.
///
/// `location` is the address the page was loaded from; the guard only ever
/// looks at this. With `html_file` set the page is read from disk instead of
/// being fetched from `location`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SourceOptions {
    pub location: String,
    pub html_file: Option<PathBuf>,
}

impl SourceOptions {
    pub fn remote(location: impl Into<String>) -> Self {
        Self { location: location.into(), html_file: None }
    }

    pub fn saved(location: impl Into<String>, html_file: impl Into<PathBuf>) -> Self {
        Self { location: location.into(), html_file: Some(html_file.into()) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    out_path: OutputPath,
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        self.out_path.dir.join(&self.out_path.file_name)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_path.dir
    }

    pub fn file_name(&self) -> String {
        self.out_path.file_name.to_string_lossy().into_owned()
    }

    /// Parse user text into dir + file name.
    /// A directory hint (trailing separator, or an existing directory) keeps
    /// the default file name.
    pub fn set_path(&mut self, text: &str) {
        let s = crate::file::normalize_separators(text.trim());
        if s.is_empty() {
            return;
        }
        let p = PathBuf::from(&s);

        if crate::file::looks_like_dir_hint(&p) || p.is_dir() {
            self.out_path.dir = p;
            self.out_path.file_name = OsString::from(DEFAULT_FILE);
            return;
        }

        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(name) = p.file_name() {
            self.out_path.file_name = name.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_name: OsString,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: default_download_dir(),
            file_name: OsString::from(DEFAULT_FILE),
        }
    }
}

/// The user's downloads folder, or the working directory when there is none.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

pub fn debug_log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}
