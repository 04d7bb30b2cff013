use crate::error::Error;
use crate::platform::PathStyle;
use crate::result::Result;
use crate::utils;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a bundle list file and return the existing files it names, in order.
///
/// Relative entries are resolved against `base`. Entries that do not name a
/// regular file are dropped without comment.
pub fn read(list_file: &Path, base: &Path, style: PathStyle) -> Result<Vec<PathBuf>> {
    if !list_file.is_file() {
        return Err(Error::ListFileNotFound(list_file.to_path_buf()));
    }

    let content = fs::read_to_string(list_file)?;
    Ok(parse(&content, base, style)
        .into_iter()
        .filter(|path| path.is_file())
        .collect())
}

/// Resolve every non-blank line of `content`, without checking the filesystem.
pub fn parse(content: &str, base: &Path, style: PathStyle) -> Vec<PathBuf> {
    content
        .lines()
        .map(|line| line.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n')))
        .filter(|line| !line.is_empty())
        .map(|line| style.normalize_fs(&utils::normalize(&base.join(line))))
        .collect()
}
