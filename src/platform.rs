use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// Get the current platform
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Get platform identifier as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Unix => "unix",
        }
    }

    /// Path handling policy for this platform
    pub fn path_style(&self) -> PathStyle {
        match self {
            Platform::Windows => PathStyle::Backslash,
            Platform::Unix => PathStyle::Native,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Separator policy applied to list-file paths and to generated manifest text.
///
/// Chosen once per invocation and handed to whoever needs it, so no other
/// code checks the target platform directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// Forward slashes everywhere, nothing to rewrite.
    Native,
    /// Filesystem uses `\`; the Lua runtime reading the manifest only understands `/`.
    Backslash,
}

impl PathStyle {
    /// Rewrite the separators of a path read from a list file into the
    /// form the filesystem expects.
    pub fn normalize_fs(&self, path: &Path) -> PathBuf {
        match self {
            PathStyle::Native => path.to_path_buf(),
            PathStyle::Backslash => PathBuf::from(path.to_string_lossy().replace('/', "\\")),
        }
    }

    /// Rewrite text destined for the Lua side to forward slashes.
    pub fn portable(&self, text: &str) -> String {
        match self {
            PathStyle::Native => text.to_string(),
            PathStyle::Backslash => text.replace('\\', "/"),
        }
    }
}
