use crate::config::Config;
use crate::platform::{Platform, PathStyle};
use std::path::{Path, PathBuf};

/// Context passed throughout the application containing global configuration
#[derive(Clone, Debug)]
pub struct Context {
    /// Enable verbose output (progress lines on stderr)
    pub verbose: bool,

    /// Directory the tool was invoked from
    pub cwd: PathBuf,

    /// Directory relative list-file entries are resolved against
    pub list_base: PathBuf,

    /// Separator policy for the platform we run on
    pub path_style: PathStyle,

    pub config: Config,
}

impl Context {
    pub fn new(cwd: PathBuf, base: Option<PathBuf>, config: Config, verbose: bool) -> Self {
        // List files are written relative to the directory above the one
        // the build runs in.
        let list_base = base
            .or_else(|| config.bundle.list_base.clone())
            .map(|base| absolute(&cwd, &base))
            .unwrap_or_else(|| {
                cwd.parent()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| cwd.clone())
            });

        Self {
            verbose,
            path_style: Platform::current().path_style(),
            cwd,
            list_base,
            config,
        }
    }

    /// Resolve a command argument against the invocation directory
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        absolute(&self.cwd, path.as_ref())
    }

    /// Print a progress line when verbose output is enabled
    pub fn info(&self, msg: impl std::fmt::Display) {
        if self.verbose {
            let _ = cliclack::log::info(msg);
        }
    }
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    crate::utils::normalize(&cwd.join(path))
}
