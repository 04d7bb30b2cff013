use crate::result::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "luabundle.toml";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub bundle: BundleConfig,

    #[serde(default)]
    pub shim: ShimConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct BundleConfig {
    /// Directory relative list-file entries are resolved against
    #[serde(default)]
    pub list_base: Option<PathBuf>,

    /// Tool identity written into generated headers
    #[serde(default = "default_generator")]
    pub generator: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            list_base: None,
            generator: default_generator(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ShimConfig {
    #[serde(default = "default_symbol_prefix")]
    pub symbol_prefix: String,

    #[serde(default = "default_header")]
    pub header: String,

    #[serde(default = "default_anchor")]
    pub anchor: String,

    #[serde(default = "default_function")]
    pub function: String,

    #[serde(default = "default_module_extension")]
    pub module_extension: String,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            symbol_prefix: default_symbol_prefix(),
            header: default_header(),
            anchor: default_anchor(),
            function: default_function(),
            module_extension: default_module_extension(),
        }
    }
}

fn default_generator() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_symbol_prefix() -> String {
    "luaJIT_BC".to_string()
}

fn default_header() -> String {
    "bundle_exports.h".to_string()
}

fn default_anchor() -> String {
    "bundle_symbol_anchor".to_string()
}

fn default_function() -> String {
    "bundle__retain_symbols".to_string()
}

fn default_module_extension() -> String {
    ".lua".to_string()
}

impl Config {
    /// Load the configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] in
    /// `cwd` when it exists, falling back to defaults.
    pub fn load(path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = cwd.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok(Config::default());
                }
                candidate
            }
        };

        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
