use crate::utils;
use std::path::Path;

/// Top-level directory holding Lua modules inside a bundle.
pub const LUA_MODULES_DIR: &str = "lua_modules";

/// Top-level directory holding static assets inside a bundle.
pub const STATIC_DIR: &str = "static";

/// What a bundle-relative path is recorded as in the generated manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// `lua_modules/<name>[.ext]` or `lua_modules/<name>/...`
    Module(String),
    /// Anything below `static/`, recorded by its full relative path.
    Static(String),
    Unclassified,
}

/// Classify a path relative to the bundle root by its first component.
pub fn classify(relative: &Path) -> Classification {
    let parts = utils::components(relative);

    match parts.first().map(String::as_str) {
        Some(LUA_MODULES_DIR) => match parts.get(1) {
            Some(entry) => Classification::Module(strip_extension(entry).to_string()),
            None => Classification::Unclassified,
        },
        Some(STATIC_DIR) => Classification::Static(relative.to_string_lossy().into_owned()),
        _ => Classification::Unclassified,
    }
}

/// `foo.lua` -> `foo`, `foo.tar.gz` -> `foo.tar`, `.hidden` and `foo` unchanged.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos > 0 => &name[..pos],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_file() {
        assert_eq!(
            classify(Path::new("lua_modules/foo.lua")),
            Classification::Module("foo".into())
        );
    }

    #[test]
    fn test_module_package_dir() {
        assert_eq!(
            classify(Path::new("lua_modules/async/init.lua")),
            Classification::Module("async".into())
        );
    }

    #[test]
    fn test_static() {
        assert_eq!(
            classify(Path::new("static/img/logo.png")),
            Classification::Static("static/img/logo.png".into())
        );
    }

    #[test]
    fn test_unclassified() {
        assert_eq!(classify(Path::new("main.lua")), Classification::Unclassified);
        assert_eq!(classify(Path::new("src/static/x")), Classification::Unclassified);
        assert_eq!(classify(Path::new("../lua_modules/x.lua")), Classification::Unclassified);
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("foo.lua"), "foo");
        assert_eq!(strip_extension("foo.tar.gz"), "foo.tar");
        assert_eq!(strip_extension(".hidden"), ".hidden");
        assert_eq!(strip_extension("foo"), "foo");
    }
}
