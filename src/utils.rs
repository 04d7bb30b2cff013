use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root; on a relative path with nothing left
/// to pop it is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    out
}

/// Lexical path of `path` relative to `base`, with `..` steps when `path`
/// lies outside of it.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = normalize(path);
    let base = normalize(base);

    let mut path_iter = path.components().peekable();
    let mut base_iter = base.components().peekable();

    while let (Some(a), Some(b)) = (path_iter.peek(), base_iter.peek()) {
        if a != b {
            break;
        }
        path_iter.next();
        base_iter.next();
    }

    let mut out = PathBuf::new();
    for _ in base_iter {
        out.push("..");
    }
    for component in path_iter {
        out.push(component.as_os_str());
    }
    out
}

/// Path components as plain strings, in order.
pub fn components(path: &Path) -> Vec<String> {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/../../x")), PathBuf::from("/x"));
        assert_eq!(normalize(Path::new("../a/../../b")), PathBuf::from("../../b"));
    }

    #[test]
    fn test_relative_inside() {
        assert_eq!(
            relative_to(Path::new("/proj/lua_modules/foo.lua"), Path::new("/proj")),
            PathBuf::from("lua_modules/foo.lua")
        );
    }

    #[test]
    fn test_relative_outside() {
        assert_eq!(
            relative_to(Path::new("/other/x.lua"), Path::new("/proj/app")),
            PathBuf::from("../../other/x.lua")
        );
    }

    #[test]
    fn test_components() {
        assert_eq!(components(Path::new("static/css/a.css")), vec!["static", "css", "a.css"]);
    }
}
