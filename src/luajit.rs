use crate::cmd;
use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use std::path::Path;

/// Compile `lua` into a C source file holding its bytecode array.
///
/// luajit looks up its `jit.*` modules relative to its working directory, so
/// it runs from the directory it lives in. All paths are resolved against the
/// invocation directory first.
pub fn bytecompile(ctx: &Context, luajit: &Path, lua: &Path, dot_c: &Path) -> Result<()> {
    let luajit = ctx.resolve(luajit);
    let lua = ctx.resolve(lua);
    let dot_c = ctx.resolve(dot_c);

    let dir = luajit
        .parent()
        .ok_or_else(|| Error::custom(format!("luajit path has no parent: {}", luajit.display())))?;

    cmd::execute(
        ctx,
        &luajit,
        &[
            std::ffi::OsStr::new("-bg"),
            lua.as_os_str(),
            dot_c.as_os_str(),
        ],
        dir,
    )
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn fake_luajit(dir: &Path, script: &str) -> std::path::PathBuf {
        let bin = dir.join("bin");
        fs::create_dir_all(&bin).unwrap();
        let path = bin.join("luajit");
        fs::write(&path, format!("#!/bin/sh\n{}\n", script)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_runs_from_luajit_directory() {
        let dir = tempfile::tempdir().unwrap();
        let luajit = fake_luajit(dir.path(), "pwd > \"$3\"; echo \"$1 $2\" >> \"$3\"");
        let ctx = Context::new(dir.path().to_path_buf(), None, Config::default(), false);

        bytecompile(&ctx, &luajit, Path::new("src/a.lua"), Path::new("a.c")).unwrap();

        let out = fs::read_to_string(dir.path().join("a.c")).unwrap();
        let mut lines = out.lines();
        let cwd = fs::canonicalize(lines.next().unwrap()).unwrap();
        assert_eq!(cwd, fs::canonicalize(dir.path().join("bin")).unwrap());
        assert_eq!(
            lines.next().unwrap(),
            format!("-bg {}", dir.path().join("src/a.lua").display())
        );
    }

    #[test]
    fn test_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let luajit = fake_luajit(dir.path(), "echo 'a.lua:3: unexpected symbol' >&2; exit 1");
        let ctx = Context::new(dir.path().to_path_buf(), None, Config::default(), false);

        let err = bytecompile(&ctx, &luajit, Path::new("a.lua"), Path::new("a.c")).unwrap_err();
        assert!(
            matches!(&err, Error::CommandFailed(msg) if msg.contains("a.lua:3: unexpected symbol")),
            "{}",
            err
        );
    }
}
