//! Lua bundle archives.
//!
//! A bundle is a deflated zip holding the files named by a list file, at
//! paths relative to the bundle root, followed by a generated
//! `lua_modules/init.lua` that tells the runtime which modules and static
//! files the bundle carries.

pub mod archive;
pub mod classify;
pub mod list;

use crate::context::Context;
use crate::result::Result;
use std::path::Path;

/// Build the bundle described by `list_file` and return the number of files
/// written into it.
pub fn build(ctx: &Context, root: &Path, version: &str, output: &Path, list_file: &Path) -> Result<usize> {
    let files = list::read(list_file, &ctx.list_base, ctx.path_style)?;
    ctx.info(format!(
        "Bundling {} files from {} (list base {})",
        files.len(),
        root.display(),
        ctx.list_base.display()
    ));

    archive::make_bundle(
        root,
        &files,
        output,
        ctx.path_style,
        &ctx.config.bundle.generator,
        version,
    )
}
