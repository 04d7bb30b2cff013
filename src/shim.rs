//! C shim that keeps LuaJIT bytecode arrays alive through the link.
//!
//! `luajit -bg` emits each module as an exported `const char` array that
//! nothing calls, so a static link drops it. The generated shim declares every
//! array and folds their addresses into a global pointer from an exported
//! function, which gives the linker a reference it cannot discard.

use crate::config::ShimConfig;
use crate::result::Result;
use crate::tpl::Tpl;
use std::fs;
use std::path::Path;

const SHIM_TEMPLATE: &str = r#"/* This file is generated by $GENERATOR */
#include <string.h>
#include "$HEADER"

const void *$ANCHOR = NULL;
$DECLARATIONS

const void *$FUNCTION(void)
{
  $ANCHOR = (const char*)

$CASTS;

  return $ANCHOR;
}
"#;

/// Bare symbol identifier for a module path: `lib/foo.lua` -> `foo`.
pub fn identifier<'a>(module: &'a str, extension: &str) -> &'a str {
    let base = module.rsplit(['/', '\\']).next().unwrap_or(module);
    match base.find(extension) {
        Some(pos) if !extension.is_empty() => &base[..pos],
        _ => base,
    }
}

/// Render the shim source for `modules`.
pub fn generate<S: AsRef<str>>(modules: &[S], config: &ShimConfig, generator: &str) -> String {
    let identifiers: Vec<&str> = modules
        .iter()
        .map(|m| identifier(m.as_ref(), &config.module_extension))
        .collect();

    let declarations = identifiers
        .iter()
        .map(|id| format!("extern const char *{}_{}[];", config.symbol_prefix, id))
        .collect::<Vec<_>>()
        .join("\n");

    let casts = if identifiers.is_empty() {
        "  (size_t)0".to_string()
    } else {
        identifiers
            .iter()
            .map(|id| format!("  (size_t)(const char *){}_{}", config.symbol_prefix, id))
            .collect::<Vec<_>>()
            .join(" +\n")
    };

    let mut tpl = Tpl::new();
    tpl.register("GENERATOR", generator);
    tpl.register("HEADER", config.header.as_str());
    tpl.register("ANCHOR", config.anchor.as_str());
    tpl.register("FUNCTION", config.function.as_str());
    tpl.register("DECLARATIONS", declarations);
    tpl.register("CASTS", casts);
    tpl.parse(SHIM_TEMPLATE)
}

/// Write the shim for `modules` to `output`, replacing any existing file.
pub fn write<S: AsRef<str>>(output: &Path, modules: &[S], config: &ShimConfig, generator: &str) -> Result<()> {
    fs::write(output, generate(modules, config, generator))?;
    Ok(())
}
