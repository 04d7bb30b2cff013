use super::classify::{Classification, classify};
use crate::platform::PathStyle;
use crate::result::Result;
use crate::tpl::Tpl;
use crate::utils;
use indexmap::IndexSet;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Name of the generated manifest entry, always the last one in the archive.
pub const MANIFEST_ENTRY: &str = "lua_modules/init.lua";

const MANIFEST_TEMPLATE: &str = r#"--[[ This file is generated by $GENERATOR ]]

return {
  version = "$VERSION",
  lua_modules = {
$MODULES
  },
  statics = {
$STATICS
  }
}
"#;

/// Zip bundle under construction.
///
/// Files are added one at a time; each is classified by its path relative to
/// the bundle root so that [`BundleWriter::finish`] can describe the bundle in
/// a generated `lua_modules/init.lua`.
pub struct BundleWriter {
    zip: ZipWriter<File>,
    root: PathBuf,
    style: PathStyle,
    options: SimpleFileOptions,
    entries: HashSet<String>,
    lua_modules: IndexSet<String>,
    statics: Vec<String>,
    added: usize,
}

impl BundleWriter {
    /// Create (or truncate) the archive at `output`.
    pub fn create(root: &Path, output: &Path, style: PathStyle) -> Result<Self> {
        let file = File::create(output)?;

        Ok(Self {
            zip: ZipWriter::new(file),
            root: root.to_path_buf(),
            style,
            options: SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Deflated),
            entries: HashSet::new(),
            lua_modules: IndexSet::new(),
            statics: Vec::new(),
            added: 0,
        })
    }

    /// Add `source` under its path relative to the bundle root.
    pub fn add(&mut self, source: &Path) -> Result<()> {
        let relative = utils::relative_to(source, &self.root);
        let name = entry_name(&relative);

        // The container refuses a second entry with the same name, and the
        // manifest entry is always the generated one.
        if name != MANIFEST_ENTRY && self.entries.insert(name.clone()) {
            self.zip.start_file(name, self.options)?;
            let mut input = File::open(source)?;
            io::copy(&mut input, &mut self.zip)?;
        }
        self.added += 1;

        match classify(&relative) {
            Classification::Module(module) => {
                self.lua_modules.insert(module);
            }
            Classification::Static(path) => self.statics.push(path),
            Classification::Unclassified => {}
        }

        Ok(())
    }

    /// Module names discovered so far, deduplicated, in discovery order.
    pub fn lua_modules(&self) -> impl Iterator<Item = &str> {
        self.lua_modules.iter().map(String::as_str)
    }

    /// Render the generated manifest text for `version`.
    ///
    /// Values pass through the path style before they are escaped, so the
    /// only backslashes left in the text are Lua escapes.
    pub fn manifest(&self, generator: &str, version: &str) -> String {
        let style = self.style;
        let mut tpl = Tpl::new();
        tpl.register("GENERATOR", style.portable(generator));
        tpl.register("VERSION", lua_escape(&style.portable(version)));
        tpl.register("MODULES", quoted_list(style, self.lua_modules()));
        tpl.register(
            "STATICS",
            quoted_list(style, self.statics.iter().map(String::as_str)),
        );

        tpl.parse(MANIFEST_TEMPLATE)
    }

    /// Append the generated manifest entry.
    pub fn insert_manifest(&mut self, generator: &str, version: &str) -> Result<()> {
        let text = self.manifest(generator, version);
        self.zip.start_file(MANIFEST_ENTRY, self.options)?;
        self.zip.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write the manifest entry, close the archive and return the number of
    /// files added.
    pub fn finish(mut self, generator: &str, version: &str) -> Result<usize> {
        self.insert_manifest(generator, version)?;
        self.zip.finish()?;
        Ok(self.added)
    }
}

/// Zip entry names always use `/`.
fn entry_name(relative: &Path) -> String {
    utils::components(relative).join("/")
}

/// Escape text for a double-quoted Lua string literal.
fn lua_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

fn quoted_list<'a>(style: PathStyle, items: impl Iterator<Item = &'a str>) -> String {
    items
        .map(|item| format!("    \"{}\"", lua_escape(&style.portable(item))))
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Build a bundle at `output` from `files`, rooted at `root`.
///
/// Returns the number of files added (the generated manifest entry excluded).
pub fn make_bundle(
    root: &Path,
    files: &[PathBuf],
    output: &Path,
    style: PathStyle,
    generator: &str,
    version: &str,
) -> Result<usize> {
    let mut bundle = BundleWriter::create(root, output, style)?;
    for file in files {
        bundle.add(file)?;
    }
    bundle.finish(generator, version)
}
