//! Named commands the tool can run.
//!
//! Build scripts call the tool as `luabundle <command> [args...]` and read
//! the result from stdout, so every command returns an [`Output`] instead of
//! printing.

use crate::bundle;
use crate::context::Context;
use crate::digest;
use crate::error::Error;
use crate::luajit;
use crate::result::Result;
use crate::shim;
use std::path::Path;
use walkdir::WalkDir;

/// What a command prints on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Empty,
    Line(String),
    Lines(Vec<String>),
}

impl Output {
    /// Text to print, or `None` when there is nothing to show.
    pub fn render(&self) -> Option<String> {
        match self {
            Output::Empty => None,
            Output::Line(line) if line.is_empty() => None,
            Output::Line(line) => Some(line.clone()),
            Output::Lines(lines) if lines.is_empty() => None,
            Output::Lines(lines) => Some(lines.join("\n")),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    Any,
}

impl Arity {
    fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Any => true,
        }
    }
}

pub type Handler = fn(&Context, &[String]) -> Result<Output>;

pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub about: &'static str,
    pub arity: Arity,
    pub run: Handler,
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "make_bundle",
        usage: "make_bundle <root> <version> <out.zip> <list-file>",
        about: "Zip the files named by a list file and add a generated lua_modules/init.lua",
        arity: Arity::Exactly(4),
        run: make_bundle,
    },
    CommandSpec {
        name: "export_symbols",
        usage: "export_symbols <out.c> <module.lua>...",
        about: "Generate a C shim that keeps bytecode symbols through the link",
        arity: Arity::AtLeast(1),
        run: export_symbols,
    },
    // name the gyp build files have always called
    CommandSpec {
        name: "virgo_exports",
        usage: "virgo_exports <out.c> <module.lua>...",
        about: "Alias of export_symbols",
        arity: Arity::AtLeast(1),
        run: export_symbols,
    },
    CommandSpec {
        name: "bytecompile_lua",
        usage: "bytecompile_lua <luajit> <file.lua> <out.c>",
        about: "Compile a Lua file to a C bytecode array with luajit -bg",
        arity: Arity::Exactly(3),
        run: bytecompile_lua,
    },
    CommandSpec {
        name: "hash",
        usage: "hash [value]...",
        about: "Print the MD5 hex digest of the concatenated values",
        arity: Arity::Any,
        run: hash,
    },
    CommandSpec {
        name: "find_files",
        usage: "find_files <root>",
        about: "List every file below a directory",
        arity: Arity::Exactly(1),
        run: find_files,
    },
    CommandSpec {
        name: "bundle_list",
        usage: "bundle_list <list-file>",
        about: "Print the existing files a list file selects",
        arity: Arity::Exactly(1),
        run: bundle_list,
    },
];

pub fn find(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Look up `name` and run it with `args`.
pub fn dispatch(ctx: &Context, name: &str, args: &[String]) -> Result<Output> {
    let command = find(name).ok_or_else(|| Error::UnknownCommand(name.to_string()))?;
    if !command.arity.accepts(args.len()) {
        return Err(Error::Usage(command.usage.to_string()));
    }
    (command.run)(ctx, args)
}

fn make_bundle(ctx: &Context, args: &[String]) -> Result<Output> {
    let root = ctx.resolve(&args[0]);
    let version = &args[1];
    let output = ctx.resolve(&args[2]);
    let list_file = ctx.resolve(&args[3]);

    let count = bundle::build(ctx, &root, version, &output, &list_file)?;
    Ok(Output::Line(format!(
        "Wrote {} files to {}",
        count,
        args[2]
    )))
}

fn export_symbols(ctx: &Context, args: &[String]) -> Result<Output> {
    let output = ctx.resolve(&args[0]);
    let modules = &args[1..];

    shim::write(&output, modules, &ctx.config.shim, &ctx.config.bundle.generator)?;
    ctx.info(format!(
        "Wrote symbol shim for {} modules to {}",
        modules.len(),
        output.display()
    ));
    Ok(Output::Empty)
}

fn bytecompile_lua(ctx: &Context, args: &[String]) -> Result<Output> {
    luajit::bytecompile(ctx, Path::new(&args[0]), Path::new(&args[1]), Path::new(&args[2]))?;
    Ok(Output::Empty)
}

fn hash(_ctx: &Context, args: &[String]) -> Result<Output> {
    Ok(Output::Line(digest::md5_hex(args)))
}

fn find_files(ctx: &Context, args: &[String]) -> Result<Output> {
    let mut files = Vec::new();
    for entry in WalkDir::new(ctx.resolve(&args[0])).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.path().display().to_string());
        }
    }
    Ok(Output::Lines(files))
}

fn bundle_list(ctx: &Context, args: &[String]) -> Result<Output> {
    let files = bundle::list::read(&ctx.resolve(&args[0]), &ctx.list_base, ctx.path_style)?;
    Ok(Output::Lines(
        files.iter().map(|f| f.display().to_string()).collect(),
    ))
}
