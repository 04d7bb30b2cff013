mod args;
mod bundle;
mod cmd;
mod commands;
mod config;
mod context;
mod digest;
mod error;
mod luajit;
mod platform;
mod result;
mod shim;
mod tpl;
mod utils;

use args::Args;
use config::Config;
use context::Context;
use platform::Platform;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args {
        verbose,
        config,
        base,
        command,
        args,
    } = Args::parse();

    let cwd = std::env::current_dir()?;
    let config = Config::load(config.as_deref(), &cwd)?;
    let ctx = Context::new(cwd, base, config, verbose);

    if verbose {
        cliclack::intro(format!("luabundle {}", command))?;
        ctx.info(format!("Platform: {} ({:?} paths)", Platform::current(), ctx.path_style));
    }

    let output = commands::dispatch(&ctx, &command, &args)?;

    // stdout carries only the command result; build scripts capture it
    if let Some(text) = output.render() {
        println!("{}", text);
    }

    if verbose {
        cliclack::outro("Done")?;
    }

    Ok(())
}
