use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

/// Execute a command in `dir`, streaming its output to stderr if verbose
/// mode is enabled. A non-zero exit status is an error.
pub fn execute<S: AsRef<OsStr>>(ctx: &Context, program: &Path, args: &[S], dir: &Path) -> Result<()> {
    let line = command_line(program, args);
    ctx.info(format!("Executing: {}", line));

    let mut child = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Both pipes drain at once, otherwise a child filling stderr blocks
    // while we wait on stdout.
    let verbose = ctx.verbose;
    let stderr_reader = child.stderr.take().map(|stderr| {
        thread::spawn(move || {
            let mut captured = Vec::new();
            for line in BufReader::new(stderr).lines().map_while(|l| l.ok()) {
                if verbose {
                    eprintln!("{}", line);
                }
                captured.push(line);
            }
            captured
        })
    });

    // stdout of this tool carries command results, so the child's output
    // is echoed on stderr
    if let Some(stdout) = child.stdout.take() {
        let reader = BufReader::new(stdout);
        for line in reader.lines().map_while(|l| l.ok()) {
            if verbose {
                eprintln!("{}", line);
            }
        }
    }

    let stderr = stderr_reader
        .map(|reader| reader.join().unwrap_or_default())
        .unwrap_or_default();
    let status = child.wait()?;

    if !status.success() {
        let mut msg = format!(
            "{} failed with exit code: {}",
            line,
            status.code().unwrap_or(-1)
        );
        if !stderr.is_empty() {
            msg.push('\n');
            msg.push_str(&stderr.join("\n"));
        }
        return Err(Error::CommandFailed(msg));
    }

    Ok(())
}

fn command_line<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> String {
    std::iter::once(program.as_os_str())
        .chain(args.iter().map(|a| a.as_ref()))
        .map(|s| s.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
