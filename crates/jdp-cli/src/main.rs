//! Command-line interface for the `jsondiffpatch`-wire-compatible
//! diff/patch engine.
//!
//! `jdp diff <left> <right>` computes a structural diff and writes it to
//! stdout as compact JSON; `jdp patch <original> <diff>` applies a diff
//! and writes the reconstructed document. Either positional argument may
//! be `-` to read from stdin (at most one per invocation).

use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jdp_core::{DiffOptions, Value};

const VERSION_BANNER: &str = concat!("jdp version ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Parser)]
#[command(
    name = "jdp",
    about = "Compute and apply jsondiffpatch-compatible structural diffs.",
    version = VERSION_BANNER,
    disable_help_subcommand = true,
    disable_version_flag = true,
    arg_required_else_help = true,
)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = clap::ArgAction::SetTrue)]
    version: bool,

    /// Enable verbose tracing output (equivalent to `RUST_LOG=jdp=trace`).
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the structural diff between two JSON documents.
    Diff {
        /// Path to the left (original) document, or `-` for stdin.
        left: String,
        /// Path to the right (target) document, or `-` for stdin.
        right: String,
        /// Compare numbers within 1e-9 absolute tolerance instead of bitwise.
        #[arg(long)]
        loose: bool,
    },
    /// Apply a diff (in jsondiffpatch wire format) to a document.
    Patch {
        /// Path to the original document, or `-` for stdin.
        original: String,
        /// Path to the diff document, or `-` for stdin.
        diff: String,
    },
}

fn main() {
    if let Err(err) = try_main() {
        let _ = writeln!(io::stderr(), "jdp: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = canonicalize_args(std::env::args_os());
    let cli = Cli::parse_from(args);

    if cli.version {
        println!("{VERSION_BANNER}");
        return Ok(());
    }

    if cli.verbose {
        let _ = tracing_subscriber::fmt().with_env_filter("jdp=trace,jdp_core=trace").try_init();
    } else {
        let _ = tracing_subscriber::fmt().with_env_filter("warn").try_init();
    }

    match cli.command {
        Some(Command::Diff { left, right, loose }) => run_diff(&left, &right, loose),
        Some(Command::Patch { original, diff }) => run_patch(&original, &diff),
        None => Ok(()),
    }
}

fn run_diff(left_path: &str, right_path: &str, loose: bool) -> Result<()> {
    let left_text = read_input(left_path)?;
    let right_text = read_input(right_path)?;

    let options = DiffOptions::default().with_strict_equality(!loose);
    let delta = jdp_core::diff_from_text(&left_text, &right_text, &options)
        .context("failed to compute diff")?;

    match delta {
        Some(value) => println!("{value}"),
        None => println!("{{}}"),
    }
    Ok(())
}

fn run_patch(original_path: &str, diff_path: &str) -> Result<()> {
    let original_text = read_input(original_path)?;
    let diff_text = read_input(diff_path)?;

    let original = Value::from_json_str(&original_text).context("original is not valid JSON")?;
    let diff = Value::from_json_str(&diff_text).context("diff is not valid JSON")?;

    let options = DiffOptions::default();
    let patched = jdp_core::patch(&original, &diff, &options).context("failed to apply patch")?;
    println!("{patched}");
    Ok(())
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(Path::new(path)).with_context(|| format!("failed to read {path}"))
    }
}

/// Normalises legacy single-dash long flags (`-help`, `-version`) to the
/// double-dash forms `clap` expects, for compatibility with callers that
/// expect the GNU-style flags of the tool this CLI succeeds.
fn canonicalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut canonicalized = Vec::new();
    for (idx, arg) in args.into_iter().enumerate() {
        if idx == 0 {
            canonicalized.push(arg);
            continue;
        }
        match arg.to_str() {
            Some("-help") => canonicalized.push(OsString::from("--help")),
            Some("-version") => canonicalized.push(OsString::from("--version")),
            _ => canonicalized.push(arg),
        }
    }
    canonicalized
}

#[cfg(test)]
mod tests {
    use super::canonicalize_args;
    use std::ffi::OsString;

    #[test]
    fn canonicalizes_single_dash_variants() {
        let input = vec![
            OsString::from("jdp"),
            OsString::from("-help"),
            OsString::from("-version"),
            OsString::from("--other"),
        ];
        let canonicalized = canonicalize_args(input.clone());
        assert_eq!(canonicalized[0], "jdp");
        assert_eq!(canonicalized[1], "--help");
        assert_eq!(canonicalized[2], "--version");
        assert_eq!(canonicalized[3], "--other");
    }
}
