//! jackc-drv - the compiler driver: CLI parsing, file/directory
//! walking, and per-file orchestration of lex → parse+emit → write.
//!
//! One file compiles to completion before the next begins (the core's
//! concurrency model is strictly single-threaded); a failing file in
//! directory mode is logged and does not abort the rest.

use clap::Parser as ClapParser;
use jackc_util::CompileError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "jackc", about = "Compile Jack source files into VM code")]
pub struct Config {
    /// A .jack file, or a directory of .jack files to compile.
    pub path: PathBuf,

    /// Raise log verbosity; repeat for trace-level output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress informational logging (compile failures still print
    /// to stderr regardless of this flag).
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn init_tracing(config: &Config) {
    let level = if config.quiet {
        "error"
    } else {
        match config.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Run the CLI end to end. Returns `Ok(true)` if every file compiled,
/// `Ok(false)` if at least one file in a directory failed (the driver
/// still visited every other file); an `Err` means the path itself was
/// unusable (missing, wrong extension, unreadable).
pub fn run(config: &Config) -> anyhow::Result<bool> {
    let meta = fs::metadata(&config.path)
        .map_err(|e| anyhow::anyhow!("cannot read '{}': {e}", config.path.display()))?;

    if meta.is_dir() {
        Ok(compile_directory(&config.path))
    } else {
        Ok(compile_and_report(&config.path).is_ok())
    }
}

/// Compile every `.jack` file directly inside `dir`, in lexicographic
/// order, non-recursively. One failure is logged and does not stop
/// the rest.
fn compile_directory(dir: &Path) -> bool {
    let mut entries: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(rd) => rd
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("jack"))
            .collect(),
        Err(e) => {
            tracing::error!("cannot read directory '{}': {e}", dir.display());
            return false;
        }
    };
    entries.sort();

    let mut all_ok = true;
    for path in &entries {
        if compile_and_report(path).is_err() {
            all_ok = false;
        }
    }
    all_ok
}

/// Compile one file and write its sibling `.vm` output, logging and
/// printing to stderr on failure rather than propagating — used by
/// directory mode so one bad file never aborts its siblings.
fn compile_and_report(path: &Path) -> Result<(), ()> {
    match compile_file(path) {
        Ok(out_path) => {
            tracing::info!("compiled {} -> {}", path.display(), out_path.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}: {e}", path.display());
            eprintln!("error: {}: {e}", path.display());
            Err(())
        }
    }
}

/// Lex, parse+emit, and write one `.jack` file to its sibling `.vm`
/// file. The partial VM text is never written on error — the buffer
/// lives only in the parser until it returns successfully.
pub fn compile_file(path: &Path) -> Result<PathBuf, CompileError> {
    let source = fs::read_to_string(path)?;
    let file_label = path.display().to_string();
    let tokens = jackc_lex::Lexer::new(&source, file_label.clone()).tokenize()?;
    let vm_text = jackc_par::compile(tokens, file_label)?;

    let out_path = path.with_extension("vm");
    fs::write(&out_path, vm_text)?;
    Ok(out_path)
}
