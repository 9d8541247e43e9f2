//! clike-styler - print the lexical styling of a C-like source file

use std::env;
use std::path::PathBuf;
use std::process;

use clike_styler::{LanguageRegistry, LineSource, Result, StylerError, TextBuffer};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Language used when detection fails
const FALLBACK_LANGUAGE: &str = "C";

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    language: Option<String>,
    language_files: Vec<PathBuf>,
    list: bool,
    file: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = Args::default();
    let mut iter = env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("clike-styler {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--list" => args.list = true,
            "--language" | "-l" => args.language = Some(required(&mut iter, &arg)?),
            "--languages" => args.language_files.push(PathBuf::from(required(&mut iter, &arg)?)),
            _ => args.file = Some(PathBuf::from(arg)),
        }
    }

    let mut registry = LanguageRegistry::new();
    for path in &args.language_files {
        registry.load_file(path)?;
    }

    if args.list {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let Some(path) = args.file else {
        print_usage();
        return Ok(());
    };

    let buffer = TextBuffer::from_file(&path)?;
    let language = match &args.language {
        Some(name) => name.clone(),
        None => registry
            .detect(&path)
            .map_or(FALLBACK_LANGUAGE.to_string(), |l| l.name.clone()),
    };
    let mut styler = registry.styler(&language)?;
    debug!(file = %path.display(), language = %styler.name(), lines = buffer.line_count(), "styling");

    for index in 0..buffer.line_count() {
        let spans = styler.style_line(index, &buffer);
        let rendered: Vec<String> = spans
            .iter()
            .map(|span| format!("{}:{:?}", span.kind.name(), span.text))
            .collect();
        println!("{:>5} {}", index + 1, rendered.join(" "));
    }

    Ok(())
}

/// Value following an option
fn required(iter: &mut impl Iterator<Item = String>, option: &str) -> Result<String> {
    iter.next()
        .ok_or_else(|| StylerError::Usage(format!("{} needs a value", option)))
}

fn print_usage() {
    println!("clike-styler {} - lexical styling for C-like languages", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: clike-styler [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -l, --language NAME    Style as NAME instead of detecting from the extension");
    println!("      --languages FILE   Load extra language definitions from a TOML file");
    println!("      --list             List known languages");
    println!("  -h, --help             Show this help message");
    println!("  -V, --version          Show version information");
    println!();
    println!("Set RUST_LOG=debug for diagnostics.");
}
