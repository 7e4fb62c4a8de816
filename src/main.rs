//! synspan - paint source files with the highlighting engine
//!
//! Reads a file (or stdin), computes its span list and either paints it
//! on the terminal or dumps the spans/tokens for inspection.

mod terminal;

use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use synspan::{segments, Config, Error, Highlighter, OffsetUnit, Result};
use terminal::Terminal;

/// What to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Paint,
    Spans,
    Tokens,
}

/// Parsed command line
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    mode: Mode,
    plain: bool,
    max_cols: Option<usize>,
    config: Option<PathBuf>,
    file: Option<PathBuf>,
    help: bool,
    version: bool,
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;

    if args.help {
        print_usage();
        return Ok(());
    }
    if args.version {
        print_version();
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    tracing::debug!(?config, "loaded settings");

    let text = read_input(args.file.as_deref())?;
    let highlighter = Highlighter::from_config(&config)?;
    let enabled = config.enabled && !args.plain;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.mode {
        Mode::Tokens => {
            if enabled {
                for token in highlighter.tokens(&text) {
                    writeln!(
                        out,
                        "{}..{}\t{}\t{:?}",
                        token.start,
                        token.end,
                        token.category.style_class(),
                        token.text(&text)
                    )?;
                }
            }
        }
        Mode::Spans => {
            let spans = if enabled {
                highlighter.highlight(&text)
            } else {
                highlighter.plain(&text)
            };
            for span in spans {
                writeln!(out, "{}\t{}", span.len, span.style_class().unwrap_or("-"))?;
            }
        }
        Mode::Paint => {
            // The painter slices the text, so it works in bytes
            let painter = highlighter.with_unit(OffsetUnit::Bytes);
            let spans = if enabled {
                painter.highlight(&text)
            } else {
                painter.plain(&text)
            };
            let segs = segments(&text, &spans, OffsetUnit::Bytes)?;
            let styled = enabled && io::stdout().is_terminal();
            let mut term = Terminal::new(out, styled, args.max_cols);
            term.paint(&segs)?;
        }
    }

    Ok(())
}

/// Parse command-line arguments (program name already skipped)
fn parse_args<I>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => parsed.help = true,
            "--version" | "-V" => parsed.version = true,
            "--spans" => parsed.mode = Mode::Spans,
            "--tokens" => parsed.mode = Mode::Tokens,
            "--plain" => parsed.plain = true,
            "--max-cols" => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::Usage("--max-cols needs a value".into()))?;
                let cols = value
                    .parse::<usize>()
                    .map_err(|_| Error::Usage(format!("invalid column count: {}", value)))?;
                parsed.max_cols = Some(cols);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::Usage("--config needs a path".into()))?;
                parsed.config = Some(PathBuf::from(value));
            }
            "-" => parsed.file = None,
            s if s.starts_with('-') => {
                return Err(Error::Usage(format!("unknown option: {} (try --help)", s)));
            }
            _ => {
                if parsed.file.is_some() {
                    return Err(Error::Usage("only one input file is supported".into()));
                }
                parsed.file = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(parsed)
}

/// Read the whole input, from a file or stdin
fn read_input(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_usage() {
    println!("synspan {} - lexical highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: synspan [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or stdin when absent or '-') and paints it with colors.");
    println!();
    println!("Options:");
    println!("  --spans          Print the span list (length and style class per line)");
    println!("  --tokens         Print each token with its byte range");
    println!("  --plain          Turn highlighting off for this run");
    println!("  --max-cols N     Clip painted lines to N display columns");
    println!("  --config PATH    Read settings from PATH instead of ~/.synspan.toml");
    println!("  -h, --help       Show this help message");
    println!("  -V, --version    Show version information");
    println!();
    println!("Set RUST_LOG=debug for diagnostics.");
}

fn print_version() {
    println!("synspan {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args, Args::default());
        assert_eq!(args.mode, Mode::Paint);
    }

    #[test]
    fn test_parse_options() {
        let args = parse(&["--spans", "--plain", "--max-cols", "80", "Main.java"]).unwrap();
        assert_eq!(args.mode, Mode::Spans);
        assert!(args.plain);
        assert_eq!(args.max_cols, Some(80));
        assert_eq!(args.file, Some(PathBuf::from("Main.java")));

        let args = parse(&["--config", "/tmp/s.toml", "-"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/s.toml")));
        assert_eq!(args.file, None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(&["--bogus"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["--max-cols"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["--max-cols", "wide"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["a.java", "b.java"]), Err(Error::Usage(_))));
    }
}
