//! CLI binary for pdf2img.
//!
//! A thin shim over the library crate: the conversion parameters themselves
//! are the crate's fixed defaults (`./pdfs` → `./images`, 400 DPI, PNG,
//! border trimming on); the flags here only control reporting and logging.

use anyhow::{Context, Result};
use clap::Parser;
use pdf2img::{run, BatchConfig};
use std::io;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"BEHAVIOUR:
  Reads every *.pdf in ./pdfs (case-insensitive extension match), renders
  each page at 400 DPI, trims black borders (tolerance 10), and writes
  ./images/<name>_page_<n>.png. Reruns overwrite prior output silently.

  A PDF that fails to render is skipped with an error; a page that fails
  to write is skipped with an error; the batch always continues.

SETUP:
  pdf2img binds to a pdfium library at startup: first one placed next to
  the executable, then the system library path.
"#;

/// Convert a folder of PDFs to per-page images with border trimming.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2img",
    version,
    about = "Convert a folder of PDFs to per-page images with border trimming",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Print the run summary as JSON (per-document reports included).
    #[arg(long, env = "PDF2IMG_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2IMG_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDF2IMG_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Run batch ────────────────────────────────────────────────────────
    let config = BatchConfig::default();
    let summary = run(&config).context("Batch conversion failed")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialise summary")?
        );
        return Ok(());
    }

    if !cli.quiet {
        let tick = if summary.documents_failed == 0 && summary.pages_failed == 0 {
            green("✔")
        } else {
            cyan("⚠")
        };
        eprintln!(
            "{tick}  {}/{} documents  {} page(s) → {}  {}ms",
            summary.documents_converted,
            summary.documents_found,
            bold(&summary.pages_written.to_string()),
            bold(&config.output_dir.display().to_string()),
            summary.duration_ms,
        );
        if summary.documents_failed > 0 {
            eprintln!(
                "   {} document(s) failed to render",
                red(&summary.documents_failed.to_string())
            );
        }
        if summary.pages_failed > 0 {
            eprintln!(
                "   {} page(s) failed to write",
                red(&summary.pages_failed.to_string())
            );
        }
    }

    Ok(())
}
