//! CLI binary for pdf2md-extract.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ExtractionConfig`, binds PDFium, and prints progress lines.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2md_extract::{
    run_batch, BatchReport, DocumentReport, ExtractError, ExtractionConfig,
    ExtractionProgressCallback, PdfEngine, ProgressCallback,
};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"];

// ── Progress reporting ───────────────────────────────────────────────────────

/// Terminal progress callback: one bar over the documents of the batch, with
/// the per-document lines printed above it.
struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new(0);
        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICKS);
        bar.set_style(spinner_style);
        bar.set_prefix("Scanning");
        bar.enable_steady_tick(Duration::from_millis(80));
        Arc::new(Self { bar })
    }

    fn activate_bar(&self, total: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} files  \
             ⏱ {elapsed_precise}  {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(TICKS);

        self.bar.set_length(total as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Extracting");
    }
}

impl ExtractionProgressCallback for BarProgress {
    fn on_batch_start(&self, total_documents: usize) {
        if total_documents == 0 {
            return;
        }
        self.activate_bar(total_documents);
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Found {total_documents} PDF files."))
        ));
    }

    fn on_document_start(&self, _index: usize, _total: usize, name: &str) {
        self.bar.println(format!("  Processing {name}..."));
        self.bar.set_message(name.to_string());
    }

    fn on_page_complete(&self, name: &str, page_num: usize, total_pages: usize) {
        self.bar
            .set_message(format!("{name}  page {page_num}/{total_pages}"));
    }

    fn on_document_complete(&self, _index: usize, _total: usize, report: &DocumentReport) {
        self.bar.println(format!(
            "  {} Finished {}: {} pages processed.",
            green("✓"),
            report.name,
            report.page_count
        ));
        self.bar.inc(1);
    }

    fn on_document_error(&self, _index: usize, _total: usize, path: &Path, error: &ExtractError) {
        self.bar.println(format!(
            "  {} Error processing {}: {}",
            red("✗"),
            path.display(),
            red(&error.to_string())
        ));
        self.bar.inc(1);
    }

    fn on_batch_complete(&self, _report: &BatchReport) {
        self.bar.finish_and_clear();
    }
}

/// Plain line-oriented progress for `--no-progress` and `--quiet`.
struct LineProgress {
    quiet: bool,
}

impl ExtractionProgressCallback for LineProgress {
    fn on_batch_start(&self, total_documents: usize) {
        if !self.quiet && total_documents > 0 {
            eprintln!("Found {total_documents} PDF files.");
        }
    }

    fn on_document_start(&self, _index: usize, _total: usize, name: &str) {
        if !self.quiet {
            eprintln!("Processing {name}...");
        }
    }

    fn on_document_complete(&self, _index: usize, _total: usize, report: &DocumentReport) {
        if !self.quiet {
            eprintln!(
                "Finished {}: {} pages processed.",
                report.name, report.page_count
            );
        }
    }

    fn on_document_error(&self, _index: usize, _total: usize, path: &Path, error: &ExtractError) {
        eprintln!("Error processing {}: {}", path.display(), error);
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Extract every PDF in the current directory
  pdf2md-extract

  # Extract a specific directory
  pdf2md-extract ~/Documents/styleguides

  # Sharper renders (3× native size)
  pdf2md-extract --zoom 3 papers/

  # Machine-readable summary
  pdf2md-extract --json papers/ > summary.json

OUTPUT LAYOUT (per <name>.pdf):
  <dir>/extracted/<name>/content.md
  <dir>/extracted/<name>/<name>_page_001.png
  <dir>/extracted/<name>/<name>_page_002.png
  ...

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Path to an existing libpdfium (otherwise looked up next to
                    the executable, in the current directory, then system-wide)
  RUST_LOG          Override the log filter (e.g. RUST_LOG=debug)
"#;

/// Extract text and page images from every PDF in a directory into Markdown bundles.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2md-extract",
    version,
    about = "Extract text and page images from every PDF in a directory into Markdown bundles",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory containing the PDF files (scanned non-recursively).
    #[arg(default_value = ".", env = "PDF2MD_EXTRACT_DIR")]
    dir: PathBuf,

    /// Render scale relative to the page's native point size.
    #[arg(long, env = "PDF2MD_EXTRACT_ZOOM", default_value_t = 2.0)]
    zoom: f32,

    /// Print the batch summary as JSON on stdout.
    #[arg(long, env = "PDF2MD_EXTRACT_JSON")]
    json: bool,

    /// Disable the progress bar; print plain lines instead.
    #[arg(long, env = "PDF2MD_EXTRACT_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2MD_EXTRACT_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDF2MD_EXTRACT_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The progress bar gives all the feedback that matters, so library INFO
    // logs are only shown when it is off.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.verbose;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Bind PDFium ──────────────────────────────────────────────────────
    // The only failure allowed to end the process with a non-zero status.
    let engine = PdfEngine::bind().context("PDF engine unavailable")?;
    if !cli.quiet {
        eprintln!("{} {}", green("✔"), engine.describe());
    }

    // ── Build config ─────────────────────────────────────────────────────
    if !cli.dir.is_dir() {
        anyhow::bail!("'{}' is not a directory", cli.dir.display());
    }

    let progress: ProgressCallback = if show_progress {
        BarProgress::new()
    } else {
        Arc::new(LineProgress { quiet: cli.quiet })
    };

    let config = ExtractionConfig::builder()
        .zoom(cli.zoom)
        .progress_callback(progress)
        .build()
        .context("Invalid configuration")?;

    // ── Run the batch ────────────────────────────────────────────────────
    let report = run_batch(&engine, &cli.dir, &config)
        .with_context(|| format!("Failed to scan {}", cli.dir.display()))?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialise report")?
        );
    }

    if !cli.quiet {
        print_summary(&report, &config.output_root);
    }

    Ok(())
}

fn print_summary(report: &BatchReport, output_root: &str) {
    if report.discovered == 0 {
        eprintln!("No PDF files found in {}.", report.directory.display());
        return;
    }

    let failed = report.failed();
    eprintln!(
        "{} {}/{} documents extracted, {} pages  {}",
        if failed == 0 { green("✔") } else { cyan("⚠") },
        bold(&report.succeeded().to_string()),
        report.discovered,
        report.total_pages(),
        if failed == 0 {
            String::new()
        } else {
            red(&format!("({failed} failed)"))
        },
    );
    eprintln!(
        "   {}",
        dim(&format!(
            "bundles written under {}",
            report.directory.join(output_root).display()
        ))
    );
}
