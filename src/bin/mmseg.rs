//! Command-line segmenter.
//!
//! ```bash
//! cargo run --features cli -- --dict words.dic --freq chars.dic          # interactive
//! cargo run --features cli -- --dict words.dic --freq chars.dic book.txt # batch
//! ```

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mmseg::{MmSeg, DEFAULT_DEPTH};

/// Segment unspaced text into words with MMSeg.
#[derive(Debug, Parser)]
#[command(name = "mmseg", version)]
struct Args {
    /// Word list, one word per line.
    #[arg(long, default_value = "words.dic")]
    dict: PathBuf,

    /// Character frequencies, `<char> <count>` per line.
    #[arg(long, default_value = "chars.dic", conflicts_with = "no_freq")]
    freq: PathBuf,

    /// Skip the frequency table.
    #[arg(long)]
    no_freq: bool,

    /// Look-ahead in words.
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Segment this file and report timing instead of reading stdin.
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let freq = (!args.no_freq).then_some(args.freq.as_path());
    let seg = MmSeg::load(&args.dict, freq)
        .with_context(|| format!("loading {}", args.dict.display()))?
        .with_depth(args.depth);

    match &args.input {
        Some(path) => run_batch(&seg, path),
        None => run_interactive(&seg),
    }
}

fn run_batch(seg: &MmSeg, path: &Path) -> anyhow::Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let chars: Vec<char> = text.chars().collect();

    let start = Instant::now();
    let words = seg.segment(&chars);
    info!(
        "segmented {} in {} ms",
        path.display(),
        start.elapsed().as_millis()
    );

    println!(
        "Done in {} seconds, {} words from {} chars",
        start.elapsed().as_secs(),
        words.len(),
        chars.len()
    );
    Ok(())
}

fn run_interactive(seg: &MmSeg) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "Input String: ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let words = seg.segment_str(line.trim());
        writeln!(stdout, "{}", words.join("  "))?;
    }
}

fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_target(false)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}

/// `RUST_LOG`-style directives, falling back to `info` when unset or invalid.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
