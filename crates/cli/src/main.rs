use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use closest::pair::rand::{grid_points, uniform_points, Bounds2};
use closest::{Algorithm, PairError, Point};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod input;
mod output;
mod provenance;

use output::{render_text, PairReport, INSUFFICIENT_MSG};
use provenance::{report_block, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "closest-cli")]
#[command(about = "Closest pair of points in the plane")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Find the closest pair among the points in a file
    Solve {
        /// Text file of `x y` pairs, or a CSV with `x` and `y` columns
        #[arg(long, default_value = "points.txt")]
        input: PathBuf,
        /// dc (divide and conquer) or brute
        #[arg(long, default_value = "dc")]
        algo: Algorithm,
        /// Print JSON instead of the text block
        #[arg(long)]
        json: bool,
    },
    /// Write a random point file plus a provenance sidecar
    Generate {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = Layout::Uniform)]
        layout: Layout,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Layout {
    /// Uniform in [-1000, 1000)²
    Uniform,
    /// Unit lattice, row-major, truncated to n
    Grid,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { input, algo, json } => {
            solve(&input, algo, json, &mut io::stdout().lock())
        }
        Action::Generate {
            n,
            seed,
            layout,
            out,
        } => generate(n, seed, layout, &out),
        Action::Report => report(),
    }
}

fn solve<W: Write>(input: &Path, algo: Algorithm, json: bool, out: &mut W) -> Result<()> {
    tracing::info!(input = %input.display(), %algo, "solve");
    let points = input::read_points(input)?;
    let n = points.len();
    tracing::debug!(n, "points_read");

    let started = Instant::now();
    match algo.solve(&points) {
        Ok(best) => {
            let elapsed_ms = started.elapsed().as_secs_f64() * 1e3;
            tracing::info!(n, dist = best.dist, elapsed_ms, "solved");
            if json {
                let report = PairReport::new(&best, n, algo);
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                write!(out, "{}", render_text(&best))?;
            }
        }
        Err(PairError::InsufficientInput { got }) => {
            tracing::warn!(got, "insufficient_input");
            if json {
                let obj = serde_json::json!({ "error": "insufficient_input", "n": got });
                writeln!(out, "{}", serde_json::to_string_pretty(&obj)?)?;
            } else {
                writeln!(out, "{INSUFFICIENT_MSG}")?;
            }
        }
    }
    Ok(())
}

fn generate(n: usize, seed: u64, layout: Layout, out: &Path) -> Result<()> {
    tracing::info!(n, seed, ?layout, out = %out.display(), "generate");
    let points = match layout {
        Layout::Uniform => uniform_points(n, Bounds2::default(), seed),
        Layout::Grid => {
            let cols = ((n as f64).sqrt().ceil() as usize).max(1);
            let rows = n.div_ceil(cols);
            let mut pts = grid_points(cols, rows, 1.0);
            pts.truncate(n);
            pts
        }
    };

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, format_points(&points))
        .with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "n": n,
        "seed": seed,
        "layout": format!("{layout:?}").to_lowercase(),
    });
    let prov = write_sidecar(out, Payload::new(params))?;
    tracing::info!(provenance = %prov.display(), "generated");
    Ok(())
}

/// One `x y` line per point, shortest round-trip formatting.
fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{} {}\n", p.x, p.y))
        .collect()
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report_block())?);
    Ok(())
}
