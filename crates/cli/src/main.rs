use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use bfhull::cloud::{draw_cloud, CloudCfg, ReplayToken, Shape};
use bfhull::{convex_hull_with, EvalCfg};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;
mod tmg;

use report::{Format, Run};

#[derive(Parser)]
#[command(name = "bfhull")]
#[command(about = "Brute-force convex hull of labeled 2D points")]
struct Cmd {
    /// Log verbosity on stderr: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of the vertices in a TMG file
    Hull {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::List)]
        format: Format,
        /// Treat |a·x + b·y - c| <= E as collinear (0 = exact comparison)
        #[arg(long, value_name = "E", default_value_t = 0.0)]
        collinear_eps: f64,
        /// Write output here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a seeded random point cloud as a TMG file
    Gen {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = ShapeArg::Disk)]
        shape: ShapeArg,
        /// Half side length (square, lattice) or radius (disk)
        #[arg(long, default_value_t = 100.0)]
        extent: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Square,
    Disk,
    Lattice,
}

impl From<ShapeArg> for Shape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Square => Shape::Square,
            ShapeArg::Disk => Shape::Disk,
            ShapeArg::Lattice => Shape::Lattice,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Hull {
            file,
            format,
            collinear_eps,
            out,
        } => hull(&file, format, collinear_eps, out.as_deref()),
        Action::Gen {
            count,
            seed,
            shape,
            extent,
            out,
        } => generate(count, seed, shape, extent, out.as_deref()),
    }
}

fn hull(file: &Path, format: Format, collinear_eps: f64, out: Option<&Path>) -> Result<()> {
    let points = tmg::read_points(file)?;
    tracing::info!(file = %file.display(), points = points.len(), ?format, "hull");
    let cfg = EvalCfg::with_collinear_eps(collinear_eps);
    let started = Instant::now();
    let (edge_report, poly) = convex_hull_with(&points, cfg);
    let elapsed = started.elapsed();
    let poly = poly.with_context(|| format!("computing hull of {}", file.display()))?;
    tracing::info!(
        edges = edge_report.edges.len(),
        vertices = poly.len(),
        elapsed_us = report::elapsed_micros(elapsed),
        "hull_done"
    );
    let run = Run {
        points: &points,
        collinear_eps: cfg.collinear_eps,
        report: &edge_report,
        poly: &poly,
        elapsed,
    };
    emit(out, &report::render(format, &run)?)
}

fn generate(
    count: usize,
    seed: u64,
    shape: ShapeArg,
    extent: f64,
    out: Option<&Path>,
) -> Result<()> {
    tracing::info!(count, seed, ?shape, extent, "gen");
    let cfg = CloudCfg {
        count,
        shape: shape.into(),
        half_extent: extent,
        dedup: true,
    };
    let points = draw_cloud(cfg, ReplayToken::new(seed));
    if points.len() < count {
        tracing::warn!(
            requested = count,
            drawn = points.len(),
            "lattice too small for the requested count"
        );
    }
    emit(out, &tmg::write_points(&points))
}

fn emit(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            print!("{text}");
            Ok(())
        }
    }
}
