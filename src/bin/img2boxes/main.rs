// img2boxes - Convert a grass placement image to a cluster list
//
// Pipeline:
//   1. Load config (file, then flags on top)
//   2. Decode image, classify every pixel to a height
//   3. Row pass: 1xN runs
//   4. Cluster pass: stack runs into MxN boxes
//   5. Write ([(h,x,y,w,h), ...]) for the grass loader
//
// Usage: cargo run --bin img2boxes -- <image> [output] [--lookahead N] [--verify]

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use grass_clusters::{Config, process};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "img2boxes", version, about = "Cluster a grass placement image into rectangles")]
struct Cli {
    /// Placement image (any format the image crate decodes)
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,
    /// Output file
    #[arg(value_hint = ValueHint::FilePath, default_value = "grass_placement.ron")]
    output: PathBuf,

    /// RON config file; flags below override it
    #[arg(long = "config", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Cap on cluster width and height
    #[arg(long = "max-cluster-size")]
    max_cluster_size: Option<u32>,
    /// Vertical merge search window, in list entries
    #[arg(long = "lookahead")]
    lookahead: Option<usize>,
    /// Color meaning "no grass", as R,G,B
    #[arg(long = "empty-color", value_parser = parse_rgb)]
    empty_color: Option<[u8; 3]>,
    /// Heights below this are written as 0
    #[arg(long = "threshold")]
    threshold: Option<f64>,

    /// Build row runs in parallel
    #[arg(long = "parallel", action = ArgAction::SetTrue)]
    parallel: bool,
    /// Check coverage, overlap, caps and uniformity before writing
    #[arg(long = "verify", action = ArgAction::SetTrue)]
    verify: bool,
}

fn parse_rgb(s: &str) -> Result<[u8; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!("expected R,G,B, got '{s}'"));
    };
    let channel = |v: &str| v.parse::<u8>().map_err(|e| format!("bad channel '{v}': {e}"));
    Ok([channel(*r)?, channel(*g)?, channel(*b)?])
}

fn build_config(cli: &Cli) -> Result<Config> {
    let mut cfg = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(v) = cli.max_cluster_size { cfg.cluster.max_cluster_size = v; }
    if let Some(v) = cli.lookahead { cfg.cluster.max_lookahead = v; }
    if let Some(v) = cli.empty_color { cfg.classifier.empty_color = v; }
    if let Some(v) = cli.threshold { cfg.classifier.threshold = v; }
    if cli.parallel { cfg.cluster.parallel_rows = true; }
    if cli.verify { cfg.verify = true; }
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = build_config(&cli)?;

    info!("Starting calculation with a max cluster size of {}", cfg.cluster.max_cluster_size);
    let start = Instant::now();

    let conversion = process(&cli.input, &cli.output, &cfg)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;

    println!(
        "{}x{} grid: {} row boxes -> {} clusters, written to {} ({} ms)",
        conversion.grid_width,
        conversion.grid_height,
        conversion.row_boxes,
        conversion.clusters.len(),
        cli.output.display(),
        start.elapsed().as_millis(),
    );
    Ok(())
}
