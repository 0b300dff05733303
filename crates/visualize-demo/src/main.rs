// File: crates/visualize-demo/src/main.rs
// Summary: Demo CLI; loads a CSV table and renders it as a bar, line, area or pie chart PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use visualize_core::{ConfigOverrides, Table};

const BUILTIN_TYPES: [&str; 4] = ["bar", "line", "area", "pie"];

#[derive(Parser, Debug)]
#[command(name = "visualize-demo")]
#[command(about = "Render a CSV table (first row and column are headers) to a chart PNG")]
struct Args {
    /// CSV input; defaults to the bundled sample
    input: Option<PathBuf>,

    /// Chart type: bar, line, area, pie (or any registered variant)
    #[arg(short = 't', long = "type")]
    chart_type: Option<String>,

    /// JSON file with option overrides (camelCase option names)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output PNG path; defaults to target/out/chart_<stem>_<type>.png
    #[arg(short, long)]
    out: Option<PathBuf>,

    #[arg(long)]
    width: Option<f32>,

    #[arg(long)]
    height: Option<f32>,

    /// Chart title; the file name is used when unset
    #[arg(long)]
    title: Option<String>,

    /// Theme preset: light, dark, solarized-light
    #[arg(long)]
    theme: Option<String>,

    /// Render every built-in type instead of one
    #[arg(long)]
    all: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let path = args
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/fruit_week.csv"));
    println!("Using input file: {}", path.display());

    let table = Table::from_csv_path(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows", table.rows.len());

    let mut user = match &args.config {
        Some(cfg) => ConfigOverrides::from_json_path(cfg)
            .with_context(|| format!("failed to read options '{}'", cfg.display()))?,
        None => ConfigOverrides::default(),
    };
    user.width = args.width.or(user.width);
    user.height = args.height.or(user.height);
    user.title = args.title.clone().or(user.title);
    user.theme = args.theme.clone().or(user.theme);

    let types: Vec<String> = if args.all {
        BUILTIN_TYPES.iter().map(|t| t.to_string()).collect()
    } else {
        let t = args.chart_type.clone().or_else(|| user.chart_type.clone()).unwrap_or_else(|| "bar".into());
        vec![t]
    };

    let mut vis = visualize_plugins::builtin_visualizer();
    for chart_type in &types {
        user.chart_type = Some(chart_type.clone());
        let rendered = vis.render(&table, &user)?;

        let out = match (&args.out, args.all) {
            (Some(out), false) => out.clone(),
            _ => out_name_with(&path, chart_type),
        };
        rendered.write_png(&out)?;
        info!(chart_type = %chart_type, width = rendered.width, height = rendered.height, "wrote chart");
        println!("Wrote {}", out.display());
        for entry in &rendered.legend {
            let c = entry.color;
            println!("  #{:02x}{:02x}{:02x}  {}", c.r(), c.g(), c.b(), entry.label);
        }
    }

    Ok(())
}

/// Produce output file name like target/out/chart_<stem>_<type>.png
fn out_name_with(input: &Path, chart_type: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    if stem.is_empty() {
        out.push(format!("chart_{}.png", chart_type));
    } else {
        out.push(format!("chart_{}_{}.png", stem, chart_type));
    }
    out
}
