use std::fs;
use std::hint::black_box;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use seqbench::{create_array, create_shuffled_array, run_lazy, run_reference, Pipeline};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "seqbench",
    version,
    about = "lazyseq pipeline benchmark harness"
)]
struct Cli {
    /// Number of elements in the benchmark dataset.
    #[arg(long, default_value_t = 1000)]
    size: u32,
    /// Timed iterations per pipeline.
    #[arg(long, default_value_t = 100)]
    iterations: u32,
    /// RNG seed for the shuffled dataset.
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Output directory for summary.json.
    #[arg(long, default_value = "target/seqbench")]
    out_dir: PathBuf,
    /// Fail if any pipeline's average lazy time exceeds this value.
    #[arg(long)]
    max_avg_lazy_ns: Option<u64>,
}

#[derive(Debug, Serialize)]
struct PipelineReport {
    pipeline: &'static str,
    iterations: u32,
    output_len: usize,
    avg_lazy_ns: u64,
    avg_reference_ns: u64,
}

#[derive(Debug, Serialize)]
struct Summary {
    size: u32,
    iterations: u32,
    seed: u64,
    pipelines: Vec<PipelineReport>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    anyhow::ensure!(cli.iterations > 0, "--iterations must be positive");

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create output dir {}", cli.out_dir.display()))?;

    let sequential = create_array(cli.size);
    let shuffled = create_shuffled_array(cli.size, cli.seed);

    let mut summary = Summary {
        size: cli.size,
        iterations: cli.iterations,
        seed: cli.seed,
        pipelines: Vec::new(),
    };

    for pipeline in Pipeline::ALL {
        let data: &[i64] = if pipeline.uses_shuffled_data() {
            &shuffled
        } else {
            &sequential
        };

        let reference = run_reference(pipeline, data);
        let lazy = run_lazy(pipeline, data)
            .with_context(|| format!("run pipeline {}", pipeline.name()))?;
        anyhow::ensure!(
            lazy == reference,
            "pipeline {} diverged from the reference output",
            pipeline.name()
        );

        let avg_lazy_ns = time_avg_ns(cli.iterations, || {
            let _ = black_box(run_lazy(black_box(pipeline), black_box(data)));
        });
        let avg_reference_ns = time_avg_ns(cli.iterations, || {
            let _ = black_box(run_reference(black_box(pipeline), black_box(data)));
        });

        println!(
            "{:<18} lazy {avg_lazy_ns:>9} ns/iter  reference {avg_reference_ns:>9} ns/iter  ({} elements out)",
            pipeline.name(),
            lazy.len()
        );

        summary.pipelines.push(PipelineReport {
            pipeline: pipeline.name(),
            iterations: cli.iterations,
            output_len: lazy.len(),
            avg_lazy_ns,
            avg_reference_ns,
        });
    }

    if let Some(budget) = cli.max_avg_lazy_ns {
        for report in &summary.pipelines {
            anyhow::ensure!(
                report.avg_lazy_ns <= budget,
                "pipeline {} average {} ns exceeds budget {} ns",
                report.pipeline,
                report.avg_lazy_ns,
                budget
            );
        }
    }

    write_summary_json(&cli.out_dir, &summary)?;
    Ok(())
}

fn time_avg_ns(iterations: u32, mut run: impl FnMut()) -> u64 {
    let start = Instant::now();
    for _ in 0..iterations {
        run();
    }
    let total = start.elapsed().as_nanos() / u128::from(iterations);
    u64::try_from(total).unwrap_or(u64::MAX)
}

fn write_summary_json(out_dir: &Path, summary: &Summary) -> Result<()> {
    let path = out_dir.join("summary.json");
    let contents = serde_json::to_string_pretty(summary).context("serialize summary")?;
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
