//! Command-line entry point for the Pagesmith pipeline.

use clap::Parser;
use pagesmith::{JsonDirSink, Orchestrator, PipelineConfig, RenderConfig, SelectionPolicy};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pagesmith", about = "Generate FAQ, product, and comparison pages from one product record", version)]
struct Args {
    /// Path to the product data JSON file
    #[arg(long, default_value = "data/product_data.json")]
    input: PathBuf,

    /// Output directory for the generated documents
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Fail on schema violations instead of warning
    #[arg(long)]
    strict: bool,

    /// Cap the FAQ at a round-robin selection of this many questions minimum
    /// (default: publish every generated question)
    #[arg(long)]
    faq_min_count: Option<usize>,

    /// Print per-stage execution statistics after the run
    #[arg(long)]
    stats: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let raw_text = fs::read_to_string(&args.input)
        .map_err(|err| format!("cannot read {}: {err}", args.input.display()))?;
    let raw: Value = serde_json::from_str(&raw_text)
        .map_err(|err| format!("invalid JSON in {}: {err}", args.input.display()))?;

    let config = PipelineConfig {
        render: RenderConfig {
            strict: args.strict,
        },
        faq_selection: match args.faq_min_count {
            Some(min_count) => SelectionPolicy::RoundRobin { min_count },
            None => SelectionPolicy::PublishAll,
        },
        ..PipelineConfig::default()
    };

    let mut orchestrator = Orchestrator::new(config);
    let bundle = orchestrator.run(&raw)?;

    let mut sink = JsonDirSink::new(&args.output_dir);
    orchestrator.publish(&bundle, &mut sink)?;

    println!(
        "Generated {} pages ({} questions) in {}",
        bundle.metadata.pages_generated,
        bundle.metadata.total_questions_generated,
        args.output_dir.display()
    );

    if args.stats {
        println!("\nPer-stage statistics:");
        for snapshot in orchestrator.stats() {
            println!(
                "  {:.<24} {} exec(s), {:.3}s avg",
                snapshot.name, snapshot.executions, snapshot.average_time
            );
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
