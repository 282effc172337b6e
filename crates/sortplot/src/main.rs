// File: crates/sortplot/src/main.rs
// Summary: CLI entry point; renders benchmark charts or regenerates the CSV data.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use sortplot::cases::BenchCase;
use sortplot::generator::{self, GenOptions};
use sortplot::pipeline::{render_case, RenderSettings};

#[derive(Parser)]
#[command(name = "sortplot", version, about = "Render sorting benchmark charts from CSV data")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Render comparison and swaps charts from benchmark CSVs
    Render(RenderArgs),
    /// Regenerate benchmark CSVs by running the instrumented sorts
    Gen(GenArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Benchmark case to render
    #[arg(long, value_enum, default_value_t = CaseOpt::All)]
    case: CaseOpt,
    /// Input CSV path (requires a single --case)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Directory containing the benchmark CSVs
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
    /// Directory that receives the PNGs
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Theme preset name
    #[arg(long, default_value = "light")]
    theme: String,
    /// Do not open the saved charts in an image viewer
    #[arg(long)]
    no_show: bool,
}

#[derive(Args)]
struct GenArgs {
    /// Benchmark case to generate
    #[arg(long, value_enum, default_value_t = CaseOpt::All)]
    case: CaseOpt,
    /// Directory that receives the CSVs
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Comma-separated array sizes (default: 100..=1000 step 100)
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,
    /// Fixed run count per size (default: runs == array size)
    #[arg(long)]
    runs: Option<usize>,
    /// RNG seed for reproducible data
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CaseOpt {
    Median,
    Min,
    Max,
    All,
}

impl CaseOpt {
    fn cases(self) -> Vec<BenchCase> {
        match self {
            CaseOpt::Median => vec![BenchCase::Median],
            CaseOpt::Min => vec![BenchCase::Min],
            CaseOpt::Max => vec![BenchCase::Max],
            CaseOpt::All => BenchCase::ALL.to_vec(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        CliCommand::Render(args) => run_render(args),
        CliCommand::Gen(args) => run_gen(args),
    }
}

fn run_render(args: RenderArgs) -> Result<()> {
    let cases = args.case.cases();
    if args.input.is_some() && cases.len() != 1 {
        anyhow::bail!("--input requires a single --case (median, min, or max)");
    }
    let settings = RenderSettings {
        data_dir: args.data_dir,
        out_dir: args.out_dir,
        input_override: args.input,
        theme: args.theme,
        show: !args.no_show,
    };
    for case in cases {
        render_case(case, &settings)?;
    }
    Ok(())
}

fn run_gen(args: GenArgs) -> Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let opts = GenOptions {
        sizes: args.sizes,
        runs_override: args.runs,
        seed: args.seed,
    };
    for case in args.case.cases() {
        let out = args.out_dir.join(case.data_file());
        generator::generate_case(case, &out, &opts)?;
        println!("Data written to {}", out.display());
    }
    Ok(())
}
