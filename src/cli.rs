use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use custclean::io::{default_output_path, load_df, save_df};
use custclean::pipeline::{PipelineSpec, Step, run_pipeline};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "custclean", about = "Clean tabular customer data", version)]
pub struct Cli {
    /// Also write rotating log files to the platform data directory
    #[arg(long, global = true)]
    pub log_to_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a file and save the result
    Clean {
        /// Input file path (CSV, Parquet, JSON)
        #[arg(short, long)]
        file: PathBuf,

        /// Output file path. Defaults to `<stem>_cleaned.csv` next to the input.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to a JSON pipeline spec. Defaults to the standard sequence.
        #[arg(long)]
        spec: Option<PathBuf>,

        /// Truncate the numeric columns to integers after cleaning
        #[arg(long)]
        to_int: bool,
    },
    /// Print or save the standard pipeline spec as JSON
    Spec {
        /// Write the spec to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the steps a pipeline runs
    Steps {
        /// Path to a JSON pipeline spec. Defaults to the standard sequence.
        #[arg(long)]
        spec: Option<PathBuf>,
    },
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Clean {
            file,
            output,
            spec,
            to_int,
        } => handle_clean(&file, output, spec.as_deref(), to_int),
        Commands::Spec { output } => handle_spec(output.as_deref()),
        Commands::Steps { spec } => handle_steps(spec.as_deref()),
    }
}

fn load_spec(path: Option<&Path>) -> Result<PipelineSpec> {
    match path {
        Some(path) => PipelineSpec::from_file(path)
            .with_context(|| format!("Failed to load pipeline spec {}", path.display())),
        None => Ok(PipelineSpec::standard()),
    }
}

fn handle_clean(
    file: &Path,
    output: Option<PathBuf>,
    spec: Option<&Path>,
    to_int: bool,
) -> Result<()> {
    let mut spec = load_spec(spec)?;
    if to_int {
        spec = spec.with_step(Step::NumericToInt);
    }

    let df = load_df(file).with_context(|| format!("Failed to load {}", file.display()))?;
    let (mut cleaned, report) = run_pipeline(&spec, &df)
        .with_context(|| format!("Pipeline '{}' failed", spec.name))?;

    let output = output.unwrap_or_else(|| default_output_path(file));
    save_df(&mut cleaned, &output)
        .with_context(|| format!("Failed to save {}", output.display()))?;

    println!("{}", report.summary());
    println!("Saved cleaned data to {}", output.display());
    Ok(())
}

fn handle_spec(output: Option<&Path>) -> Result<()> {
    let spec = PipelineSpec::standard();
    match output {
        Some(path) => {
            spec.to_file(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote pipeline spec to {}", path.display());
        }
        None => println!("{}", spec.to_json()?),
    }
    Ok(())
}

fn handle_steps(spec: Option<&Path>) -> Result<()> {
    let spec = load_spec(spec)?;
    println!("{} (v{})", spec.name, spec.version);
    for (idx, step) in spec.steps.iter().enumerate() {
        println!("{:>2}. {:<22} {}", idx + 1, step.name(), step.description());
    }
    Ok(())
}
