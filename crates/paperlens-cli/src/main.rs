//! PaperLens CLI - Command-line interface
//!
//! Usage:
//!   paperlens analyze <paper.pdf> [--output graph.html] [--json]

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use paperlens_core::{AppConfig, EntityCategory};
use paperlens_pipeline::{PaperAnalysis, Pipeline};

#[derive(Parser)]
#[command(name = "paperlens")]
#[command(about = "Extract authors, organizations and citations from a paper and build a knowledge graph")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a paper (PDF or plain text)
    Analyze {
        /// Path to the paper
        file: PathBuf,

        /// Write the interactive graph HTML to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the full analysis as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => {
            AppConfig::from_env().context("failed to load configuration from environment")?
        }
    };

    match cli.command {
        Commands::Analyze { file, output, json } => {
            let pipeline = Pipeline::new(config);
            let analysis = pipeline
                .analyze_path(&file)
                .with_context(|| format!("failed to analyze {}", file.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_summary(&analysis);
            }

            if let Some(path) = output {
                std::fs::write(&path, &analysis.graph_html)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("\nGraph written to {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_summary(analysis: &PaperAnalysis) {
    println!("{} ({})", analysis.file_name, analysis.file_type);
    if let Some(pages) = analysis.page_count {
        println!("{} pages, {} words", pages, analysis.word_count);
    } else {
        println!("{} words", analysis.word_count);
    }

    for category in [
        EntityCategory::Author,
        EntityCategory::Organization,
        EntityCategory::Citation,
    ] {
        println!("\n{}s:", category);
        for line in analysis.entities.display_lines(category) {
            println!("  {line}");
        }
    }

    println!(
        "\nKnowledge graph: {} nodes, {} edges",
        analysis.node_count, analysis.edge_count
    );
}
