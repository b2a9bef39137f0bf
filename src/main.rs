use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, Level};
use rs_annovar::{AnnovarReader, GeneFilter, ReaderConfig};

/// Parse an ANNOVAR exonic_variant_function file and print the variants as JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// ANNOVAR exonic annotation file
    input: PathBuf,
    /// Keep only variants of this gene (repeatable)
    #[arg(short, long = "gene")]
    genes: Vec<String>,
    /// JSON value attached to every variant as its experimental design
    #[arg(short, long)]
    design: Option<String>,
    /// JSON reader configuration; --gene and --design take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = Level::Warn)]
    log_level: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();
    simple_logger::init_with_level(args.log_level)?;

    let mut config = match &args.config {
        Some(path) => ReaderConfig::from_json_file(path)?,
        None => ReaderConfig::default(),
    };
    if !args.genes.is_empty() {
        config = config.with_gene_filter(GeneFilter::new(&args.genes));
    }
    if let Some(design) = &args.design {
        let design = serde_json::from_str(design).context("--design is not valid JSON")?;
        config = config.with_experimental_design(design);
    }

    let report = AnnovarReader::new(config)
        .read_path(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;
    info!(
        "{} variants, {} warnings",
        report.variants.len(),
        report.warnings.len()
    );
    println!("{}", serde_json::to_string_pretty(&report.variants)?);
    Ok(())
}
