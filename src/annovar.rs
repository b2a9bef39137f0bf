//! Reader for ANNOVAR gene-based `exonic_variant_function` output.
//!
//! Every non-blank line is a tab-delimited record whose first nine columns are
//! the line id, the exonic function, the amino acid change, chromosome, start,
//! end, reference allele, alternate allele and zygosity.
//! ```
//! use rs_annovar::annovar::{AnnovarReader, ReaderConfig};
//! use rs_annovar::VariationType;
//!
//! let input = "line1\tnonsynonymous SNV\tEGFR:NM_005228:exon1:c.G35A:p.G12D,\tchr7\t100\t100\tG\tA\thet\n";
//! let report = AnnovarReader::new(ReaderConfig::default())
//!     .read(input.as_bytes())
//!     .unwrap();
//! let variant = &report.variants[0];
//! assert_eq!(variant.variation_type(), VariationType::SNP);
//! assert_eq!(variant.coding()["NM_005228"].transcript_position, 34);
//! ```

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::syntax::annotations;
use crate::{Variant, VariationType};

/// Number of leading columns every record must provide.
pub const ANNOVAR_FIELDS: usize = 9;
const UNKNOWN_GENE: &str = "UNKNOWN";

/// Allow-list of gene symbols. An empty filter accepts every gene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct GeneFilter {
    genes: BTreeSet<String>,
}
impl GeneFilter {
    pub fn new<I, S>(genes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            genes: genes
                .into_iter()
                .map(|g| g.as_ref().trim().to_uppercase())
                .collect(),
        }
    }
    /// `gene` is expected to be uppercased already.
    pub fn allows(&self, gene: &str) -> bool {
        self.genes.is_empty() || self.genes.contains(gene)
    }
}
impl From<Vec<String>> for GeneFilter {
    fn from(value: Vec<String>) -> Self {
        Self::new(value)
    }
}
impl From<GeneFilter> for Vec<String> {
    fn from(value: GeneFilter) -> Self {
        value.genes.into_iter().collect()
    }
}

/// Options controlling which records are kept and what is attached to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub gene_filter: GeneFilter,
    /// Passed through unchanged to every variant.
    pub experimental_design: Option<serde_json::Value>,
}
impl ReaderConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, AnnovarError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AnnovarError::FileNotFound(path.to_path_buf()));
        }
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
    pub fn with_gene_filter(mut self, gene_filter: GeneFilter) -> Self {
        self.gene_filter = gene_filter;
        self
    }
    pub fn with_experimental_design(mut self, design: serde_json::Value) -> Self {
        self.experimental_design = Some(design);
        self
    }
}

#[derive(Error, Debug)]
pub enum AnnovarError {
    #[error("ANNOVAR file `{}` does not exist", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to read ANNOVAR input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line}: expected at least 9 tab-separated fields, found {fields}")]
    MalformedRecord { line: usize, fields: usize },
    #[error("Line {line}: genomic start `{value}` is not a non-negative integer")]
    InvalidGenomicStart { line: usize, value: String },
    #[error("Invalid reader configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Recoverable anomalies met while reading. Each one is also logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseWarning {
    /// The record's gene is `UNKNOWN`; the record was dropped.
    UnknownGene { line: usize, mutation_id: String },
    /// The exonic function has no event kind; the variant was kept as `UNKNOWN`.
    MissingEventKind {
        line: usize,
        mutation_id: String,
        mutation_type: String,
    },
}
impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ParseWarning::UnknownGene { line, mutation_id } => {
                write!(f, "Line {line}: skipping `{mutation_id}` with UNKNOWN gene")
            }
            ParseWarning::MissingEventKind {
                line,
                mutation_id,
                mutation_type,
            } => write!(
                f,
                "Line {line}: mutation type `{mutation_type}` of `{mutation_id}` has no event kind, using UNKNOWN"
            ),
        }
    }
}

/// The result of parsing a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Emitted {
        variant: Variant,
        warning: Option<ParseWarning>,
    },
    Skipped(Option<ParseWarning>),
}

/// Variants in input order plus the warnings raised on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnovarReport {
    pub variants: Vec<Variant>,
    pub warnings: Vec<ParseWarning>,
}

#[derive(Debug, Clone, Default)]
pub struct AnnovarReader {
    config: ReaderConfig,
}

impl AnnovarReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Open and parse an ANNOVAR file. The file is closed before returning.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<AnnovarReport, AnnovarError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AnnovarError::FileNotFound(path.to_path_buf()));
        }
        debug!("Reading ANNOVAR exonic annotation from {}", path.display());
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }

    /// Parse records from any buffered reader, stopping at the first fatal error.
    pub fn read<R: BufRead>(&self, reader: R) -> Result<AnnovarReport, AnnovarError> {
        let mut report = AnnovarReport::default();
        for (index, line) in reader.lines().enumerate() {
            match self.parse_line(&line?, index + 1)? {
                LineOutcome::Emitted { variant, warning } => {
                    report.variants.push(variant);
                    report.warnings.extend(warning);
                }
                LineOutcome::Skipped(warning) => report.warnings.extend(warning),
            }
        }
        debug!(
            "Parsed {} variants with {} warnings",
            report.variants.len(),
            report.warnings.len()
        );
        Ok(report)
    }

    /// Parse one record. `line_number` is 1-based and only used in errors and warnings.
    pub fn parse_line(&self, line: &str, line_number: usize) -> Result<LineOutcome, AnnovarError> {
        if line.trim().is_empty() {
            return Ok(LineOutcome::Skipped(None));
        }
        let fields = line
            .split('\t')
            .take(ANNOVAR_FIELDS)
            .map(|f| f.trim().to_lowercase())
            .collect::<Vec<_>>();
        let Some((mut_id, mut_type, detail, chrom, start, _stop, reference, alternate, zygosity)) =
            fields.into_iter().collect_tuple()
        else {
            return Err(AnnovarError::MalformedRecord {
                line: line_number,
                fields: line.split('\t').count(),
            });
        };

        let gene = primary_gene(&detail);
        if gene == UNKNOWN_GENE {
            let warning = ParseWarning::UnknownGene {
                line: line_number,
                mutation_id: mut_id,
            };
            warn!("{warning}");
            return Ok(LineOutcome::Skipped(Some(warning)));
        }
        if !self.config.gene_filter.allows(&gene) {
            return Ok(LineOutcome::Skipped(None));
        }

        let genomic_start = start
            .parse::<u64>()
            .map_err(|_| AnnovarError::InvalidGenomicStart {
                line: line_number,
                value: start.clone(),
            })?;

        let coding = annotations(&detail).map(|m| m.to_syntax());

        let tokens = mut_type.split_whitespace().collect::<Vec<_>>();
        let (variation_type, warning) = match tokens.as_slice() {
            [effect, kind, ..] => (VariationType::classify(effect, kind), None),
            _ => {
                let warning = ParseWarning::MissingEventKind {
                    line: line_number,
                    mutation_id: mut_id.clone(),
                    mutation_type: mut_type.clone(),
                };
                warn!("{warning}");
                (VariationType::UNKNOWN, Some(warning))
            }
        };
        let is_synonymous = tokens.first() == Some(&"synonymous");

        let variant = Variant::new(
            mut_id,
            variation_type,
            chrom,
            genomic_start,
            reference.to_uppercase(),
            alternate.to_uppercase(),
            coding,
            zygosity == "hom",
            is_synonymous,
            self.config.experimental_design.clone(),
        );
        Ok(LineOutcome::Emitted { variant, warning })
    }
}

/// The gene symbol before the first colon of the amino acid change column, uppercased.
pub fn primary_gene(detail: &str) -> String {
    detail
        .split(':')
        .next()
        .unwrap_or_default()
        .trim()
        .to_uppercase()
}

/// Read an ANNOVAR exonic file into variants, logging and discarding the warnings.
pub fn read_annovar_exonic<P: AsRef<Path>>(
    path: P,
    gene_filter: Option<GeneFilter>,
    experimental_design: Option<serde_json::Value>,
) -> Result<Vec<Variant>, AnnovarError> {
    let config = ReaderConfig {
        gene_filter: gene_filter.unwrap_or_default(),
        experimental_design,
    };
    Ok(AnnovarReader::new(config).read_path(path)?.variants)
}
