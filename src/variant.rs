//! Variant records produced by the ANNOVAR reader.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::VariationType;

/// The coding consequence of a variant on one transcript.
///
/// Positions are zero-based offsets derived from the 1-based annotation by
/// subtracting one. An annotated position of `0` is kept as `-1`.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct MutationSyntax {
    pub transcript_id: String,
    pub transcript_position: i64,
    pub protein_start_position: i64,
    pub coding_dna: String,
    pub protein: String,
    pub gene_id: String,
}

/// One genomic mutation event with its per-transcript coding consequences.
///
/// A `Variant` is not modified after construction; all fields are exposed through accessors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    id: String,
    #[serde(rename = "type")]
    variation_type: VariationType,
    chromosome: String,
    genomic_start: u64,
    reference: String,
    alternate: String,
    coding: HashMap<String, MutationSyntax>,
    is_homozygous: bool,
    is_synonymous: bool,
    #[serde(default)]
    experimental_design: Option<serde_json::Value>,
}

impl Variant {
    /// Build a variant, keying the coding consequences by transcript id.
    /// A later consequence for the same transcript replaces an earlier one.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        variation_type: VariationType,
        chromosome: String,
        genomic_start: u64,
        reference: String,
        alternate: String,
        coding: impl IntoIterator<Item = MutationSyntax>,
        is_homozygous: bool,
        is_synonymous: bool,
        experimental_design: Option<serde_json::Value>,
    ) -> Self {
        let coding = coding
            .into_iter()
            .map(|syntax| (syntax.transcript_id.clone(), syntax))
            .collect();
        Self {
            id,
            variation_type,
            chromosome,
            genomic_start,
            reference,
            alternate,
            coding,
            is_homozygous,
            is_synonymous,
            experimental_design,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn variation_type(&self) -> VariationType {
        self.variation_type
    }
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }
    pub fn genomic_start(&self) -> u64 {
        self.genomic_start
    }
    pub fn reference(&self) -> &str {
        &self.reference
    }
    pub fn alternate(&self) -> &str {
        &self.alternate
    }
    /// Coding consequences keyed by uppercased transcript id.
    pub fn coding(&self) -> &HashMap<String, MutationSyntax> {
        &self.coding
    }
    pub fn is_homozygous(&self) -> bool {
        self.is_homozygous
    }
    pub fn is_synonymous(&self) -> bool {
        self.is_synonymous
    }
    pub fn experimental_design(&self) -> Option<&serde_json::Value> {
        self.experimental_design.as_ref()
    }

    /// Gene symbols touched by this variant, sorted and without repeats.
    pub fn genes(&self) -> Vec<&str> {
        let mut genes: Vec<&str> = self.coding.values().map(|s| s.gene_id.as_str()).collect();
        genes.sort_unstable();
        genes.dedup();
        genes
    }
}
