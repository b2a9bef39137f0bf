use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The mechanism of a mutation event as annotated by ANNOVAR.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[allow(clippy::upper_case_acronyms)]
pub enum VariationType {
    SNP,
    DEL,
    FSDEL,
    INS,
    FSINS,
    UNKNOWN,
}
impl Default for VariationType {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

/// (functional effect, event kind) pairs recognized in the ANNOVAR exonic function column.
const CLASSIFICATION: &[(&str, &str, VariationType)] = &[
    ("synonymous", "snv", VariationType::SNP),
    ("nonsynonymous", "snv", VariationType::SNP),
    ("stoploss", "snv", VariationType::SNP),
    ("stopgain", "snv", VariationType::SNP),
    ("nonframeshift", "deletion", VariationType::DEL),
    ("frameshift", "deletion", VariationType::FSDEL),
    ("nonframeshift", "insertion", VariationType::INS),
    ("frameshift", "insertion", VariationType::FSINS),
];

impl VariationType {
    /// Classify a lowercase (effect, kind) token pair.
    /// ```
    /// use rs_annovar::VariationType;
    /// assert_eq!(VariationType::classify("frameshift", "insertion"), VariationType::FSINS);
    /// assert_eq!(VariationType::classify("splicing", "snv"), VariationType::UNKNOWN);
    /// ```
    pub fn classify(effect: &str, kind: &str) -> Self {
        CLASSIFICATION
            .iter()
            .find(|(e, k, _)| *e == effect && *k == kind)
            .map(|(_, _, t)| *t)
            .unwrap_or_default()
    }
}
