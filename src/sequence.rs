//! Plain sequence values built by the FASTA and line readers.
use serde::{Deserialize, Serialize};

/// Construct a sequence value from an already normalized sequence and an optional identifier.
pub trait FromSequence {
    fn from_sequence(seq: String, id: Option<String>) -> Self;
}

#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct Peptide {
    pub seq: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct Protein {
    pub id: Option<String>,
    pub seq: String,
}

/// An RNA or coding sequence for a transcript.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct Transcript {
    pub id: Option<String>,
    pub seq: String,
}

impl FromSequence for Peptide {
    fn from_sequence(seq: String, _id: Option<String>) -> Self {
        Self { seq }
    }
}
impl FromSequence for Protein {
    fn from_sequence(seq: String, id: Option<String>) -> Self {
        Self { id, seq }
    }
}
impl FromSequence for Transcript {
    fn from_sequence(seq: String, id: Option<String>) -> Self {
        Self { id, seq }
    }
}
