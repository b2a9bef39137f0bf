//! Readers that turn ANNOVAR exonic annotation output into typed variant records.
//!  * Each annotation line becomes a [Variant] with one [MutationSyntax] per annotated transcript.
//!  * The exonic function column is classified into a [VariationType].
//!  * FASTA and plain line files can be read into [sequence] values.
//! ```
//! # use std::io::Write;
//! use rs_annovar::{read_annovar_exonic, GeneFilter, VariationType};
//!
//! let mut file = tempfile::NamedTempFile::new().unwrap();
//! writeln!(file, "line1\tframeshift insertion\tBRCA1:NM_007294:exon10:c.3756_3757insA:p.S1253fs,\tchr17\t41245000\t41245000\t-\tT\thom").unwrap();
//! writeln!(file, "line2\tnonsynonymous SNV\tTP53:NM_000546:exon5:c.C524A:p.R175H,\tchr17\t7578406\t7578406\tC\tA\thet").unwrap();
//!
//! let variants = read_annovar_exonic(file.path(), Some(GeneFilter::new(["brca1"])), None).unwrap();
//! assert_eq!(variants.len(), 1);
//! assert_eq!(variants[0].variation_type(), VariationType::FSINS);
//! assert!(variants[0].is_homozygous());
//! ```
pub mod annovar;
mod descriptors;
pub use descriptors::*;
pub mod fasta;
pub mod sequence;
pub mod syntax;
mod variant;
pub use variant::*;

pub use annovar::{read_annovar_exonic, AnnovarError, AnnovarReader, GeneFilter, ReaderConfig};
