//! Tokenizer for the ANNOVAR amino acid change column.
//!
//! The column holds comma-separated transcript descriptions such as
//! `fgd3:nm_033086:exon6:c.g823a:p.v275i`. Each description is scanned for
//! the first window of five colon-separated parts shaped like
//! `gene:transcript:exonN:c.<coding>:p.<protein>`, where the coding and
//! protein notations must contain a position followed by a non-digit.

use std::iter::Peekable;
use std::str::Split;

use crate::MutationSyntax;

/// A transcript description found in an annotation field.
///
/// Positions are 1-based, exactly as written in the annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationMatch<'a> {
    /// The matched text from the gene symbol through the protein notation.
    pub mutation: &'a str,
    pub gene: &'a str,
    pub transcript: &'a str,
    pub transcript_position: i64,
    pub protein_position: i64,
    pub coding_dna: &'a str,
    pub protein: &'a str,
}

impl AnnotationMatch<'_> {
    /// Uppercase the identifiers and convert both positions to zero-based offsets.
    pub fn to_syntax(&self) -> MutationSyntax {
        MutationSyntax {
            transcript_id: self.transcript.to_uppercase(),
            transcript_position: self.transcript_position - 1,
            protein_start_position: self.protein_position - 1,
            coding_dna: self.coding_dna.to_owned(),
            protein: self.protein.to_owned(),
            gene_id: self.gene.to_uppercase(),
        }
    }
}

/// Lazily yields one [AnnotationMatch] per description that contains the transcript shape.
#[derive(Debug, Clone)]
pub struct Annotations<'a> {
    descriptions: Peekable<Split<'a, char>>,
}

/// Scan an annotation field for transcript descriptions.
/// ```
/// use rs_annovar::syntax::annotations;
/// let field = "fgd3:nm_001083536:exon6:c.g823a:p.v275i,fgd3:nm_033086:exon6:c.g823a:p.v275i,";
/// let found: Vec<_> = annotations(field).map(|m| (m.transcript, m.transcript_position)).collect();
/// assert_eq!(found, vec![("nm_001083536", 823), ("nm_033086", 823)]);
/// ```
pub fn annotations(field: &str) -> Annotations<'_> {
    Annotations {
        descriptions: field.split(',').peekable(),
    }
}

impl<'a> Iterator for Annotations<'a> {
    type Item = AnnotationMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(description) = self.descriptions.next() {
            let comma_follows = self.descriptions.peek().is_some();
            if let Some(found) = match_description(description, comma_follows) {
                return Some(found);
            }
        }
        None
    }
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn match_description(description: &str, comma_follows: bool) -> Option<AnnotationMatch<'_>> {
    let mut parts = Vec::new();
    let mut offset = 0;
    for part in description.split(':') {
        parts.push((offset, part));
        offset += part.len() + 1;
    }
    if parts.len() < 5 {
        return None;
    }
    (0..=parts.len() - 5).find_map(|i| {
        let window = &parts[i..i + 5];
        let followed = i + 5 < parts.len() || comma_follows;
        match_window(description, window, followed)
    })
}

fn match_window<'a>(
    description: &'a str,
    window: &[(usize, &'a str)],
    protein_followed: bool,
) -> Option<AnnotationMatch<'a>> {
    let (gene_offset, gene_part) = window[0];
    let gene_start = gene_part
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word(*c))
        .last()
        .map(|(i, _)| i)?;
    let gene = &gene_part[gene_start..];

    let transcript = window[1].1;
    if transcript.is_empty() || !transcript.chars().all(is_word) {
        return None;
    }

    let exon = window[2].1.strip_prefix("exon")?;
    if exon.is_empty() || !exon.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let coding_dna = window[3].1;
    let (transcript_position, coding_end) = notation_position(coding_dna, 'c', false)?;
    if coding_end != coding_dna.len() {
        return None;
    }

    let (protein_offset, protein_part) = window[4];
    let (protein_position, protein_end) =
        notation_position(protein_part, 'p', protein_followed)?;
    let protein = &protein_part[..protein_end];

    Some(AnnotationMatch {
        mutation: &description[gene_offset + gene_start..protein_offset + protein_end],
        gene,
        transcript,
        transcript_position,
        protein_position,
        coding_dna,
        protein,
    })
}

/// Match `<marker><any char><non-digits><digits><non-digit><word chars>` at the start of `notation`.
///
/// Returns the parsed position and the byte length of the match. When the digits end the
/// notation, the match only succeeds if `followed` says a separator comes next, standing in
/// for the trailing non-digit.
fn notation_position(notation: &str, marker: char, followed: bool) -> Option<(i64, usize)> {
    let mut chars = notation.char_indices().peekable();
    let (_, first) = chars.next()?;
    if first != marker {
        return None;
    }
    chars.next()?;
    while chars.next_if(|(_, c)| !c.is_ascii_digit()).is_some() {}
    let digits_start = chars.peek().map(|(i, _)| *i)?;
    while chars.next_if(|(_, c)| c.is_ascii_digit()).is_some() {}
    let digits_end = chars.peek().map_or(notation.len(), |(i, _)| *i);
    let position = notation[digits_start..digits_end].parse::<i64>().ok()?;

    if chars.next().is_none() {
        return followed.then_some((position, notation.len()));
    }
    while chars.next_if(|(_, c)| is_word(*c)).is_some() {}
    let end = chars.peek().map_or(notation.len(), |(i, _)| *i);
    Some((position, end))
}
