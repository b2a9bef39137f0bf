//! FASTA and one-sequence-per-line readers.
//!
//! Both readers normalize sequences to trimmed uppercase and drop repeated
//! values, keeping the order in which values were first seen.

use std::fs::File;
use std::hash::Hash;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::debug;
use seq_io::fasta::{Reader, Record};
use thiserror::Error;

use crate::sequence::FromSequence;

#[derive(Error, Debug)]
pub enum SequenceReadError {
    #[error("Sequence file `{}` does not exist", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to read sequence file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed FASTA input: {0}")]
    Fasta(#[from] seq_io::fasta::Error),
    #[error("FASTA record is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

fn check_exist<P: AsRef<Path>>(paths: &[P]) -> Result<(), SequenceReadError> {
    match paths.iter().map(|p| p.as_ref()).find(|p| !p.exists()) {
        Some(missing) => Err(SequenceReadError::FileNotFound(missing.to_path_buf())),
        None => Ok(()),
    }
}

/// Read sequences from FASTA files.
///
/// Text before the first `>` header is ignored and spaces inside sequence lines are removed.
/// The header is split on `|` and the field at `id_position` becomes the id. Headers
/// with fewer fields keep the whole header as id.
/// ```
/// # use std::io::Write;
/// use rs_annovar::{fasta::read_fasta, sequence::Protein};
/// let mut file = tempfile::NamedTempFile::new().unwrap();
/// writeln!(file, ">sp|P01116|RASK_HUMAN\nmteyklvvvg\nagGVGKSALT").unwrap();
/// let proteins: Vec<Protein> = read_fasta(&[file.path()], 1).unwrap();
/// assert_eq!(proteins[0].id.as_deref(), Some("P01116"));
/// assert_eq!(proteins[0].seq, "MTEYKLVVVGAGGVGKSALT");
/// ```
pub fn read_fasta<T, P>(paths: &[P], id_position: usize) -> Result<Vec<T>, SequenceReadError>
where
    T: FromSequence + Eq + Hash + Clone,
    P: AsRef<Path>,
{
    check_exist(paths)?;
    let mut collect = Vec::new();
    for path in paths.iter().map(|p| p.as_ref()) {
        debug!("Reading FASTA records from {}", path.display());
        let mut file_reader = BufReader::new(File::open(path)?);
        skip_preamble(&mut file_reader)?;
        let mut fasta_reader = Reader::new(file_reader);
        while let Some(record) = fasta_reader.next() {
            let record = record?;
            let header = std::str::from_utf8(record.head())?.trim();
            let id = header.split('|').nth(id_position).unwrap_or(header);
            let full_seq = record.full_seq();
            let seq = std::str::from_utf8(&full_seq)?.replace(' ', "");
            collect.push(T::from_sequence(
                seq.trim().to_uppercase(),
                Some(id.to_owned()),
            ));
        }
    }
    Ok(collect.into_iter().unique().collect())
}

/// Read one sequence per line.
pub fn read_lines<T, P>(paths: &[P]) -> Result<Vec<T>, SequenceReadError>
where
    T: FromSequence + Eq + Hash + Clone,
    P: AsRef<Path>,
{
    check_exist(paths)?;
    let mut collect = Vec::new();
    for path in paths.iter().map(|p| p.as_ref()) {
        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            collect.push(T::from_sequence(line?.trim().to_uppercase(), None));
        }
    }
    Ok(collect.into_iter().unique().collect())
}

/// Discard anything before the first `>` line.
fn skip_preamble<R: BufRead>(reader: &mut R) -> std::io::Result<()> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.first().map_or(true, |b| *b == b'>') {
            return Ok(());
        }
        let mut discarded = Vec::new();
        reader.read_until(b'\n', &mut discarded)?;
    }
}
