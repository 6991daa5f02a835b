//! Minimal FASTA reading tuned for k-mer comparison.
//!
//! Unlike a strict FASTA reader, records sharing an identifier are merged and sequence lines that
//! appear before the first header are kept, so that no k-mer present in a file is ever dropped.
use crate::error::{Error, Result};
use log::debug;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Marker starting a new record
pub const RECORD_MARKER: char = '>';
/// Identifier used for sequence lines preceding the first header. It contains a space, which a
/// parsed identifier never does.
pub const UNNAMED: &str = "(before first header)";

/// Sequences of a single file keyed by their identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceSet(HashMap<String, String>);

impl SequenceSet {
    /// Reads all records from a plain or compressed file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let rdr = open(path)?;
        let seqs = Self::from_reader(BufReader::new(rdr)).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Parsed {} records from {}",
            seqs.len(),
            path.display()
        );
        Ok(seqs)
    }

    /// Reads all records in a single pass, fragments of repeated identifiers are appended in
    /// file order
    pub fn from_reader<R: BufRead>(rdr: R) -> std::io::Result<Self> {
        let mut seq_map = HashMap::<String, String>::new();
        let mut name = UNNAMED.to_string();

        for line in rdr.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.strip_prefix(RECORD_MARKER) {
                Some(header) => {
                    name = header.split(' ').next().unwrap_or_default().to_string();
                }
                None => seq_map.entry(name.clone()).or_default().push_str(line),
            }
        }

        Ok(Self(seq_map))
    }

    /// Sequence stored under `id`
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Iterates over `(identifier, sequence)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, seq)| (id.as_str(), seq.as_str()))
    }

    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the file held no sequence lines
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenated length of all sequences
    pub fn total_bases(&self) -> usize {
        self.0.values().map(String::len).sum()
    }
}

/// Opens a file, transparently decompressing it. Files too short to sniff a compression format
/// from are plain text.
fn open(path: &Path) -> Result<Box<dyn Read>> {
    match niffler::from_path(path) {
        Ok((rdr, format)) => {
            debug!("Opened {} as {:?}", path.display(), format);
            Ok(rdr)
        }
        Err(niffler::Error::FileTooShort) => {
            let file = std::fs::File::open(path).map_err(|source| Error::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(file))
        }
        Err(source) => Err(Error::OpenFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}
