//! Canonical k-mers and sets thereof.
use crate::error::{Error, Result};
use crate::fasta::SequenceSet;
use crate::NUCLEOTIDES;
use bio::alphabets::dna;
use std::collections::HashSet;
use std::fmt;
use std::iter::FromIterator;
use std::path::Path;

/// A k-mer stored in canonical form, i.e. the lexicographically smaller of itself and its reverse
/// complement
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kmer(String);

impl Kmer {
    /// Canonical k-mer of `seq`, case is ignored
    pub fn new<T: AsRef<[u8]>>(seq: T) -> Result<Self> {
        let seq = seq.as_ref().to_ascii_uppercase();
        if seq.is_empty() || !seq.iter().all(is_nucleotide) {
            return Err(Error::IncorrectNuc(
                String::from_utf8_lossy(&seq).into_owned(),
            ));
        }
        Ok(Self::canonical(&seq))
    }

    /// `seq` must only contain upper case `ACGT`
    fn canonical(seq: &[u8]) -> Self {
        let revcomp = dna::revcomp(seq);
        if revcomp.as_slice() < seq {
            Self(to_string(&revcomp))
        } else {
            Self(to_string(seq))
        }
    }

    /// Reverse complement of the stored k-mer, which is not canonical unless the k-mer is its own
    /// reverse complement
    pub fn reverse_complement(&self) -> String {
        to_string(&dna::revcomp(self.0.as_bytes()))
    }

    #[allow(missing_docs)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for Kmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_nucleotide(nuc: &u8) -> bool {
    NUCLEOTIDES.contains(nuc)
}

fn to_string(seq: &[u8]) -> String {
    seq.iter().map(|&nuc| nuc as char).collect()
}

/// Maximal runs of `ACGT` in an already upper cased sequence, any other symbol delimits runs
pub fn runs(seq: &[u8]) -> impl Iterator<Item = &[u8]> {
    seq.split(|nuc| !is_nucleotide(nuc))
        .filter(|run| !run.is_empty())
}

/// Every canonical k-mer of `seq` in order of occurence, duplicates included. K-mers never span a
/// non `ACGT` symbol.
pub fn canonical_kmers<T: AsRef<[u8]>>(seq: T, k: usize) -> Result<Vec<Kmer>> {
    let mut kmers = Vec::new();
    for_each_canonical(seq.as_ref(), k, |kmer| kmers.push(kmer))?;
    Ok(kmers)
}

fn for_each_canonical<F: FnMut(Kmer)>(seq: &[u8], k: usize, mut f: F) -> Result<()> {
    if k == 0 {
        return Err(Error::InvalidKmerSize(k));
    }
    let seq = seq.to_ascii_uppercase();
    runs(&seq)
        .flat_map(|run| run.windows(k))
        .for_each(|window| f(Kmer::canonical(window)));
    Ok(())
}

/// Set of canonical k-mers, the unit of comparison between files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmerSet(HashSet<Kmer>);

impl KmerSet {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical k-mers found in all sequences of a file
    pub fn from_path<P: AsRef<Path>>(path: P, k: usize) -> Result<Self> {
        Self::from_sequences(&SequenceSet::from_path(path)?, k)
    }

    /// Canonical k-mers found in all sequences of `seqs`
    pub fn from_sequences(seqs: &SequenceSet, k: usize) -> Result<Self> {
        let mut kmers = Self::new();
        for (_, seq) in seqs.iter() {
            kmers.insert_sequence(seq, k)?;
        }
        Ok(kmers)
    }

    /// Adds all canonical k-mers of `seq`
    pub fn insert_sequence<T: AsRef<[u8]>>(&mut self, seq: T, k: usize) -> Result<()> {
        let set = &mut self.0;
        for_each_canonical(seq.as_ref(), k, |kmer| {
            set.insert(kmer);
        })
    }

    #[allow(missing_docs)]
    pub fn insert(&mut self, kmer: Kmer) -> bool {
        self.0.insert(kmer)
    }

    #[allow(missing_docs)]
    pub fn contains(&self, kmer: &Kmer) -> bool {
        self.0.contains(kmer)
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Kmer> {
        self.0.iter()
    }

    /// K-mers sorted lexicographically
    pub fn sorted(&self) -> Vec<&Kmer> {
        let mut kmers = self.0.iter().collect::<Vec<_>>();
        kmers.sort();
        kmers
    }

    #[allow(missing_docs)]
    pub fn intersection(&self, other: &Self) -> Self {
        self.0.intersection(&other.0).cloned().collect()
    }

    #[allow(missing_docs)]
    pub fn union(&self, other: &Self) -> Self {
        self.0.union(&other.0).cloned().collect()
    }

    /// K-mers of `self` missing from `other`
    pub fn difference(&self, other: &Self) -> Self {
        self.0.difference(&other.0).cloned().collect()
    }

    /// K-mers in exactly one of the two sets
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.0.symmetric_difference(&other.0).cloned().collect()
    }
}

impl FromIterator<Kmer> for KmerSet {
    fn from_iter<I: IntoIterator<Item = Kmer>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Kmer> for KmerSet {
    fn extend<I: IntoIterator<Item = Kmer>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

/// Rendered as `set()` or `{'AAAA', 'ACGT'}` with sorted elements
impl fmt::Display for KmerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "set()");
        }
        write!(f, "{{")?;
        for (i, kmer) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", kmer)?;
        }
        write!(f, "}}")
    }
}
