#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]

//! Correctness oracle for k-mer preserving transformations of sequence files (e.g. the
//! computation of simplitigs and of k-mer set intersections/differences).
//!
//! Every file is reduced to its set of canonical k-mers, a k-mer and its reverse complement
//! being the same element. The sets of two original inputs are then compared with the sets of
//! the two outputs and of the intersection produced by the transformation:
//!
//! * `in1 ∩ in2 == inter`
//! * `in1 ∪ in2 == inter ∪ out1 ∪ out2`
//! * `out1 - in1` and `out2 - in2` are reported as k-mers the transformation made up.
//!
//! Failed checks are reported, not raised.

pub mod error;
pub mod fasta;
pub mod kmer;
pub mod verify;

pub use crate::error::{Error, Result};
pub use crate::fasta::SequenceSet;
pub use crate::kmer::{Kmer, KmerSet};
pub use crate::verify::{Files, Report, Verifier};

/// Nucleotide alphabet used
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];
