//! Set algebra checks between the canonical k-mer sets of the original inputs and of the files
//! produced by the transformation under test.
//!
//! For two inputs `in1` and `in2`, a correct transformation writes an intersection file holding
//! exactly `in1 ∩ in2` and two outputs whose k-mers, together with the intersection, cover
//! `in1 ∪ in2` without adding anything.
use crate::error::{Error, Result};
use crate::fasta::SequenceSet;
use crate::kmer::KmerSet;
use log::{info, warn};
use rayon::prelude::*;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The five files taking part in a verification
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Files {
    pub input1: PathBuf,
    pub input2: PathBuf,
    pub output1: PathBuf,
    pub output2: PathBuf,
    pub intersection: PathBuf,
}

impl Files {
    /// Paths in loading order
    pub fn paths(&self) -> [&Path; 5] {
        [
            self.input1.as_path(),
            self.input2.as_path(),
            self.output1.as_path(),
            self.output2.as_path(),
            self.intersection.as_path(),
        ]
    }
}

/// Size summary of a loaded file
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct FileStats {
    pub path: PathBuf,
    pub kmers: usize,
    pub sequences: usize,
    pub bases: usize,
}

#[derive(Debug)]
struct LoadedFile {
    kmers: KmerSet,
    stats: FileStats,
}

impl LoadedFile {
    fn load(path: &Path, k: usize) -> Result<Self> {
        let seqs = SequenceSet::from_path(path)?;
        let kmers = KmerSet::from_sequences(&seqs, k)?;
        let stats = FileStats {
            path: path.to_path_buf(),
            kmers: kmers.len(),
            sequences: seqs.len(),
            bases: seqs.total_bases(),
        };
        info!(
            "Loaded {}: #kmers={}, NS={}, CL={} bp",
            path.display(),
            stats.kmers,
            stats.sequences,
            stats.bases
        );
        Ok(Self { kmers, stats })
    }
}

/// Runs the checks for one set of files and one k-mer length
#[derive(Debug)]
pub struct Verifier {
    files: Files,
    k: usize,
}

impl Verifier {
    #[allow(missing_docs)]
    pub fn new(files: Files, k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidKmerSize(k));
        }
        Ok(Self { files, k })
    }

    /// Writes a `Loading` line per file to `out`, then loads the files in parallel on the current
    /// rayon pool and compares their k-mer sets. Only file access errors are returned, failed
    /// checks end up in the [`Report`].
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Report> {
        let paths = self.files.paths();
        for path in paths.iter() {
            writeln!(out, "Loading {}", path.display())?;
        }
        out.flush()?;

        let loaded = paths[..]
            .par_iter()
            .map(|path| LoadedFile::load(path, self.k))
            .collect::<Result<Vec<_>>>()?;

        let (sets, stats): (Vec<_>, Vec<_>) = loaded
            .into_iter()
            .map(|file| (file.kmers, file.stats))
            .unzip();

        let mut report = Report::compare(&sets[0], &sets[1], &sets[2], &sets[3], &sets[4]);
        report.stats = stats;
        report.log_failures();
        Ok(report)
    }
}

/// Outcome of the three checks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// `in1 ∩ in2 == inter`
    pub intersection_ok: bool,
    /// `in1 ∪ in2`
    pub expected: KmerSet,
    /// `inter ∪ out1 ∪ out2`
    pub observed: KmerSet,
    /// `out1 - in1`
    pub out1_novel: KmerSet,
    /// `out2 - in2`
    pub out2_novel: KmerSet,
    /// Per file statistics in loading order, empty unless produced by [`Verifier::run`]
    pub stats: Vec<FileStats>,
}

impl Report {
    /// Compares already extracted k-mer sets
    pub fn compare(
        in1: &KmerSet,
        in2: &KmerSet,
        out1: &KmerSet,
        out2: &KmerSet,
        inter: &KmerSet,
    ) -> Self {
        Self {
            intersection_ok: &in1.intersection(in2) == inter,
            expected: in1.union(in2),
            observed: inter.union(out1).union(out2),
            out1_novel: out1.difference(in1),
            out2_novel: out2.difference(in2),
            stats: Vec::new(),
        }
    }

    /// `in1 ∪ in2 == inter ∪ out1 ∪ out2`
    pub fn coverage_ok(&self) -> bool {
        self.expected == self.observed
    }

    /// K-mers lost or introduced by the transformation
    pub fn symmetric_difference(&self) -> KmerSet {
        self.expected.symmetric_difference(&self.observed)
    }

    /// Both checks hold and neither output holds k-mers absent from its input
    pub fn passed(&self) -> bool {
        self.intersection_ok
            && self.coverage_ok()
            && self.out1_novel.is_empty()
            && self.out2_novel.is_empty()
    }

    fn log_failures(&self) {
        if !self.intersection_ok {
            warn!("Intersection file does not hold exactly the shared k-mers");
        }
        if !self.coverage_ok() {
            warn!(
                "{} k-mers differ between the inputs and the transformed files",
                self.symmetric_difference().len()
            );
        }
        for (name, novel) in &[("out1", &self.out1_novel), ("out2", &self.out2_novel)] {
            if !novel.is_empty() {
                warn!("{} holds {} k-mers absent from its input", name, novel.len());
            }
        }
    }

    /// Writes the per file statistics as TSV, preceded by the command that produced them
    pub fn write_stats<W: Write>(&self, mut wtr: W, cmd: &str) -> Result<()> {
        writeln!(wtr, "# cmd: {}", cmd)?;
        writeln!(wtr, "# file\tkmers\tsequences\tbases")?;
        for stats in &self.stats {
            writeln!(
                wtr,
                "{}\t{}\t{}\t{}",
                stats.path.display(),
                stats.kmers,
                stats.sequences,
                stats.bases
            )?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn py_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Is ok {}", py_bool(self.intersection_ok))?;
        writeln!(
            f,
            "Is ok {} (sizes: {}, {})",
            py_bool(self.coverage_ok()),
            self.expected.len(),
            self.observed.len()
        )?;
        if !self.coverage_ok() {
            writeln!(f, "sym. difference:  {}", self.symmetric_difference())?;
        }
        writeln!(f)?;
        writeln!(f, "out1 - in1")?;
        writeln!(f, "{}", self.out1_novel)?;
        writeln!(f)?;
        writeln!(f, "out2 - in2")?;
        writeln!(f, "{}", self.out2_novel)
    }
}
