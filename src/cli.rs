use kmercheck::Files;
use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "kmercheck",
    about = "Checks that the canonical k-mer sets of transformed files match the original inputs"
)]
pub(crate) struct KmerCheck {
    #[structopt(help = "First original input FASTA", parse(from_os_str))]
    pub input1: PathBuf,
    #[structopt(help = "Second original input FASTA", parse(from_os_str))]
    pub input2: PathBuf,
    #[structopt(help = "Output produced for the first input", parse(from_os_str))]
    pub output1: PathBuf,
    #[structopt(help = "Output produced for the second input", parse(from_os_str))]
    pub output2: PathBuf,
    #[structopt(help = "Intersection produced from both inputs", parse(from_os_str))]
    pub intersection: PathBuf,
    #[structopt(help = "K-mer length", parse(try_from_str = parse_kmer_size))]
    pub k: usize,
    #[structopt(
        short,
        long,
        help = "Number of threads used to load the files",
        default_value = "1"
    )]
    pub threads: usize,
    #[structopt(
        short,
        long,
        help = "Write number of k-mers, sequences and bases per file to this TSV",
        parse(from_os_str)
    )]
    pub stats: Option<PathBuf>,
    #[structopt(long, help = "Exit with status 1 if any check fails")]
    pub strict: bool,
    #[structopt(
        short,
        long,
        help = "Increase logging verbosity (-v info, -vv debug, -vvv trace)",
        parse(from_occurrences)
    )]
    pub verbose: u8,
}

impl KmerCheck {
    pub fn files(&self) -> Files {
        Files {
            input1: self.input1.clone(),
            input2: self.input2.clone(),
            output1: self.output1.clone(),
            output2: self.output2.clone(),
            intersection: self.intersection.clone(),
        }
    }

    pub fn set_logging(&self) {
        let level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        env_logger::Builder::new().filter_level(level).init();
    }
}

fn parse_kmer_size(k: &str) -> Result<usize, String> {
    match k.parse::<usize>() {
        Ok(0) => Err("k-mer length must be at least 1".to_string()),
        Ok(k) => Ok(k),
        Err(e) => Err(format!("k-mer length must be a positive integer: {}", e)),
    }
}
