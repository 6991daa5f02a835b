#![warn(missing_debug_implementations, rust_2018_idioms)]

//! Verifies the output of a k-mer preserving transformation against its inputs.
mod cli;

use kmercheck::{Error, Result, Verifier};
use log::error;
use std::io::Write;
use structopt::StructOpt;

fn main() -> Result<()> {
    let opt = cli::KmerCheck::from_args();
    opt.set_logging();

    rayon::ThreadPoolBuilder::new()
        .num_threads(opt.threads)
        .build_global()
        .map_err(|_| Error::ThreadError)?;

    let verifier = Verifier::new(opt.files(), opt.k)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = verifier.run(&mut out)?;
    write!(out, "{}", report)?;
    out.flush()?;

    if let Some(ref path) = opt.stats {
        let cmd = std::env::args().collect::<Vec<_>>().join(" ");
        let wtr = std::io::BufWriter::new(std::fs::File::create(path)?);
        report.write_stats(wtr, &cmd)?;
    }

    if opt.strict && !report.passed() {
        error!("K-mer sets of the transformed files do not match the inputs");
        std::process::exit(1)
    }

    Ok(())
}
