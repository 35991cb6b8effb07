//! Usage: `block_sweep [INPUT]`
//!
//! Prints the integers in INPUT (or a built-in sample) with every block width of the
//! default sweep and appends the timings to `INPUT.report`, or `<program>.report`.

use std::env;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::process;

use log::{error, info, warn};

use radix_blocks::sweep::{self, DEFAULT_INTEGERS, DEFAULT_RANGES};
use radix_blocks::Result;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("block_sweep");

    let (integers, report_path) = match args.get(1) {
        Some(input) => {
            let reader = BufReader::new(File::open(input)?);
            let integers = sweep::read_integers(reader)?;
            info!("read {} integers from {}", integers.len(), input);
            (integers, format!("{}.report", input))
        }
        None => (DEFAULT_INTEGERS.to_vec(), format!("{}.report", program)),
    };
    if integers.is_empty() {
        warn!("no integers to print");
    }

    let mut report = match OpenOptions::new().create(true).append(true).open(&report_path) {
        Ok(file) => Some(BufWriter::new(file)),
        Err(e) => {
            error!("cannot create report file {}: {}", report_path, e);
            None
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    sweep::run_sweep(&DEFAULT_RANGES, &integers, &mut out, report.as_mut())?;
    out.flush()?;
    Ok(())
}
