//! Convert 6-field corner files into a colored OFF polyhedron document.
//!
//! Usage: `blocks2off <input_file>`
//!
//! The document goes to stdout; diagnostics go to stderr and the log file.

use blockmesh::{Error, LogFile, OffIo, Result};
use std::env;
use std::io::{self, Write};
use std::process;

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        return Err(Error::InvalidParameter(
            "usage: blocks2off <input_file>".to_string(),
        ));
    }

    let log = LogFile::new(None, true)?;
    log.log(format!("Converting {}", args[1]))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = OffIo::export_file(&args[1], &mut out)?;
    out.flush()?;

    log.log(format!("Wrote {} blocks", stats.block_count))?;
    log.log(format!("Scaled extent: {}", stats.bbox))?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
