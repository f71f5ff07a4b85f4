//! Convert 13-field block record files into grouped Wavefront OBJ meshes.
//!
//! Usage: `blocks2obj <input_file> <start_frame> <end_frame>`
//!
//! Output files are written into the current working directory, one per
//! channel/type/frame combination.

use blockmesh::{Error, FrameRange, LogFile, ObjIo, Result};
use std::env;
use std::process;

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        return Err(Error::InvalidParameter(
            "usage: blocks2obj <input_file> <start_frame> <end_frame>".to_string(),
        ));
    }

    let start_frame = args[2]
        .parse::<i64>()
        .map_err(|_| Error::InvalidParameter(format!("Invalid start frame: {}", args[2])))?;
    let end_frame = args[3]
        .parse::<i64>()
        .map_err(|_| Error::InvalidParameter(format!("Invalid end frame: {}", args[3])))?;
    let range = FrameRange::new(start_frame, end_frame);

    let log = LogFile::new(None, true)?;
    log.log(format!(
        "Converting {} (frames {}..={})",
        args[1], range.start, range.end
    ))?;

    let stats = ObjIo::export_file(&args[1], range, ".", Some(&log))?;

    log.log(format!(
        "Wrote {} boxes into {} files ({} skipped)",
        stats.boxes_written,
        stats.files.len(),
        stats.boxes_skipped
    ))?;
    for (channel, color) in &stats.channels {
        log.log(format!("Channel {} -> {}", channel, color))?;
    }
    for file in &stats.files {
        log.log(format!("  {}", file.display()))?;
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
