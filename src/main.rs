#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};
use std::process;

use log::{debug, info};
use structopt::StructOpt;

mod ac_file;
mod error;
mod geo;
mod mavlink;
mod stk;

use ac_file::AcFile;
use error::Result;

/// Convert the waypoints of an STK aircraft (.ac) file into a MAVLink
/// .waypoints mission file, written to the current directory.
#[derive(StructOpt)]
struct Args {
    /// STK aircraft file to read
    #[structopt(name = "input", parse(from_os_str))]
    input: PathBuf,
}

/// Reads `input`, writes the mission file into `out_dir` and returns its path.
fn convert(input: &Path, out_dir: &Path) -> Result<PathBuf> {
    let output = mavlink::output_path(input, out_dir)?;

    info!("Reading {}", input.display());
    let ac = AcFile::from_file(input)?;

    let waypoints = stk::extract_waypoints(&ac)?;
    info!("Extracted {} waypoints", waypoints.len());

    let wpl = mavlink::format_waypoints(&waypoints);

    debug!("Writing {} bytes to {}", wpl.len(), output.display());
    mavlink::write_wpl(&output, &wpl)?;
    Ok(output)
}

/// Exit code and message for a finished conversion. Success is reported on
/// stdout, failures on stderr.
fn report(result: &Result<PathBuf>) -> (i32, String) {
    match result {
        Ok(output) => {
            let name = output
                .file_name()
                .map(Path::new)
                .unwrap_or_else(|| output.as_path());
            (
                0,
                format!(
                    "Created waypoints file {} in the current directory.",
                    name.display()
                ),
            )
        }
        Err(e) => (1, format!("error: {}: {}", e.stage(), e)),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    let args = Args::from_args();

    // Relative so the message reads "f22.waypoints", not an absolute path.
    let (code, message) = report(&convert(&args.input, Path::new(".")));
    if code == 0 {
        println!("{}", message);
    } else {
        eprintln!("{}", message);
        process::exit(code);
    }
}
