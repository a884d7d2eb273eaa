//! MAVLink plain-text mission files (`QGC WPL 110`).

use crate::error::{Error, Result};
use crate::geo::Waypoint;
use itertools::Itertools;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

pub static WPL_HEADER: &str = "QGC WPL 110";
pub static WPL_EXTENSION: &str = "waypoints";

const MAV_FRAME_GLOBAL_RELATIVE_ALT: u8 = 3;
const MAV_CMD_NAV_WAYPOINT: u16 = 16;

/// One line of a mission file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MissionItem {
    pub seq: usize,
    pub current: bool,
    pub frame: u8,
    pub command: u16,
    pub params: [f64; 4],
    pub waypoint: Waypoint,
    pub autocontinue: bool,
}

impl MissionItem {
    pub fn nav_waypoint(seq: usize, waypoint: Waypoint) -> Self {
        MissionItem {
            seq,
            current: seq == 0,
            frame: MAV_FRAME_GLOBAL_RELATIVE_ALT,
            command: MAV_CMD_NAV_WAYPOINT,
            params: [0.0; 4],
            waypoint,
            autocontinue: true,
        }
    }

    pub fn to_wpl(self) -> String {
        let wp = self.waypoint;
        let head = vec![
            self.seq.to_string(),
            (self.current as u8).to_string(),
            self.frame.to_string(),
            self.command.to_string(),
        ];
        let params = self.params.iter().map(|p| p.to_string());
        let tail = vec![
            fixed(wp.latlon.lat(), 8),
            fixed(wp.latlon.lon(), 8),
            fixed(wp.alt, 3),
            (self.autocontinue as u8).to_string(),
        ];

        head.into_iter().chain(params).chain(tail).join("\t")
    }
}

/// Fixed-point rendering that never prints a negative zero (`-0.000`).
fn fixed(x: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, x);
    if let Some(abs) = s.strip_prefix('-') {
        if abs.chars().all(|c| c == '0' || c == '.') {
            return abs.to_owned();
        }
    }
    s
}

/// Renders the full mission file, header included.
pub fn format_waypoints(waypoints: &[Waypoint]) -> String {
    let mut wpl = String::new();
    wpl += WPL_HEADER;
    wpl += "\n";

    for (seq, wp) in waypoints.iter().enumerate() {
        wpl += &MissionItem::nav_waypoint(seq, *wp).to_wpl();
        wpl += "\n";
    }
    wpl
}

/// `<dir>/<name>.waypoints`, where name is the input file name up to its
/// first dot (`f22.ac` -> `f22`). Names need not be valid UTF-8.
pub fn output_path<P: AsRef<Path>>(input: &Path, dir: P) -> Result<PathBuf> {
    let bad_path = || Error::BadInputPath {
        path: input.display().to_string(),
    };

    let mut stem = input.file_name().ok_or_else(bad_path)?;
    while let Some(shorter) = Path::new(stem).file_stem() {
        if shorter == stem {
            break;
        }
        stem = shorter;
    }

    // A leading dot leaves nothing before the first one (".ac").
    if stem.to_string_lossy().starts_with('.') {
        return Err(bad_path());
    }

    let mut name = stem.to_os_string();
    name.push(".");
    name.push(WPL_EXTENSION);
    Ok(dir.as_ref().join(name))
}

pub fn write_wpl<P: AsRef<Path>>(path: P, wpl: &str) -> Result<()> {
    let path = path.as_ref();
    let write_error = |e| Error::Write {
        path: path.display().to_string(),
        source: e,
    };

    let mut output = std::fs::File::create(path).map_err(write_error)?;
    output.write_all(wpl.as_bytes()).map_err(write_error)?;
    output.flush().map_err(write_error)
}
