//! Waypoint extraction from STK `.ac` aircraft files.
//!
//! STK stores the route as a table between `BEGIN Waypoints` and
//! `END Waypoints`, one row per waypoint:
//!
//! ```text
//! Time [sec]  Lat [deg]  Long [deg]  Alt [m]  Speed [m/s]  Accel [m/s/s]  TurnRadius [m]
//! ```

use crate::ac_file::{AcFile, Row};
use crate::error::{Error, Result};
use crate::geo::{valid_lat, LatLon, Waypoint};
use log::{debug, warn};

const WAYPOINT_SECTION: &str = "Waypoints";

const LAT_COL: usize = 1;
const LON_COL: usize = 2;
const ALT_COL: usize = 3;

pub fn extract_waypoints(ac: &AcFile) -> Result<Vec<Waypoint>> {
    let mut sections = ac.sections(WAYPOINT_SECTION);
    let section = match sections.next() {
        Some(section) => section?,
        None => return Err(Error::NoWaypointsFound),
    };

    let ignored = sections.count();
    if ignored > 0 {
        warn!(
            "{} more waypoint section(s) after line {}, only the first is converted",
            ignored, section.line
        );
    }

    let waypoints = section
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| parse_row(i, row))
        .collect::<Result<Vec<_>>>()?;

    if waypoints.is_empty() {
        return Err(Error::NoWaypointsFound);
    }

    debug!(
        "{} waypoints in section at line {}",
        waypoints.len(),
        section.line
    );
    Ok(waypoints)
}

fn parse_row(index: usize, row: &Row) -> Result<Waypoint> {
    let malformed = |field: &str, value: &str| Error::MalformedWaypoint {
        number: index + 1,
        line: row.line,
        field: field.to_owned(),
        value: value.to_owned(),
    };

    let column = |col: usize, field: &str| -> Result<f64> {
        let raw = row.get(col).ok_or_else(|| malformed(field, "<missing>"))?;
        raw.parse::<f64>()
            .ok()
            .filter(|x| x.is_finite())
            .ok_or_else(|| malformed(field, raw))
    };

    let lat = column(LAT_COL, "latitude")?;
    let lon = column(LON_COL, "longitude")?;
    let alt = column(ALT_COL, "altitude")?;

    let latlon = LatLon::new(lat, lon).ok_or_else(|| {
        if valid_lat(lat) {
            malformed("longitude", row.get(LON_COL).unwrap_or_default())
        } else {
            malformed("latitude", row.get(LAT_COL).unwrap_or_default())
        }
    })?;
    Ok(Waypoint::new(latlon, alt))
}
