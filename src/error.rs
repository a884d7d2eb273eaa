use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    NotFound{path: String} = "{path}: no such file",
    Read{path: String, source: std::io::Error} = "unable to read {path}: {source}",
    BadInputPath{path: String} = "{path}: cannot derive an output name from this path",
    UnterminatedSection{name: String, line: usize} = "'BEGIN {name}' on line {line} has no matching 'END {name}'",
    MalformedWaypoint{number: usize, line: usize, field: String, value: String} =
        "waypoint #{number} (line {line}): bad {field} '{value}'",
    NoWaypointsFound = "no waypoints found in input",
    Write{path: String, source: std::io::Error} = "unable to write {path}: {source}"
}

impl Error {
    /// Pipeline stage the error was raised in.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::NotFound { .. } | Error::Read { .. } | Error::BadInputPath { .. } => {
                "read"
            }
            Error::UnterminatedSection { .. }
            | Error::MalformedWaypoint { .. }
            | Error::NoWaypointsFound => "parse",
            Error::Write { .. } => "write",
        }
    }

    pub(crate) fn read(path: &std::path::Path, e: std::io::Error) -> Error {
        let path = path.display().to_string();
        match e.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound { path },
            _ => Error::Read { path, source: e },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn missing_file_is_not_found() {
        let e = Error::read(
            Path::new("f22.ac"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(e, Error::NotFound { .. }));
        assert_eq!(e.stage(), "read");
        assert_eq!(e.to_string(), "f22.ac: no such file");
    }

    #[test]
    fn other_io_errors_are_read_errors() {
        let e = Error::read(
            Path::new("f22.ac"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(e, Error::Read { .. }));
    }

    #[test]
    fn malformed_waypoint_names_the_record() {
        let e = Error::MalformedWaypoint {
            number: 2,
            line: 17,
            field: "latitude".to_owned(),
            value: "abc".to_owned(),
        };
        assert_eq!(e.stage(), "parse");
        assert_eq!(e.to_string(), "waypoint #2 (line 17): bad latitude 'abc'");
    }
}
