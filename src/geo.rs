#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon(f64, f64);

impl LatLon {
    /// Returns `None` when either component lies outside the valid range of
    /// decimal degrees.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if valid_lat(lat) && valid_lon(lon) {
            Some(LatLon(lat, lon))
        } else {
            None
        }
    }

    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }
}

pub fn valid_lat(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
}

pub fn valid_lon(lon: f64) -> bool {
    (-180.0..=180.0).contains(&lon)
}

/// A single point of the flight path. Altitude is in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    pub latlon: LatLon,
    pub alt: f64,
}

impl Waypoint {
    pub fn new(latlon: LatLon, alt: f64) -> Self {
        Waypoint { latlon, alt }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(34.0522, -118.2437)]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(0.0, 0.0)]
    fn accepts_valid_coordinates(#[case] lat: f64, #[case] lon: f64) {
        let ll = LatLon::new(lat, lon).unwrap();
        assert_eq!((ll.lat(), ll.lon()), (lat, lon));
    }

    #[rstest]
    #[case(90.5, 0.0)]
    #[case(-91.0, 0.0)]
    #[case(0.0, 180.1)]
    #[case(0.0, -200.0)]
    #[case(f64::NAN, 0.0)]
    fn rejects_out_of_range(#[case] lat: f64, #[case] lon: f64) {
        assert!(LatLon::new(lat, lon).is_none());
    }
}
