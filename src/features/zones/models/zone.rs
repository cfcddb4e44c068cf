use crate::shared::types::Coordinate;

/// Axis-aligned rectangle in decimal degrees, edges inclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl Bounds {
    pub const fn new(lat_min: f64, lat_max: f64, lng_min: f64, lng_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        }
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        self.lat_min <= point.latitude
            && point.latitude <= self.lat_max
            && self.lng_min <= point.longitude
            && point.longitude <= self.lng_max
    }

    pub fn centroid(&self) -> Coordinate {
        Coordinate::new(
            (self.lat_min + self.lat_max) / 2.0,
            (self.lng_min + self.lng_max) / 2.0,
        )
    }
}

/// A JAKIM prayer-time zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub code: &'static str,
    pub state: &'static str,
    pub label: &'static str,
    pub bounds: Bounds,
}

/// How a coordinate was matched to a zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolutionMethod {
    /// The point lies inside the zone's rectangle
    Contained,
    /// No rectangle contains the point; nearest centroid wins
    Nearest { distance_km: f64 },
}

#[derive(Debug, Clone, Copy)]
pub struct ZoneMatch {
    pub zone: &'static Zone,
    pub method: ResolutionMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains_edges() {
        let b = Bounds::new(1.0, 2.0, 100.0, 101.0);
        assert!(b.contains(Coordinate::new(1.0, 100.0)));
        assert!(b.contains(Coordinate::new(2.0, 101.0)));
        assert!(b.contains(Coordinate::new(1.5, 100.5)));
        assert!(!b.contains(Coordinate::new(0.999, 100.5)));
        assert!(!b.contains(Coordinate::new(1.5, 101.001)));
        assert!(!b.contains(Coordinate::new(f64::NAN, 100.5)));
    }

    #[test]
    fn test_bounds_centroid() {
        let c = Bounds::new(1.0, 2.0, 100.0, 101.0).centroid();
        assert_eq!(c, Coordinate::new(1.5, 100.5));
    }
}
