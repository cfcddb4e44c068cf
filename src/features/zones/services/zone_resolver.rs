use crate::core::config::ConfigError;
use crate::features::zones::data::ZONES;
use crate::features::zones::models::{ResolutionMethod, Zone, ZoneMatch};
use crate::shared::constants::EARTH_RADIUS_KM;
use crate::shared::types::Coordinate;

/// Great-circle distance between two points in kilometres
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Maps coordinates to JAKIM zones.
///
/// Resolution is total: a point inside no rectangle still gets the zone with
/// the nearest rectangle centroid.
pub struct ZoneResolver {
    zones: &'static [Zone],
    // Non-empty, checked in `new`
    first: &'static Zone,
}

impl ZoneResolver {
    pub fn new(zones: &'static [Zone]) -> Result<Self, ConfigError> {
        let first = zones.first().ok_or(ConfigError::Invalid {
            key: "zone table",
            reason: "must contain at least one zone".to_string(),
        })?;
        Ok(Self { zones, first })
    }

    /// Resolver over the built-in JAKIM zone table
    pub fn jakim() -> Result<Self, ConfigError> {
        Self::new(ZONES)
    }

    /// All zones in declaration order
    pub fn zones(&self) -> &'static [Zone] {
        self.zones
    }

    /// Case-insensitive lookup by code
    pub fn find(&self, code: &str) -> Option<&'static Zone> {
        let zones: &'static [Zone] = self.zones;
        zones.iter().find(|z| z.code.eq_ignore_ascii_case(code))
    }

    pub fn resolve_zone(&self, point: Coordinate) -> &'static Zone {
        self.resolve(point).zone
    }

    pub fn resolve(&self, point: Coordinate) -> ZoneMatch {
        let zones: &'static [Zone] = self.zones;

        if let Some(zone) = zones.iter().find(|z| z.bounds.contains(point)) {
            tracing::debug!(
                "Coordinates ({}, {}) inside zone {}",
                point.latitude,
                point.longitude,
                zone.code
            );
            return ZoneMatch {
                zone,
                method: ResolutionMethod::Contained,
            };
        }

        let mut nearest = self.first;
        let mut nearest_km = haversine_km(point, nearest.bounds.centroid());
        for zone in zones.iter().skip(1) {
            let distance = haversine_km(point, zone.bounds.centroid());
            // Strict comparison keeps the earliest zone on ties
            if distance < nearest_km {
                nearest = zone;
                nearest_km = distance;
            }
        }

        tracing::debug!(
            "Coordinates ({}, {}) outside all zones, nearest is {} at {:.1} km",
            point.latitude,
            point.longitude,
            nearest.code,
            nearest_km
        );

        ZoneMatch {
            zone: nearest,
            method: ResolutionMethod::Nearest {
                distance_km: nearest_km,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::zones::models::Bounds;
    use fake::Fake;

    fn resolver() -> ZoneResolver {
        ZoneResolver::jakim().unwrap()
    }

    fn brute_force_nearest(point: Coordinate) -> &'static str {
        let mut best: Option<(&'static str, f64)> = None;
        for z in ZONES {
            let d = haversine_km(point, z.bounds.centroid());
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((z.code, d)),
            }
        }
        best.unwrap().0
    }

    #[test]
    fn test_haversine_known_distance() {
        // Kuala Lumpur to Johor Bahru is roughly 300 km
        let kl = Coordinate::new(3.1390, 101.6869);
        let jb = Coordinate::new(1.4927, 103.7414);
        let d = haversine_km(kl, jb);
        assert!((d - 290.0).abs() < 15.0, "got {}", d);
        assert_eq!(haversine_km(kl, kl), 0.0);
    }

    #[test]
    fn test_kuala_lumpur_resolves_to_wly01() {
        let m = resolver().resolve(Coordinate::new(3.1390, 101.6869));
        assert_eq!(m.zone.code, "WLY01");
        assert_eq!(m.method, ResolutionMethod::Contained);
    }

    #[test]
    fn test_known_cities() {
        let r = resolver();
        let cases = [
            ((1.4927, 103.7414), "JHR02"), // Johor Bahru
            ((6.1248, 100.3678), "KDH01"), // Alor Setar
            ((6.1254, 102.2381), "KTN01"), // Kota Bharu
            ((2.1896, 102.2501), "MLK01"), // Melaka
            ((3.8077, 103.3260), "PHG02"), // Kuantan
            ((4.5975, 101.0901), "PRK02"), // Ipoh
            ((5.9804, 116.0735), "SBH07"), // Kota Kinabalu
            ((1.5533, 110.3592), "SWK08"), // Kuching
            ((5.3302, 103.1408), "TRG01"), // Kuala Terengganu
            ((6.3500, 99.8000), "KDH06"),  // Langkawi
        ];
        for ((lat, lng), code) in cases {
            assert_eq!(
                r.resolve_zone(Coordinate::new(lat, lng)).code,
                code,
                "({}, {})",
                lat,
                lng
            );
        }
    }

    #[test]
    fn test_point_inside_exactly_one_rectangle_resolves_to_it() {
        let r = resolver();
        let mut checked = 0;
        for zone in ZONES {
            let c = zone.bounds.centroid();
            let containing = ZONES.iter().filter(|z| z.bounds.contains(c)).count();
            if containing == 1 {
                assert_eq!(r.resolve_zone(c).code, zone.code);
                checked += 1;
            }
        }
        assert!(checked > ZONES.len() / 2);
    }

    #[test]
    fn test_overlap_goes_to_first_declared() {
        // KL sits inside both WLY01 and SGR01
        let point = Coordinate::new(3.1390, 101.6869);
        let sgr01 = resolver().find("SGR01").unwrap();
        assert!(sgr01.bounds.contains(point));
        assert_eq!(resolver().resolve_zone(point).code, "WLY01");
    }

    #[test]
    fn test_far_corner_resolves_to_nearest() {
        let point = Coordinate::new(0.6, 99.1);
        let m = resolver().resolve(point);
        assert!(matches!(m.method, ResolutionMethod::Nearest { .. }));
        assert_eq!(m.zone.code, brute_force_nearest(point));
    }

    #[test]
    fn test_nearest_matches_brute_force_for_random_points() {
        let r = resolver();
        let mut outside = 0;
        for _ in 0..500 {
            let lat: f64 = (0.5..7.5).fake();
            let lng: f64 = (99.0..120.0).fake();
            let point = Coordinate::new(lat, lng);
            if ZONES.iter().any(|z| z.bounds.contains(point)) {
                continue;
            }
            outside += 1;
            assert_eq!(r.resolve_zone(point).code, brute_force_nearest(point));
        }
        assert!(outside > 0);
    }

    #[test]
    fn test_tie_goes_to_earliest_declared() {
        static TWINS: &[Zone] = &[
            Zone {
                code: "AAA01",
                state: "A",
                label: "West",
                bounds: Bounds::new(1.0, 2.0, 100.0, 101.0),
            },
            Zone {
                code: "BBB01",
                state: "B",
                label: "East",
                bounds: Bounds::new(1.0, 2.0, 103.0, 104.0),
            },
        ];
        let r = ZoneResolver::new(TWINS).unwrap();
        // Equidistant from both centroids
        let m = r.resolve(Coordinate::new(1.5, 102.0));
        assert_eq!(m.zone.code, "AAA01");
    }

    #[test]
    fn test_resolution_is_total() {
        let r = resolver();
        let points = [
            (0.5, 99.0),
            (0.5, 120.0),
            (7.5, 99.0),
            (7.5, 120.0),
            (0.5, 110.0),
            (7.5, 110.0),
            (4.0, 99.0),
            (4.0, 120.0),
            (-45.0, -170.0),
            (89.9, 179.9),
            (0.0, 0.0),
        ];
        for (lat, lng) in points {
            let zone = r.resolve_zone(Coordinate::new(lat, lng));
            assert!(r.find(zone.code).is_some());
        }
    }

    #[test]
    fn test_empty_table_is_a_configuration_error() {
        static EMPTY: &[Zone] = &[];
        assert!(ZoneResolver::new(EMPTY).is_err());
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let r = resolver();
        assert_eq!(r.find("wly01").map(|z| z.code), Some("WLY01"));
        assert!(r.find("XXX99").is_none());
    }
}
