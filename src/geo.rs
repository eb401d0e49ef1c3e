//! Great-circle distance

use crate::models::Coordinate;

/// Mean earth radius used for all distance ranking
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine distance in miles between two coordinates
#[must_use]
pub fn distance_miles(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const NEW_YORK: Coordinate = Coordinate::new(40.7128, -74.0060);
    const PHILADELPHIA: Coordinate = Coordinate::new(39.9526, -75.1652);
    const LOS_ANGELES: Coordinate = Coordinate::new(34.0522, -118.2437);

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(distance_miles(NEW_YORK, NEW_YORK), 0.0);
    }

    #[rstest]
    #[case(NEW_YORK, PHILADELPHIA)]
    #[case(NEW_YORK, LOS_ANGELES)]
    #[case(Coordinate::new(-33.86, 151.21), Coordinate::new(51.5, -0.12))]
    #[case(Coordinate::new(0.0, 179.9), Coordinate::new(0.0, -179.9))]
    fn test_distance_is_symmetric_and_non_negative(#[case] a: Coordinate, #[case] b: Coordinate) {
        let there = distance_miles(a, b);
        let back = distance_miles(b, a);
        assert!(there >= 0.0);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_known_distances() {
        let ny_philly = distance_miles(NEW_YORK, PHILADELPHIA);
        assert!((79.0..82.0).contains(&ny_philly), "got {ny_philly}");

        let ny_la = distance_miles(NEW_YORK, LOS_ANGELES);
        assert!((2440.0..2460.0).contains(&ny_la), "got {ny_la}");
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let miles = distance_miles(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        let expected = EARTH_RADIUS_MILES * 1f64.to_radians();
        assert!((miles - expected).abs() < 1e-9);
    }
}
