//! Reference city catalog
//!
//! The fixed list of candidate cities searched for sunshine. It is built at
//! compile time and never mutated, so request handlers share it freely.

use crate::models::Coordinate;

/// A named candidate city
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceCity {
    pub name: &'static str,
    pub coordinate: Coordinate,
}

impl ReferenceCity {
    #[must_use]
    pub const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            coordinate: Coordinate::new(latitude, longitude),
        }
    }
}

/// Major US cities
pub static MAJOR_CITIES: &[ReferenceCity] = &[
    ReferenceCity::new("New York", 40.7128, -74.0060),
    ReferenceCity::new("Los Angeles", 34.0522, -118.2437),
    ReferenceCity::new("Chicago", 41.8781, -87.6298),
    ReferenceCity::new("Houston", 29.7604, -95.3698),
    ReferenceCity::new("Phoenix", 33.4484, -112.0740),
    ReferenceCity::new("Philadelphia", 39.9526, -75.1652),
    ReferenceCity::new("San Antonio", 29.4241, -98.4936),
    ReferenceCity::new("San Diego", 32.7157, -117.1611),
    ReferenceCity::new("Dallas", 32.7767, -96.7970),
    ReferenceCity::new("San Jose", 37.3382, -121.8863),
    ReferenceCity::new("Austin", 30.2672, -97.7431),
    ReferenceCity::new("Jacksonville", 30.3322, -81.6557),
    ReferenceCity::new("Fort Worth", 32.7555, -97.3308),
    ReferenceCity::new("Columbus", 39.9612, -82.9988),
    ReferenceCity::new("Charlotte", 35.2271, -80.8431),
    ReferenceCity::new("San Francisco", 37.7749, -122.4194),
    ReferenceCity::new("Indianapolis", 39.7684, -86.1581),
    ReferenceCity::new("Seattle", 47.6062, -122.3321),
    ReferenceCity::new("Denver", 39.7392, -104.9903),
    ReferenceCity::new("Washington", 38.9072, -77.0369),
    ReferenceCity::new("Boston", 42.3601, -71.0589),
    ReferenceCity::new("El Paso", 31.7619, -106.4850),
    ReferenceCity::new("Nashville", 36.1627, -86.7816),
    ReferenceCity::new("Detroit", 42.3314, -83.0458),
    ReferenceCity::new("Oklahoma City", 35.4676, -97.5164),
    ReferenceCity::new("Portland", 45.5152, -122.6784),
    ReferenceCity::new("Las Vegas", 36.1699, -115.1398),
    ReferenceCity::new("Memphis", 35.1495, -90.0490),
    ReferenceCity::new("Louisville", 38.2527, -85.7585),
    ReferenceCity::new("Baltimore", 39.2904, -76.6122),
    ReferenceCity::new("Milwaukee", 43.0389, -87.9065),
    ReferenceCity::new("Albuquerque", 35.0844, -106.6504),
    ReferenceCity::new("Tucson", 32.2226, -110.9747),
    ReferenceCity::new("Fresno", 36.7378, -119.7871),
    ReferenceCity::new("Sacramento", 38.5816, -121.4944),
    ReferenceCity::new("Kansas City", 39.0997, -94.5786),
    ReferenceCity::new("Mesa", 33.4152, -111.8315),
    ReferenceCity::new("Atlanta", 33.7490, -84.3880),
    ReferenceCity::new("Omaha", 41.2565, -95.9345),
    ReferenceCity::new("Colorado Springs", 38.8339, -104.8214),
    ReferenceCity::new("Raleigh", 35.7796, -78.6382),
    ReferenceCity::new("Miami", 25.7617, -80.1918),
    ReferenceCity::new("Virginia Beach", 36.8529, -75.9780),
    ReferenceCity::new("Oakland", 37.8044, -122.2712),
    ReferenceCity::new("Minneapolis", 44.9778, -93.2650),
    ReferenceCity::new("Tulsa", 36.1540, -95.9928),
    ReferenceCity::new("Cleveland", 41.4993, -81.6944),
    ReferenceCity::new("Wichita", 37.6872, -97.3301),
    ReferenceCity::new("Arlington", 32.7357, -97.1081),
    ReferenceCity::new("New Orleans", 29.9511, -90.0715),
    ReferenceCity::new("Tampa", 27.9506, -82.4572),
    ReferenceCity::new("Orlando", 28.5383, -81.3792),
    ReferenceCity::new("Pittsburgh", 40.4406, -79.9959),
    ReferenceCity::new("Cincinnati", 39.1031, -84.5120),
    ReferenceCity::new("St. Louis", 38.6270, -90.1994),
    ReferenceCity::new("Salt Lake City", 40.7608, -111.8910),
    ReferenceCity::new("San Bernardino", 34.1083, -117.2898),
    ReferenceCity::new("Riverside", 33.9806, -117.3755),
    ReferenceCity::new("Bakersfield", 35.3733, -119.0187),
    ReferenceCity::new("Honolulu", 21.3069, -157.8583),
    ReferenceCity::new("Boise", 43.6150, -116.2023),
    ReferenceCity::new("Spokane", 47.6588, -117.4260),
    ReferenceCity::new("Reno", 39.5296, -119.8138),
    ReferenceCity::new("Santa Fe", 35.6870, -105.9378),
    ReferenceCity::new("Newark", 40.7357, -74.1724),
    ReferenceCity::new("Jersey City", 40.7178, -74.0431),
    ReferenceCity::new("Providence", 41.8240, -71.4128),
    ReferenceCity::new("Hartford", 41.7658, -72.6734),
    ReferenceCity::new("Buffalo", 42.8864, -78.8784),
    ReferenceCity::new("Rochester", 43.1566, -77.6088),
    ReferenceCity::new("Albany", 42.6526, -73.7562),
    ReferenceCity::new("Pittsfield", 42.4501, -73.2454),
    ReferenceCity::new("Richmond", 37.5407, -77.4360),
    ReferenceCity::new("Norfolk", 36.8508, -76.2859),
    ReferenceCity::new("Charleston", 32.7765, -79.9311),
    ReferenceCity::new("Savannah", 32.0809, -81.0912),
    ReferenceCity::new("Birmingham", 33.5186, -86.8104),
    ReferenceCity::new("Montgomery", 32.3668, -86.3000),
    ReferenceCity::new("Little Rock", 34.7465, -92.2896),
    ReferenceCity::new("Baton Rouge", 30.4515, -91.1871),
    ReferenceCity::new("Tallahassee", 30.4383, -84.2807),
    ReferenceCity::new("Fort Lauderdale", 26.1224, -80.1373),
    ReferenceCity::new("West Palm Beach", 26.7153, -80.0534),
    ReferenceCity::new("Boca Raton", 26.3683, -80.1289),
    ReferenceCity::new("Sarasota", 27.3364, -82.5307),
    ReferenceCity::new("Bend", 44.0582, -121.3153),
    ReferenceCity::new("Eugene", 44.0521, -123.0868),
    ReferenceCity::new("Spokane Valley", 47.6732, -117.2394),
    ReferenceCity::new("Bozeman", 45.6770, -111.0429),
    ReferenceCity::new("Billings", 45.7833, -108.5007),
    ReferenceCity::new("Fargo", 46.8772, -96.7898),
    ReferenceCity::new("Sioux Falls", 43.5446, -96.7311),
    ReferenceCity::new("Des Moines", 41.5868, -93.6250),
    ReferenceCity::new("Madison", 43.0731, -89.4012),
    ReferenceCity::new("Grand Rapids", 42.9634, -85.6681),
    ReferenceCity::new("Toledo", 41.6528, -83.5379),
    ReferenceCity::new("Akron", 41.0814, -81.5190),
    ReferenceCity::new("Dayton", 39.7589, -84.1916),
    ReferenceCity::new("Knoxville", 35.9606, -83.9207),
    ReferenceCity::new("Chattanooga", 35.0456, -85.3097),
    ReferenceCity::new("Greensboro", 36.0726, -79.7920),
    ReferenceCity::new("Durham", 35.9940, -78.8986),
    ReferenceCity::new("Charleston (WV)", 38.3498, -81.6326),
    ReferenceCity::new("Columbia", 34.0007, -81.0348),
    ReferenceCity::new("Wilmington", 34.2104, -77.8868),
    ReferenceCity::new("Huntsville", 34.7304, -86.5861),
    ReferenceCity::new("Mobile", 30.6954, -88.0399),
    ReferenceCity::new("Anchorage", 61.2181, -149.9003),
];
