//! Built-in named locations.

use isotherm_pathway::{PathwayError, SamplePoint};

/// A named city with coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl City {
    const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    /// Labelled sample point for this city.
    pub fn to_point(&self) -> Result<SamplePoint, PathwayError> {
        Ok(SamplePoint::new(self.lat, self.lon)?.with_label(self.name))
    }
}

/// Major world cities used when no explicit point list is configured.
pub static GLOBAL_CITIES: [City; 91] = [
    City::new("New York", 40.7128, -74.0060),
    City::new("London", 51.5074, -0.1278),
    City::new("Tokyo", 35.6762, 139.6503),
    City::new("Paris", 48.8566, 2.3522),
    City::new("Sydney", -33.8688, 151.2093),
    City::new("Singapore", 1.3521, 103.8198),
    City::new("Dubai", 25.2048, 55.2708),
    City::new("Mumbai", 19.0760, 72.8777),
    City::new("Shanghai", 31.2304, 121.4737),
    City::new("São Paulo", -23.5505, -46.6333),
    City::new("Mexico City", 19.4326, -99.1332),
    City::new("Cairo", 30.0444, 31.2357),
    City::new("Lagos", 6.5244, 3.3792),
    City::new("Jakarta", -6.2088, 106.8456),
    City::new("Seoul", 37.5665, 126.9780),
    City::new("Beijing", 39.9042, 116.4074),
    City::new("Moscow", 55.7558, 37.6173),
    City::new("Istanbul", 41.0082, 28.9784),
    City::new("Bangkok", 13.7563, 100.5018),
    City::new("Hong Kong", 22.3193, 114.1694),
    City::new("Toronto", 43.6532, -79.3832),
    City::new("Chicago", 41.8781, -87.6298),
    City::new("Los Angeles", 34.0522, -118.2437),
    City::new("San Francisco", 37.7749, -122.4194),
    City::new("Miami", 25.7617, -80.1918),
    City::new("Houston", 29.7604, -95.3698),
    City::new("Dallas", 32.7767, -96.7970),
    City::new("Seattle", 47.6062, -122.3321),
    City::new("Boston", 42.3601, -71.0589),
    City::new("Atlanta", 33.7490, -84.3880),
    City::new("Denver", 39.7392, -104.9903),
    City::new("Phoenix", 33.4484, -112.0740),
    City::new("Berlin", 52.5200, 13.4050),
    City::new("Madrid", 40.4168, -3.7038),
    City::new("Rome", 41.9028, 12.4964),
    City::new("Amsterdam", 52.3676, 4.9041),
    City::new("Frankfurt", 50.1109, 8.6821),
    City::new("Zurich", 47.3769, 8.5417),
    City::new("Vienna", 48.2082, 16.3738),
    City::new("Stockholm", 59.3293, 18.0686),
    City::new("Copenhagen", 55.6761, 12.5683),
    City::new("Oslo", 59.9139, 10.7522),
    City::new("Helsinki", 60.1699, 24.9384),
    City::new("Warsaw", 52.2297, 21.0122),
    City::new("Prague", 50.0755, 14.4378),
    City::new("Brussels", 50.8503, 4.3517),
    City::new("Dublin", 53.3498, -6.2603),
    City::new("Lisbon", 38.7223, -9.1393),
    City::new("Athens", 37.9838, 23.7275),
    City::new("Tel Aviv", 32.0853, 34.7818),
    City::new("Johannesburg", -26.2041, 28.0473),
    City::new("Cape Town", -33.9249, 18.4241),
    City::new("Nairobi", -1.2921, 36.8219),
    City::new("Casablanca", 33.5731, -7.5898),
    City::new("Riyadh", 24.7136, 46.6753),
    City::new("Abu Dhabi", 24.4539, 54.3773),
    City::new("Doha", 25.2854, 51.5310),
    City::new("Kuwait City", 29.3759, 47.9774),
    City::new("Karachi", 24.8607, 67.0011),
    City::new("Delhi", 28.7041, 77.1025),
    City::new("Bangalore", 12.9716, 77.5946),
    City::new("Chennai", 13.0827, 80.2707),
    City::new("Kolkata", 22.5726, 88.3639),
    City::new("Manila", 14.5995, 120.9842),
    City::new("Ho Chi Minh City", 10.8231, 106.6297),
    City::new("Kuala Lumpur", 3.1390, 101.6869),
    City::new("Taipei", 25.0330, 121.5654),
    City::new("Osaka", 34.6937, 135.5023),
    City::new("Nagoya", 35.1815, 136.9066),
    City::new("Fukuoka", 33.5904, 130.4017),
    City::new("Melbourne", -37.8136, 144.9631),
    City::new("Brisbane", -27.4698, 153.0251),
    City::new("Perth", -31.9505, 115.8605),
    City::new("Auckland", -36.8485, 174.7633),
    City::new("Wellington", -41.2865, 174.7762),
    City::new("Buenos Aires", -34.6037, -58.3816),
    City::new("Santiago", -33.4489, -70.6693),
    City::new("Lima", -12.0464, -77.0428),
    City::new("Bogotá", 4.7110, -74.0721),
    City::new("Rio de Janeiro", -22.9068, -43.1729),
    City::new("Brasília", -15.7975, -47.8919),
    City::new("Caracas", 10.4806, -66.9036),
    City::new("Havana", 23.1136, -82.3666),
    City::new("Panama City", 8.9824, -79.5199),
    City::new("Vancouver", 49.2827, -123.1207),
    City::new("Montreal", 45.5017, -73.5673),
    City::new("Calgary", 51.0447, -114.0719),
    City::new("Minneapolis", 44.9778, -93.2650),
    City::new("Detroit", 42.3314, -83.0458),
    City::new("Philadelphia", 39.9526, -75.1652),
    City::new("Washington DC", 38.9072, -77.0369),
];

/// [`GLOBAL_CITIES`] as labelled sample points.
pub fn default_points() -> Result<Vec<SamplePoint>, PathwayError> {
    GLOBAL_CITIES.iter().map(City::to_point).collect()
}
