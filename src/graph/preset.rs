//! Bundled Gujarat road network.
//!
//! Forty cities with coordinates and the main highway links between them,
//! priced in rupees (`cost`) and hours (`time`). Two corridors carry
//! direction-dependent weights to model uphill/downhill and peak/off-peak
//! pricing.

use crate::graph::{EdgeRecord, MutableGraph, Position, Positions};

/// City coordinates (latitude, longitude)
pub const GUJARAT_CITIES: &[(&str, f64, f64)] = &[
    // Major cities
    ("AHMEDABAD", 23.0225, 72.5714),
    ("SURAT", 21.1702, 72.8311),
    ("VADODARA", 22.3072, 73.1812),
    ("RAJKOT", 22.3039, 70.8022),
    ("GANDHINAGAR", 23.2156, 72.6369),
    // Secondary cities
    ("BHAVNAGAR", 21.7645, 72.1519),
    ("JAMNAGAR", 22.4707, 70.0577),
    ("JUNAGADH", 21.5222, 70.4579),
    ("ANAND", 22.5645, 72.9289),
    ("BHARUCH", 21.7051, 72.9959),
    ("NADIAD", 22.6916, 72.8634),
    ("MEHSANA", 23.5880, 72.3693),
    ("BHUJ", 23.2419, 69.6695),
    ("PORBANDAR", 21.6417, 69.6293),
    ("VAPI", 20.3893, 72.9106),
    // Additional cities
    ("NAVSARI", 20.9467, 72.9520),
    ("MORBI", 22.8371, 70.8380),
    ("SURENDRANAGAR", 22.7469, 71.6479),
    ("AMRELI", 21.6015, 71.2203),
    ("PATAN", 23.8493, 72.1266),
    ("DAHOD", 22.8344, 74.2633),
    ("GODHRA", 22.7788, 73.6143),
    ("VERAVAL", 20.9159, 70.3629),
    ("ANKLESHWAR", 21.6266, 73.0020),
    ("VALSAD", 20.5992, 72.9342),
    ("BOTAD", 22.1704, 71.6684),
    ("PALANPUR", 24.1747, 72.4320),
    ("GANDHIDHAM", 23.0753, 70.1337),
    ("JETPUR", 21.7549, 70.6241),
    ("DEESA", 24.2541, 72.1060),
    // Industrial towns
    ("MUNDRA", 22.8387, 69.7218),
    ("HAZIRA", 21.1163, 72.6491),
    ("SANAND", 22.9922, 72.3819),
    ("HALOL", 22.5027, 73.4705),
    ("KALOL", 23.2489, 72.4916),
    // Cultural and historical cities
    ("DWARKA", 22.2442, 68.9685),
    ("PALITANA", 21.5262, 71.8337),
    ("SOMNATH", 20.9060, 70.3844),
    ("CHAMPANER", 22.4862, 73.5373),
    ("DIU", 20.7144, 70.9874),
];

/// Two-way routes (from, to, cost, time), applied in order
pub const GUJARAT_ROUTES: &[(&str, &str, f64, f64)] = &[
    ("AHMEDABAD", "GANDHINAGAR", 30.0, 0.7),
    ("AHMEDABAD", "SANAND", 35.0, 0.8),
    ("AHMEDABAD", "NADIAD", 60.0, 1.0),
    ("AHMEDABAD", "MEHSANA", 75.0, 1.5),
    ("AHMEDABAD", "SURENDRANAGAR", 130.0, 2.2),
    // Express highway: expensive but fast
    ("AHMEDABAD", "RAJKOT", 350.0, 3.5),
    ("AHMEDABAD", "SURAT", 500.0, 3.0),
    ("VADODARA", "SURAT", 150.0, 2.5),
    ("VADODARA", "AHMEDABAD", 120.0, 2.0),
    ("VADODARA", "ANAND", 40.0, 0.7),
    ("VADODARA", "NADIAD", 50.0, 0.8),
    ("VADODARA", "GODHRA", 70.0, 1.2),
    ("VADODARA", "HALOL", 45.0, 0.8),
    ("VADODARA", "BHARUCH", 80.0, 1.3),
    ("SURAT", "BHARUCH", 70.0, 1.2),
    ("SURAT", "NAVSARI", 40.0, 0.7),
    ("SURAT", "VAPI", 120.0, 2.0),
    ("SURAT", "HAZIRA", 25.0, 0.4),
    ("RAJKOT", "MORBI", 65.0, 1.1),
    ("RAJKOT", "JAMNAGAR", 90.0, 1.5),
    ("RAJKOT", "JUNAGADH", 110.0, 1.8),
    ("RAJKOT", "BHAVNAGAR", 180.0, 3.0),
    ("RAJKOT", "SURENDRANAGAR", 110.0, 1.8),
    ("BHUJ", "GANDHIDHAM", 55.0, 0.9),
    ("BHUJ", "MUNDRA", 80.0, 1.3),
    ("BHUJ", "MORBI", 200.0, 3.3),
    ("MEHSANA", "PALANPUR", 70.0, 1.2),
    ("MEHSANA", "DEESA", 90.0, 1.5),
    ("MEHSANA", "PATAN", 55.0, 0.9),
    ("PORBANDAR", "DWARKA", 120.0, 2.0),
    ("PORBANDAR", "VERAVAL", 110.0, 1.8),
    ("PORBANDAR", "JUNAGADH", 120.0, 2.0),
    ("BHAVNAGAR", "PALITANA", 55.0, 0.9),
    ("BHAVNAGAR", "BOTAD", 65.0, 1.1),
    ("BHAVNAGAR", "AMRELI", 130.0, 2.2),
    ("JUNAGADH", "VERAVAL", 80.0, 1.3),
    ("JUNAGADH", "SOMNATH", 95.0, 1.6),
    ("JUNAGADH", "JETPUR", 70.0, 1.2),
    ("GODHRA", "DAHOD", 90.0, 1.5),
    ("GODHRA", "CHAMPANER", 45.0, 0.8),
    ("NAVSARI", "VALSAD", 40.0, 0.7),
    ("NAVSARI", "VAPI", 60.0, 1.0),
    ("ANKLESHWAR", "BHARUCH", 30.0, 0.5),
    ("ANKLESHWAR", "SURAT", 60.0, 1.0),
    ("MORBI", "SURENDRANAGAR", 85.0, 1.4),
    ("MORBI", "JAMNAGAR", 100.0, 1.7),
    ("KALOL", "GANDHINAGAR", 35.0, 0.6),
    ("KALOL", "MEHSANA", 50.0, 0.9),
    ("DEESA", "PALANPUR", 45.0, 0.8),
    ("DEESA", "PATAN", 85.0, 1.4),
    ("ANAND", "NADIAD", 30.0, 0.5),
    ("VERAVAL", "SOMNATH", 40.0, 0.7),
    ("GANDHIDHAM", "MUNDRA", 35.0, 0.6),
    // Village road: cheapest but slowest
    ("NADIAD", "ANAND", 30.0, 1.0),
    ("NADIAD", "VADODARA", 50.0, 0.8),
    ("NADIAD", "AHMEDABAD", 60.0, 1.5),
    ("BHARUCH", "ANKLESHWAR", 30.0, 0.5),
    ("BHARUCH", "VADODARA", 80.0, 1.3),
    ("BHARUCH", "SURAT", 70.0, 1.2),
    ("GANDHINAGAR", "KALOL", 35.0, 0.6),
    ("GANDHINAGAR", "MEHSANA", 50.0, 0.9),
    ("SURENDRANAGAR", "AHMEDABAD", 130.0, 2.2),
    ("SURENDRANAGAR", "RAJKOT", 110.0, 1.8),
];

/// Direction-specific weights (from, to, cost, time), applied after the routes
pub const GUJARAT_OVERRIDES: &[(&str, &str, f64, f64)] = &[
    // Going up costs more than going down
    ("SURAT", "VADODARA", 150.0, 2.5),
    ("VADODARA", "SURAT", 130.0, 2.5),
    // Going up takes longer than going down
    ("VADODARA", "AHMEDABAD", 120.0, 2.0),
    ("AHMEDABAD", "VADODARA", 120.0, 1.8),
];

/// Coordinates of every bundled city
pub fn gujarat_positions() -> Positions {
    GUJARAT_CITIES
        .iter()
        .map(|&(city, lat, lng)| (city, Position::new(lat, lng)))
        .collect()
}

/// Loads the bundled routes and overrides into a graph
pub fn load_gujarat_routes<G: MutableGraph>(graph: &mut G) {
    for &(from, to, cost, time) in GUJARAT_ROUTES {
        graph.upsert_edge(from, to, EdgeRecord::new(cost, time));
    }
    for &(from, to, cost, time) in GUJARAT_OVERRIDES {
        graph.set_directed_edge(from, to, EdgeRecord::new(cost, time));
    }
}
