//! Real Paris locations for realistic test fixtures.
//!
//! Coordinates from OpenStreetMap, rounded to 4-5 decimals.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Hôtel de Ville, where the worker starts in most tests.
pub const HOTEL_DE_VILLE: Location = Location::new("Hôtel de Ville", 48.85341, 2.3488);

// ============================================================================
// Central Paris
// ============================================================================

pub const CENTRAL: &[Location] = &[
    Location::new("Louvre", 48.8606, 2.3376),
    Location::new("Notre-Dame", 48.8530, 2.3499),
    Location::new("Place de la Bastille", 48.8532, 2.3691),
    Location::new("Gare de Lyon", 48.8443, 2.3744),
    Location::new("Châtelet", 48.8582, 2.3470),
    Location::new("Place de la République", 48.8674, 2.3636),
];

// ============================================================================
// Outer arrondissements
// ============================================================================

pub const OUTER: &[Location] = &[
    Location::new("Tour Eiffel", 48.8584, 2.2945),
    Location::new("Arc de Triomphe", 48.8738, 2.2950),
    Location::new("Sacré-Cœur", 48.8867, 2.3431),
    Location::new("Parc des Buttes-Chaumont", 48.8809, 2.3828),
    Location::new("Porte de Versailles", 48.8323, 2.2876),
    Location::new("Bibliothèque François-Mitterrand", 48.8336, 2.3765),
];

// ============================================================================
// Outside the city
// ============================================================================

pub const SUBURBS: &[Location] = &[
    Location::new("Château de Versailles", 48.8049, 2.1204),
    Location::new("Roissy-Charles de Gaulle", 49.0097, 2.5479),
    Location::new("Disneyland Paris", 48.8722, 2.7758),
];

pub fn all_locations() -> Vec<&'static Location> {
    CENTRAL.iter().chain(OUTER).chain(SUBURBS).collect()
}
