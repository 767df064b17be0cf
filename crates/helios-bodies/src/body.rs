//! The solar-system body table.
//!
//! One record per body drives the whole render loop; all per-planet constants
//! live here instead of being duplicated across entry points.
//!
//! Units: radii and distances are scene units where the Sun–Neptune distance
//! is 10.0; rotation and orbital periods are Earth years.

/// Constants describing one body of the solar system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Display name.
    pub name: &'static str,
    /// Axial tilt in degrees.
    pub axial_tilt_deg: f32,
    /// Mean radius in scene units.
    pub mean_radius: f32,
    /// Mean distance from the sun in scene units (0 for the sun itself).
    pub distance_from_sun: f32,
    /// Sidereal rotation period in Earth years.
    pub rotation_period_years: f32,
    /// Orbital period in Earth years (0 for the sun).
    pub orbital_period_years: f32,
    /// Whether the body spins opposite to its orbital direction.
    pub retrograde: bool,
    /// Equirectangular texture file for this body.
    pub texture_file: &'static str,
}

impl Body {
    /// Whether this record is the central body (orbits nothing).
    #[must_use]
    pub fn is_sun(&self) -> bool {
        self.distance_from_sun == 0.0
    }
}

/// The sun and the eight planets, in distance order.
pub const SOLAR_SYSTEM: [Body; 9] = [
    Body {
        name: "Sun",
        axial_tilt_deg: 7.25,
        mean_radius: 0.00155,
        distance_from_sun: 0.0,
        rotation_period_years: 0.104,
        orbital_period_years: 0.0,
        retrograde: false,
        texture_file: "sun.jpg",
    },
    Body {
        name: "Mercury",
        axial_tilt_deg: 0.01,
        mean_radius: 0.0000054,
        distance_from_sun: 0.129,
        rotation_period_years: 0.16,
        orbital_period_years: 0.24,
        retrograde: false,
        texture_file: "mercury.jpg",
    },
    Body {
        name: "Venus",
        axial_tilt_deg: 177.4,
        mean_radius: 0.0000134,
        distance_from_sun: 0.240,
        rotation_period_years: 0.67,
        orbital_period_years: 0.62,
        retrograde: true,
        texture_file: "venus.jpg",
    },
    Body {
        name: "Earth",
        axial_tilt_deg: 23.5,
        mean_radius: 0.0000142,
        distance_from_sun: 0.333,
        rotation_period_years: 0.00274,
        orbital_period_years: 1.0,
        retrograde: false,
        texture_file: "earth.jpg",
    },
    Body {
        name: "Mars",
        axial_tilt_deg: 25.2,
        mean_radius: 0.0000075,
        distance_from_sun: 0.506,
        rotation_period_years: 0.00282,
        orbital_period_years: 1.88,
        retrograde: false,
        texture_file: "mars.jpg",
    },
    Body {
        name: "Jupiter",
        axial_tilt_deg: 3.1,
        mean_radius: 0.000155,
        distance_from_sun: 1.730,
        rotation_period_years: 0.00114,
        orbital_period_years: 11.86,
        retrograde: false,
        texture_file: "jupiter.jpg",
    },
    Body {
        name: "Saturn",
        axial_tilt_deg: 26.7,
        mean_radius: 0.000129,
        distance_from_sun: 3.171,
        rotation_period_years: 0.00122,
        orbital_period_years: 29.46,
        retrograde: false,
        texture_file: "saturn.jpg",
    },
    Body {
        name: "Uranus",
        axial_tilt_deg: 97.8,
        mean_radius: 0.000056,
        distance_from_sun: 6.386,
        rotation_period_years: 0.00196,
        orbital_period_years: 84.01,
        retrograde: true,
        texture_file: "uranus.jpg",
    },
    Body {
        name: "Neptune",
        axial_tilt_deg: 28.3,
        mean_radius: 0.000055,
        distance_from_sun: 10.0,
        rotation_period_years: 0.00184,
        orbital_period_years: 164.8,
        retrograde: false,
        texture_file: "neptune.jpg",
    },
];
