//! Per-body model transforms and display scaling.
//!
//! One parameterized transform chain replaces the per-planet copy-paste of
//! the usual "draw each planet by hand" approach: orbit about the sun, push
//! out along +X, apply the axial tilt, stand the Z-up sphere upright, then
//! spin about the local vertical.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::body::Body;

/// Axis the tilt rotation is applied around, as in the reference scene.
const TILT_AXIS: Vec3 = Vec3::new(1.0, 0.0, 1.0);

/// Radius multiplier that makes scene-unit radii visible.
const RADIUS_MULT: f32 = 10_000.0;
/// True-scale sun is too big next to the planets; shrink it in distance mode.
const SUN_RADIUS_DIV: f32 = 8.0;
/// Distance multiplier applied to scene-unit distances.
const DISTANCE_MULT: f32 = 16.0;
/// Outer planets (beyond Mars) sit at half the distance multiplier so they
/// stay within view of the sun.
const OUTER_DISTANCE_CUTOFF: f32 = 1.0;

/// How the scene trades off size fidelity against distance fidelity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Relative radii are faithful; the sun keeps its true scale and
    /// distances are compressed uniformly.
    #[default]
    Size,
    /// Relative distances are emphasized; the sun is shrunk and the outer
    /// planets are pulled inward so the whole system fits in view.
    Distance,
}

impl ScaleMode {
    /// Sphere radius used for rendering this body.
    #[must_use]
    pub fn display_radius(self, body: &Body) -> f32 {
        let scaled = body.mean_radius * RADIUS_MULT;
        match self {
            ScaleMode::Size => scaled,
            ScaleMode::Distance => {
                if body.is_sun() {
                    scaled / SUN_RADIUS_DIV
                } else {
                    scaled
                }
            }
        }
    }

    /// Distance from the sun used for rendering this body.
    #[must_use]
    pub fn display_distance(self, body: &Body) -> f32 {
        match self {
            ScaleMode::Size => body.distance_from_sun * DISTANCE_MULT,
            ScaleMode::Distance => {
                let mult = if body.distance_from_sun > OUTER_DISTANCE_CUTOFF {
                    DISTANCE_MULT / 2.0
                } else {
                    DISTANCE_MULT
                };
                body.distance_from_sun * mult
            }
        }
    }

    /// Initial camera position that frames the whole scene for this mode.
    #[must_use]
    pub fn camera_start(self) -> Vec3 {
        match self {
            ScaleMode::Size => Vec3::new(0.0, 0.0, 80.0),
            ScaleMode::Distance => Vec3::new(0.0, 0.0, 20.0),
        }
    }

    /// Parses a mode name as used on the command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "size" => Some(ScaleMode::Size),
            "distance" => Some(ScaleMode::Distance),
            _ => None,
        }
    }
}

/// Builds the model matrix for a body at elapsed time `t` (seconds of scaled
/// simulation time, where one second advances every period by `t / period`).
///
/// The chain, outermost first: orbit about world +Y, translate along +X by
/// the display distance, tilt about the (1,0,1) axis, a fixed 90° about +X
/// that turns the Z-up sphere pole-up, and finally the body's own spin about
/// local +Y (negated for retrograde bodies). The sun carries no orbit term.
#[must_use]
pub fn model_matrix(body: &Body, t: f32, mode: ScaleMode) -> Mat4 {
    let mut model = Mat4::IDENTITY;

    if !body.is_sun() {
        let orbit_angle = t / body.orbital_period_years;
        model *= Mat4::from_rotation_y(orbit_angle);
        model *= Mat4::from_translation(Vec3::new(mode.display_distance(body), 0.0, 0.0));
    }

    let tilt = (360.0 - body.axial_tilt_deg).to_radians();
    model *= Mat4::from_axis_angle(TILT_AXIS.normalize(), tilt);
    model *= Mat4::from_rotation_x(FRAC_PI_2);

    let mut spin_angle = t / body.rotation_period_years;
    if body.retrograde {
        spin_angle = -spin_angle;
    }
    model *= Mat4::from_rotation_y(spin_angle);

    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::SOLAR_SYSTEM;

    fn body(name: &str) -> &'static Body {
        SOLAR_SYSTEM.iter().find(|b| b.name == name).unwrap()
    }

    #[test]
    fn test_sun_stays_at_origin() {
        let sun = body("Sun");
        for t in [0.0, 1.0, 123.4] {
            let m = model_matrix(sun, t, ScaleMode::Distance);
            let pos = m.col(3).truncate();
            assert!(pos.length() < 1e-5, "sun drifted to {pos} at t={t}");
        }
    }

    #[test]
    fn test_planet_starts_on_positive_x() {
        let earth = body("Earth");
        let m = model_matrix(earth, 0.0, ScaleMode::Distance);
        let pos = m.col(3).truncate();
        let expected = ScaleMode::Distance.display_distance(earth);
        assert!((pos.x - expected).abs() < 1e-4);
        assert!(pos.y.abs() < 1e-4 && pos.z.abs() < 1e-4);
    }

    #[test]
    fn test_half_orbit_mirrors_position() {
        let earth = body("Earth");
        let t = std::f32::consts::PI * earth.orbital_period_years;
        let m = model_matrix(earth, t, ScaleMode::Distance);
        let pos = m.col(3).truncate();
        let d = ScaleMode::Distance.display_distance(earth);
        assert!((pos.x + d).abs() < 1e-3, "expected x=-{d}, got {}", pos.x);
        assert!(pos.z.abs() < 1e-3);
    }

    #[test]
    fn test_orbit_stays_in_ecliptic_plane() {
        let mars = body("Mars");
        for i in 0..16 {
            let t = i as f32 * 0.37;
            let pos = model_matrix(mars, t, ScaleMode::Size).col(3).truncate();
            assert!(pos.y.abs() < 1e-4, "left the y=0 plane at t={t}: {pos}");
            let d = ScaleMode::Size.display_distance(mars);
            assert!((pos.length() - d).abs() < 1e-3);
        }
    }

    #[test]
    fn test_tilt_and_spin_do_not_move_the_body() {
        // Translation is fixed by the orbit terms alone; tilt and spin are
        // applied after the translate and only reorient the sphere.
        let jupiter = body("Jupiter");
        for t in [0.0, 0.7, 13.9] {
            let full = model_matrix(jupiter, t, ScaleMode::Distance);
            let orbit_only = Mat4::from_rotation_y(t / jupiter.orbital_period_years)
                * Mat4::from_translation(Vec3::new(
                    ScaleMode::Distance.display_distance(jupiter),
                    0.0,
                    0.0,
                ));
            assert!((full.col(3) - orbit_only.col(3)).length() < 1e-3, "t={t}");
        }
    }

    #[test]
    fn test_retrograde_spin_is_negated() {
        let venus = body("Venus");
        let prograde = Body {
            retrograde: false,
            ..*venus
        };
        let t = 0.25;
        let m_retro = model_matrix(venus, t, ScaleMode::Distance);
        let m_pro = model_matrix(&prograde, t, ScaleMode::Distance);
        // Same position, different orientation.
        assert!((m_retro.col(3) - m_pro.col(3)).length() < 1e-4);
        assert!(m_retro.col(0) != m_pro.col(0));
    }

    #[test]
    fn test_distance_mode_shrinks_sun_only() {
        let sun = body("Sun");
        let earth = body("Earth");
        assert!(
            ScaleMode::Distance.display_radius(sun) * SUN_RADIUS_DIV
                == ScaleMode::Size.display_radius(sun)
        );
        assert_eq!(
            ScaleMode::Distance.display_radius(earth),
            ScaleMode::Size.display_radius(earth)
        );
    }

    #[test]
    fn test_distance_mode_halves_outer_planets() {
        let mars = body("Mars");
        let jupiter = body("Jupiter");
        assert_eq!(
            ScaleMode::Distance.display_distance(mars),
            mars.distance_from_sun * DISTANCE_MULT
        );
        assert_eq!(
            ScaleMode::Distance.display_distance(jupiter),
            jupiter.distance_from_sun * DISTANCE_MULT / 2.0
        );
        assert_eq!(
            ScaleMode::Size.display_distance(jupiter),
            jupiter.distance_from_sun * DISTANCE_MULT
        );
    }

    #[test]
    fn test_camera_start_frames_each_mode() {
        assert_eq!(ScaleMode::Size.camera_start().z, 80.0);
        assert_eq!(ScaleMode::Distance.camera_start().z, 20.0);
    }
}
