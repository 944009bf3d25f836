/// Body catalog: the central star and the eight planets, in orbit order.
///
/// Distances and speeds are scene units, not astronomical ones: orbits are
/// spaced for readability and speeds chosen so the inner planets visibly move.

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_NAME: &str = "Sun";
pub const SUN_RADIUS: f32 = 5.0;
pub const SUN_SEGMENTS: u32 = 64;
pub const SUN_COLOR: &str = "#ffd700";
pub const SUN_EMISSIVE: &str = "#ff8c00";
pub const SUN_EMISSIVE_INTENSITY: f32 = 2.5;
pub const SUN_METALNESS: f32 = 0.3;
pub const SUN_ROUGHNESS: f32 = 0.4;

// ── Planets ──────────────────────────────────────────────────────────

pub const PLANET_SEGMENTS: u32 = 32;
pub const PLANET_METALNESS: f32 = 0.4;
pub const PLANET_ROUGHNESS: f32 = 0.7;
/// Planets glow faintly in their own color.
pub const PLANET_EMISSIVE_INTENSITY: f32 = 0.1;

/// Immutable configuration for one orbiting body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDesc {
    pub name: &'static str,
    /// Visual sphere radius.
    pub radius: f32,
    /// Orbit radius around the origin.
    pub distance: f64,
    /// Radians per time unit; the sign picks the direction of travel.
    pub angular_speed: f64,
    /// `#rrggbb` color identifier.
    pub color: &'static str,
    pub details: Option<&'static str>,
}

pub const PLANET_COUNT: usize = 8;

pub static PLANETS: [BodyDesc; PLANET_COUNT] = [
    BodyDesc {
        name: "Mercury", radius: 0.8, distance: 15.0, angular_speed: 0.5, color: "#b5a642",
        details: Some("Smallest planet, closest to the Sun. Surface temperature varies dramatically."),
    },
    BodyDesc {
        name: "Venus", radius: 1.2, distance: 20.0, angular_speed: 0.4, color: "#e6b800",
        details: Some("Often called Earth's sister planet due to similar size. Hottest planet due to greenhouse effect."),
    },
    BodyDesc {
        name: "Earth", radius: 1.5, distance: 25.0, angular_speed: 0.3, color: "#4287f5",
        details: Some("Our home planet. Only known planet with life. Has one natural satellite: the Moon."),
    },
    BodyDesc {
        name: "Mars", radius: 1.2, distance: 30.0, angular_speed: 0.25, color: "#ff4d4d",
        details: Some("The Red Planet. Has the largest volcano in the solar system: Olympus Mons."),
    },
    BodyDesc {
        name: "Jupiter", radius: 2.5, distance: 40.0, angular_speed: 0.15, color: "#ffa500",
        details: Some("Largest planet in our solar system. Has a Great Red Spot storm that's been raging for centuries."),
    },
    BodyDesc {
        name: "Saturn", radius: 2.0, distance: 50.0, angular_speed: 0.1, color: "#ffd700",
        details: Some("Known for its beautiful ring system. Has 82 confirmed moons."),
    },
    BodyDesc {
        name: "Uranus", radius: 1.8, distance: 60.0, angular_speed: 0.08, color: "#87ceeb",
        details: Some("Ice giant that rotates on its side. Has a unique blue-green color due to methane."),
    },
    BodyDesc {
        name: "Neptune", radius: 1.8, distance: 70.0, angular_speed: 0.06, color: "#4169e1",
        details: Some("The windiest planet, with speeds reaching 1,200 mph. Has 14 known moons."),
    },
];

impl BodyDesc {
    /// Body text for the detail panel: the catalog description, or the orbit
    /// distance when the body has none, followed by its speed.
    pub fn detail_lines(&self) -> Vec<String> {
        let summary = match self.details {
            Some(text) => text.to_string(),
            None => format!("Distance from Sun: {} units", self.distance),
        };
        vec![summary, format!("Orbital Speed: {:.2} units", self.angular_speed)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::Color;

    #[test]
    fn orbits_nest_from_15_to_70() {
        assert_eq!(PLANETS[0].distance, 15.0);
        assert_eq!(PLANETS[PLANET_COUNT - 1].distance, 70.0);
        for pair in PLANETS.windows(2) {
            assert!(
                pair[1].distance > pair[0].distance,
                "{} does not orbit outside {}",
                pair[1].name,
                pair[0].name
            );
        }
    }

    #[test]
    fn every_body_moves_and_has_size() {
        for body in &PLANETS {
            assert!(body.angular_speed != 0.0, "{} is static", body.name);
            assert!(body.radius > 0.0 && body.distance > 0.0);
            // Planet must clear the sun's surface.
            assert!(body.distance as f32 - body.radius > SUN_RADIUS);
        }
    }

    #[test]
    fn catalog_colors_parse() {
        for body in &PLANETS {
            assert!(Color::from_hex(body.color).is_ok(), "{} color {}", body.name, body.color);
        }
        assert!(Color::from_hex(SUN_COLOR).is_ok());
        assert!(Color::from_hex(SUN_EMISSIVE).is_ok());
    }

    #[test]
    fn detail_lines_fall_back_to_distance() {
        let bare = BodyDesc { details: None, ..PLANETS[2] };
        assert_eq!(
            bare.detail_lines(),
            vec!["Distance from Sun: 25 units".to_string(), "Orbital Speed: 0.30 units".to_string()]
        );
        assert!(PLANETS[2].detail_lines()[0].starts_with("Our home planet."));
    }
}
