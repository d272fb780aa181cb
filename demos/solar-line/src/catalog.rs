//! Built-in body catalog: the Sun, eight planets and their major moons.
//!
//! Radii are physical, in km. Planet distances are from the Sun and moon
//! distances from their parent planet, both in millions of km.

use scaleline::Rgb;
use thiserror::Error;

/// One catalog entry. Immutable, defined at build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    pub name: &'static str,
    pub radius_km: f64,
    pub distance_mkm: f64,
    pub color: Rgb,
    /// Planet a moon orbits. `None` for the Sun and planets.
    pub parent: Option<&'static str>,
}

impl CelestialBody {
    const fn new(name: &'static str, radius_km: f64, distance_mkm: f64, color: Rgb) -> Self {
        Self { name, radius_km, distance_mkm, color, parent: None }
    }

    const fn moon(
        name: &'static str,
        radius_km: f64,
        distance_mkm: f64,
        color: Rgb,
        parent: &'static str,
    ) -> Self {
        Self { name, radius_km, distance_mkm, color, parent: Some(parent) }
    }
}

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN: CelestialBody = CelestialBody::new("Sun", 695_700.0, 0.0, Rgb::new(255, 255, 0));

// ── Planets ──────────────────────────────────────────────────────────

pub const PLANET_COUNT: usize = 8;

pub const PLANETS: [CelestialBody; PLANET_COUNT] = [
    CelestialBody::new("Mercury", 2439.7, 57.9, Rgb::new(169, 169, 169)),
    CelestialBody::new("Venus", 6051.8, 108.2, Rgb::new(218, 165, 32)),
    CelestialBody::new("Earth", 6371.0, 149.6, Rgb::new(0, 102, 204)),
    CelestialBody::new("Mars", 3389.5, 227.9, Rgb::new(188, 39, 50)),
    CelestialBody::new("Jupiter", 69911.0, 778.6, Rgb::new(255, 165, 0)),
    CelestialBody::new("Saturn", 58232.0, 1433.5, Rgb::new(210, 180, 140)),
    CelestialBody::new("Uranus", 25362.0, 2872.5, Rgb::new(173, 216, 230)),
    CelestialBody::new("Neptune", 24622.0, 4495.1, Rgb::new(0, 0, 128)),
];

// ── Moons ────────────────────────────────────────────────────────────

pub const MOON_COUNT: usize = 19;

pub const MOONS: [CelestialBody; MOON_COUNT] = [
    CelestialBody::moon("Moon", 1737.4, 0.384, Rgb::new(200, 200, 200), "Earth"),
    CelestialBody::moon("Phobos", 11.267, 0.009, Rgb::new(169, 169, 169), "Mars"),
    CelestialBody::moon("Deimos", 6.2, 0.023, Rgb::new(211, 211, 211), "Mars"),
    CelestialBody::moon("Io", 1821.6, 0.422, Rgb::new(218, 165, 32), "Jupiter"),
    CelestialBody::moon("Europa", 1560.8, 0.671, Rgb::new(245, 245, 245), "Jupiter"),
    CelestialBody::moon("Ganymede", 2634.1, 1.070, Rgb::new(192, 192, 192), "Jupiter"),
    CelestialBody::moon("Callisto", 2410.3, 1.882, Rgb::new(169, 169, 169), "Jupiter"),
    CelestialBody::moon("Titan", 2575.5, 1.221, Rgb::new(255, 228, 181), "Saturn"),
    CelestialBody::moon("Rhea", 764.3, 0.527, Rgb::new(211, 211, 211), "Saturn"),
    CelestialBody::moon("Iapetus", 734.5, 3.561, Rgb::new(240, 230, 140), "Saturn"),
    CelestialBody::moon("Enceladus", 252.1, 0.238, Rgb::new(245, 245, 245), "Saturn"),
    CelestialBody::moon("Titania", 788.9, 0.436, Rgb::new(173, 216, 230), "Uranus"),
    CelestialBody::moon("Oberon", 761.4, 0.586, Rgb::new(176, 196, 222), "Uranus"),
    CelestialBody::moon("Ariel", 578.9, 0.191, Rgb::new(175, 238, 238), "Uranus"),
    CelestialBody::moon("Umbriel", 584.7, 0.266, Rgb::new(119, 136, 153), "Uranus"),
    CelestialBody::moon("Triton", 1353.4, 0.355, Rgb::new(176, 196, 222), "Neptune"),
    CelestialBody::moon("Proteus", 210.0, 0.117, Rgb::new(169, 169, 169), "Neptune"),
    CelestialBody::moon("Nereid", 170.0, 5.513, Rgb::new(211, 211, 211), "Neptune"),
    CelestialBody::moon("Larissa", 97.0, 0.073, Rgb::new(190, 190, 190), "Neptune"),
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("moon {moon} orbits unknown planet {parent}")]
    UnknownParent { moon: String, parent: String },
    #[error("{name} must have a positive radius")]
    NonPositiveRadius { name: String },
    #[error("{name} must have a non-negative distance")]
    NegativeDistance { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Sun,
    Planet,
    Moon,
}

/// A body with its absolute distance from the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub body: &'a CelestialBody,
    pub kind: BodyKind,
    /// Distance from the Sun in Mkm: planet distance, plus own distance for moons.
    pub world_mkm: f64,
}

/// View over a sun, its planets and their moons.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    sun: &'a CelestialBody,
    planets: &'a [CelestialBody],
    moons: &'a [CelestialBody],
}

impl Catalog<'static> {
    pub fn builtin() -> Self {
        Self::new(&SUN, &PLANETS, &MOONS)
    }
}

impl<'a> Catalog<'a> {
    pub fn new(sun: &'a CelestialBody, planets: &'a [CelestialBody], moons: &'a [CelestialBody]) -> Self {
        Self { sun, planets, moons }
    }

    pub fn planets(&self) -> &'a [CelestialBody] {
        self.planets
    }

    pub fn moons(&self) -> &'a [CelestialBody] {
        self.moons
    }

    /// Check radii, distances and that every moon's parent is a planet.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for body in std::iter::once(self.sun).chain(self.planets).chain(self.moons) {
            if !(body.radius_km > 0.0) {
                return Err(CatalogError::NonPositiveRadius { name: body.name.to_string() });
            }
            if !(body.distance_mkm >= 0.0) {
                return Err(CatalogError::NegativeDistance { name: body.name.to_string() });
            }
        }
        for moon in self.moons {
            let parent = moon.parent.unwrap_or_default();
            if self.planet(parent).is_none() {
                return Err(CatalogError::UnknownParent {
                    moon: moon.name.to_string(),
                    parent: parent.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn planet(&self, name: &str) -> Option<&'a CelestialBody> {
        self.planets.iter().find(|p| p.name == name)
    }

    /// Planet a moon orbits.
    pub fn parent_of(&self, moon: &CelestialBody) -> Option<&'a CelestialBody> {
        moon.parent.and_then(|name| self.planet(name))
    }

    /// Moons of `planet`, in catalog order.
    pub fn moons_of<'s>(&self, planet: &'s str) -> impl Iterator<Item = &'a CelestialBody> + 's
    where
        'a: 's,
    {
        self.moons.iter().filter(move |m| m.parent == Some(planet))
    }

    /// Every reachable body in draw order: the Sun, then each planet followed
    /// by its moons. Moons with an unknown parent are left out.
    pub fn placements(&self) -> Vec<Placement<'a>> {
        let mut out = Vec::with_capacity(1 + self.planets.len() + self.moons.len());
        out.push(Placement { body: self.sun, kind: BodyKind::Sun, world_mkm: 0.0 });
        for planet in self.planets {
            out.push(Placement { body: planet, kind: BodyKind::Planet, world_mkm: planet.distance_mkm });
            for moon in self.moons_of(planet.name) {
                out.push(Placement {
                    body: moon,
                    kind: BodyKind::Moon,
                    world_mkm: planet.distance_mkm + moon.distance_mkm,
                });
            }
        }
        out
    }

    /// Largest distance from the Sun over all placed bodies, in Mkm.
    pub fn farthest_distance_mkm(&self) -> f64 {
        self.placements()
            .iter()
            .map(|p| p.world_mkm)
            .fold(0.0, f64::max)
    }
}
