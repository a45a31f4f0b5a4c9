//! Orientation-relative grid geometry.
//!
//! The arena uses screen coordinates: `x` grows to the East and `y` grows to
//! the South, so North is `(0, -1)`. Every tactical question is asked
//! relative to a player's facing ("what stands two cells to my left?"),
//! which is answered by rotating the facing vector with a [`Rotation`],
//! scaling it by a distance and adding it to the player's position.

use std::fmt;

/// Discrete grid position expressed in cell coordinates.
///
/// Coordinates are signed so that projections past the arena edge stay
/// representable and can be rejected by a bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Moves `distance` steps along `direction`.
    ///
    /// Saturates at the `i32` range; such cells are off any arena anyway.
    #[inline]
    pub fn step(self, direction: Offset, distance: i32) -> Self {
        let delta = direction.scale(distance);
        Self {
            x: self.x.saturating_add(delta.dx),
            y: self.y.saturating_add(delta.dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Integer displacement between two cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub const fn scale(self, factor: i32) -> Self {
        Self {
            dx: self.dx.saturating_mul(factor),
            dy: self.dy.saturating_mul(factor),
        }
    }
}

/// Cardinal facing of a player.
///
/// Parsed from the single-letter wire codes `N`, `S`, `E`, `W`
/// (case-sensitive).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum Orientation {
    #[strum(serialize = "N")]
    North,
    #[strum(serialize = "S")]
    South,
    #[strum(serialize = "E")]
    East,
    #[strum(serialize = "W")]
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
    ];

    /// Unit vector of this facing.
    pub const fn vector(self) -> Offset {
        match self {
            Orientation::North => Offset::new(0, -1),
            Orientation::South => Offset::new(0, 1),
            Orientation::East => Offset::new(1, 0),
            Orientation::West => Offset::new(-1, 0),
        }
    }
}

/// Direction relative to a facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Rotation {
    Front,
    Left,
    Right,
    Back,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Front,
        Rotation::Left,
        Rotation::Right,
        Rotation::Back,
    ];

    /// 2×2 transform `m`, applied as `x' = m[0][0]·dx + m[1][0]·dy`,
    /// `y' = m[0][1]·dx + m[1][1]·dy`.
    ///
    /// With `y` pointing South, `Left` turns a North facing to West and
    /// `Right` turns it to East.
    pub const fn matrix(self) -> [[i32; 2]; 2] {
        match self {
            Rotation::Front => [[1, 0], [0, 1]],
            Rotation::Left => [[0, -1], [1, 0]],
            Rotation::Right => [[0, 1], [-1, 0]],
            Rotation::Back => [[-1, 0], [0, -1]],
        }
    }

    /// Rotates a facing vector.
    #[inline]
    pub const fn apply(self, facing: Offset) -> Offset {
        let m = self.matrix();
        Offset {
            dx: m[0][0] * facing.dx + m[1][0] * facing.dy,
            dy: m[0][1] * facing.dx + m[1][1] * facing.dy,
        }
    }
}

/// Cell reached from `origin` facing `orientation` after turning by
/// `rotation` and walking `distance` cells.
#[inline]
pub fn project(
    origin: Position,
    orientation: Orientation,
    rotation: Rotation,
    distance: u32,
) -> Position {
    let direction = rotation.apply(orientation.vector());
    origin.step(direction, i32::try_from(distance).unwrap_or(i32::MAX))
}
