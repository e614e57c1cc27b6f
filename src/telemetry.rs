//! Plateau bounds and the telemetry snapshots the rover records.

use crate::error::{Result, RoverError};
use crate::heading::Heading;
use glam::{I64Vec2, IVec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The rectangular grid the rover is allowed to drive on.
///
/// Cells are 1-indexed: a `5x5` plateau accepts positions `(1, 1)` through `(5, 5)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPlateau")]
pub struct Plateau {
    width: i32,
    height: i32,
}

/// Unvalidated wire form; deserialization goes through [`Plateau::new`].
#[derive(Deserialize)]
struct RawPlateau {
    width: i32,
    height: i32,
}

impl TryFrom<RawPlateau> for Plateau {
    type Error = RoverError;

    fn try_from(raw: RawPlateau) -> Result<Self> {
        Self::new(raw.width, raw.height)
    }
}

impl Plateau {
    /// Creates a plateau, rejecting any dimension below 1.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(RoverError::invalid_dimension(width, height));
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns `true` if `target` lies on the plateau.
    pub fn contains(&self, target: I64Vec2) -> bool {
        (1..=i64::from(self.width)).contains(&target.x)
            && (1..=i64::from(self.height)).contains(&target.y)
    }
}

impl fmt::Display for Plateau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A snapshot of the rover taken after a command was applied.
///
/// This is what the presentation layer consumes; it is serializable so front ends
/// can ship it anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Bounds in force at snapshot time. `None` only for a baseline taken before
    /// any plateau was set.
    pub plateau: Option<Plateau>,

    /// Grid cell occupied by the rover.
    pub position: IVec2,

    /// Direction the rover faces.
    pub heading: Heading,
}

impl Telemetry {
    /// Builds a snapshot from its parts.
    pub const fn new(plateau: Option<Plateau>, position: IVec2, heading: Heading) -> Self {
        Self {
            plateau,
            position,
            heading,
        }
    }
}

/// Renders the end-state line, e.g. `1, 4, West`.
impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.position.x, self.position.y, self.heading)
    }
}
