//! Cardinal headings and the rotation algebra between them.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A quarter turn applied to a [`Heading`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// Right turn (`R`).
    Clockwise,
    /// Left turn (`L`).
    Counterclockwise,
}

impl Rotation {
    /// Step applied to the heading ordinal: `+1` clockwise, `-1` counterclockwise.
    pub const fn signum(self) -> i8 {
        match self {
            Self::Clockwise => 1,
            Self::Counterclockwise => -1,
        }
    }

    /// The rotation that undoes this one.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Clockwise => Self::Counterclockwise,
            Self::Counterclockwise => Self::Clockwise,
        }
    }
}

/// The cardinal direction the rover faces.
///
/// Variants are declared in clockwise order; turning walks that cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order, starting at North.
    pub const ALL: [Heading; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Position of this heading in [`Heading::ALL`].
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Heading at `ordinal`, wrapped into `0..4`.
    pub const fn from_ordinal(ordinal: i32) -> Self {
        Self::ALL[ordinal.rem_euclid(4) as usize]
    }

    /// Returns the heading reached by a single quarter turn.
    ///
    /// North→East→South→West→North clockwise, the reverse counterclockwise.
    pub const fn turn(self, rotation: Rotation) -> Self {
        Self::from_ordinal(self.ordinal() as i32 + rotation.signum() as i32)
    }

    /// Grid offset of one step forward: North is `+y`, East is `+x`.
    pub const fn unit(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    /// Literal name used in telemetry output, e.g. `"North"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
