//! # rover-telemetry
//!
//! A grid-bound rover driven by compact command text.
//!
//! A [`Transmitter`] parses a plateau size (`"5x5"`) and a command string
//! (`"FFRFLFLF"`), hands the resulting [`Command`] batch to a [`Rover`], and returns
//! the rover's [`Telemetry`] log: one snapshot of plateau, position and heading per
//! applied command. Rendering that log is left to the caller.
//!
//! ```
//! use rover_telemetry::{Heading, Rover, Transmitter};
//!
//! let mut transmitter = Transmitter::new(Rover::new());
//! transmitter.init("5x5").unwrap();
//! let log = transmitter.send("FFRFLFLF").unwrap();
//!
//! assert_eq!(log.len(), 8);
//! let last = log.last().unwrap();
//! assert_eq!((last.position.x, last.position.y), (1, 4));
//! assert_eq!(last.heading, Heading::West);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod command;
pub mod error;
pub mod heading;
pub mod rover;
pub mod telemetry;
pub mod transmitter;

pub use command::*;
pub use error::*;
pub use heading::*;
pub use rover::*;
pub use telemetry::*;
pub use transmitter::*;
