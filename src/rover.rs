//! The rover state machine.

use crate::command::{Command, CommandReceiver};
use crate::error::{Result, RoverError};
use crate::heading::{Heading, Rotation};
use crate::telemetry::{Plateau, Telemetry};
use glam::{I64Vec2, IVec2};
use tracing::{debug, info, warn};

/// What a [`Transmitter`](crate::Transmitter) talks to.
///
/// Implemented by [`Rover`]; tests substitute their own receivers to observe
/// exactly what the transmitter forwards.
pub trait Receiver {
    /// Sets the plateau bounds. Calling it again replaces the bounds.
    fn init(&mut self, plateau: Plateau);

    /// Applies `commands` in order, recording telemetry after each one.
    ///
    /// # Errors
    ///
    /// [`RoverError::NotInitialized`] if no plateau was set, or the first error a
    /// command raises. Telemetry for commands applied before the failure is kept.
    fn execute(&mut self, commands: &[Command]) -> Result<()>;

    /// Returns the telemetry log, seeding it with the current state if it is empty.
    fn state(&mut self) -> &[Telemetry];
}

/// A grid-bound rover.
///
/// Starts at `(1, 1)` facing North with no plateau. Position only changes through
/// validated moves, so once a plateau is set the rover never leaves it.
#[derive(Clone, Debug)]
pub struct Rover {
    plateau: Option<Plateau>,
    heading: Heading,
    position: IVec2,
    telemetry: Vec<Telemetry>,
}

impl Default for Rover {
    fn default() -> Self {
        Self {
            plateau: None,
            heading: Heading::North,
            position: IVec2::ONE,
            telemetry: Vec::new(),
        }
    }
}

impl Rover {
    /// Creates a rover at `(1, 1)` facing North, with no plateau.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current grid cell.
    pub fn position(&self) -> IVec2 {
        self.position
    }

    /// Direction currently faced.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Bounds in force, if [`Receiver::init`] has been called.
    pub fn plateau(&self) -> Option<Plateau> {
        self.plateau
    }

    /// Returns `true` once a plateau has been set.
    pub fn is_initialized(&self) -> bool {
        self.plateau.is_some()
    }

    /// The recorded log, without seeding a baseline entry.
    pub fn telemetry(&self) -> &[Telemetry] {
        &self.telemetry
    }

    fn snapshot(&self) -> Telemetry {
        Telemetry::new(self.plateau, self.position, self.heading)
    }
}

impl CommandReceiver for Rover {
    fn move_by(&mut self, units: i32) -> Result<()> {
        // Widened so a rover on the edge of an i32::MAX plateau cannot overflow.
        let delta = self.heading.unit().as_i64vec2() * i64::from(units);
        let target: I64Vec2 = self.position.as_i64vec2() + delta;

        match self.plateau {
            Some(plateau) if plateau.contains(target) => {
                self.position = target.as_ivec2();
                Ok(())
            }
            plateau => {
                warn!(
                    x = target.x,
                    y = target.y,
                    heading = %self.heading,
                    "Move rejected, target is off the plateau"
                );
                Err(RoverError::out_of_bounds(target, plateau))
            }
        }
    }

    fn turn(&mut self, rotation: Rotation) {
        self.heading = self.heading.turn(rotation);
    }
}

impl Receiver for Rover {
    fn init(&mut self, plateau: Plateau) {
        info!(
            width = plateau.width(),
            height = plateau.height(),
            "Plateau initialized"
        );
        self.plateau = Some(plateau);
    }

    fn execute(&mut self, commands: &[Command]) -> Result<()> {
        if !self.is_initialized() {
            warn!(commands = commands.len(), "Execute called before init");
            return Err(RoverError::NotInitialized);
        }

        for (step, command) in commands.iter().enumerate() {
            command.apply(self)?;
            debug!(
                step,
                %command,
                x = self.position.x,
                y = self.position.y,
                heading = %self.heading,
                "Command applied"
            );
            let snapshot = self.snapshot();
            self.telemetry.push(snapshot);
        }

        Ok(())
    }

    fn state(&mut self) -> &[Telemetry] {
        if self.telemetry.is_empty() {
            let baseline = self.snapshot();
            self.telemetry.push(baseline);
        }
        &self.telemetry
    }
}
