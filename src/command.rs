//! Rover commands and the symbol table that parses them.
//!
//! A [`Command`] is a stateless action: applying it only calls into a
//! [`CommandReceiver`], which owns all the mutation. [`CommandTable`] turns command
//! text into an ordered batch, one character per command.

use crate::error::{Result, RoverError};
use crate::heading::Rotation;
use std::collections::HashMap;
use std::fmt;

/// Uppercases `symbol` when it maps to exactly one character, else returns it unchanged.
///
/// `é` becomes `É`; `ß` (which uppercases to `SS`) stays `ß`.
pub fn normalize_symbol(symbol: char) -> char {
    let mut upper = symbol.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => symbol,
    }
}

/// Capabilities a command needs from whatever it drives.
pub trait CommandReceiver {
    /// Advances `units` cells along the current heading.
    ///
    /// # Errors
    ///
    /// Returns [`RoverError::OutOfBounds`] if the target cell is off the plateau;
    /// the receiver must not move in that case.
    fn move_by(&mut self, units: i32) -> Result<()>;

    /// Rotates a quarter turn in place. Always succeeds.
    fn turn(&mut self, rotation: Rotation);
}

/// Operations understood by the rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Advance one cell (`F`).
    Forward,
    /// Quarter turn counterclockwise (`L`).
    TurnLeft,
    /// Quarter turn clockwise (`R`).
    TurnRight,
}

impl Command {
    /// Applies this command to `receiver`.
    pub fn apply<R: CommandReceiver + ?Sized>(self, receiver: &mut R) -> Result<()> {
        match self {
            Self::Forward => receiver.move_by(1),
            Self::TurnLeft => {
                receiver.turn(Rotation::Counterclockwise);
                Ok(())
            }
            Self::TurnRight => {
                receiver.turn(Rotation::Clockwise);
                Ok(())
            }
        }
    }

    /// Canonical symbol of the command in the standard table.
    pub const fn symbol(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Case-insensitive map from command characters to [`Command`]s.
#[derive(Clone, Debug, Default)]
pub struct CommandTable {
    ops: HashMap<char, Command>,
}

impl CommandTable {
    /// A table with no symbols registered; every character is rejected.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard `F`/`L`/`R` symbol set.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.populate_standard_symbols();
        table
    }

    /// Registers the standard mappings, replacing any existing entry for those symbols.
    pub fn populate_standard_symbols(&mut self) {
        for command in [Command::Forward, Command::TurnLeft, Command::TurnRight] {
            self.set(command.symbol(), command);
        }
    }

    /// Assigns `command` to `symbol`. Lookups ignore case.
    pub fn set(&mut self, symbol: char, command: Command) {
        self.ops.insert(normalize_symbol(symbol), command);
    }

    /// Resolves a single character.
    ///
    /// # Errors
    ///
    /// [`RoverError::UnsupportedCommand`] naming the uppercased character.
    pub fn resolve(&self, symbol: char) -> Result<Command> {
        let key = normalize_symbol(symbol);
        self.ops
            .get(&key)
            .copied()
            .ok_or_else(|| RoverError::unsupported_command(key))
    }

    /// Parses `text` into `buffer`, one command per character, in order.
    ///
    /// On error `buffer` is left exactly as it was; nothing is appended.
    pub fn parse_into(&self, text: &str, buffer: &mut Vec<Command>) -> Result<()> {
        let start = buffer.len();
        for symbol in text.chars() {
            match self.resolve(symbol) {
                Ok(command) => buffer.push(command),
                Err(err) => {
                    buffer.truncate(start);
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Parses `text` into a fresh command list. All or nothing.
    pub fn parse(&self, text: &str) -> Result<Vec<Command>> {
        text.chars().map(|symbol| self.resolve(symbol)).collect()
    }
}
