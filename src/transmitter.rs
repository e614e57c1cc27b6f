//! Text front door to a [`Receiver`].
//!
//! The entry point is [`Transmitter`]. Give it a receiver (normally a
//! [`Rover`](crate::Rover)), call [`Transmitter::init`] with a plateau such as
//! `"5x5"`, then [`Transmitter::send`] command text such as `"FFRFLFLF"` and read
//! back the telemetry log.

use crate::command::{Command, CommandTable};
use crate::error::{Result, RoverError};
use crate::rover::Receiver;
use crate::telemetry::{Plateau, Telemetry};
use tracing::{info, warn};

/// Configuration for a [`Transmitter`].
#[derive(Clone, Debug)]
pub struct TransmitterConfig {
    /// Maximum number of command characters accepted by a single `send`.
    pub capacity: usize,
}

impl Default for TransmitterConfig {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

/// Parses a `<width>x<height>` plateau description such as `"30x100"`.
///
/// Both sides must be plain ASCII decimal digits around a lowercase `x`.
///
/// # Errors
///
/// - [`RoverError::NullOrEmptyInput`] for empty text.
/// - [`RoverError::FormatMismatch`] if the text is not `<digits>x<digits>`.
/// - [`RoverError::InvalidDimension`] if a side is 0 or too large to represent.
pub fn parse_plateau(text: &str) -> Result<Plateau> {
    if text.is_empty() {
        return Err(RoverError::empty("plateau"));
    }

    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let (width, height) = text
        .split_once('x')
        .filter(|(w, h)| is_number(w) && is_number(h))
        .ok_or_else(|| RoverError::format_mismatch(text))?;

    // Errors carry the digits as written, so `007x0` is reported as `007x0`.
    let invalid = || RoverError::invalid_dimension(width, height);
    match (width.parse::<i32>(), height.parse::<i32>()) {
        (Ok(w), Ok(h)) => Plateau::new(w, h).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Turns plateau and command text into calls on a [`Receiver`].
pub struct Transmitter<R> {
    receiver: R,
    table: CommandTable,
    buffer: Vec<Command>,
    config: TransmitterConfig,
}

impl<R: Receiver> Transmitter<R> {
    /// Creates a transmitter with the standard command table and default config.
    pub fn new(receiver: R) -> Self {
        Self::with_config(receiver, TransmitterConfig::default())
    }

    /// Creates a transmitter with the standard command table and the given config.
    pub fn with_config(receiver: R, config: TransmitterConfig) -> Self {
        Self {
            receiver,
            table: CommandTable::standard(),
            buffer: Vec::with_capacity(config.capacity),
            config,
        }
    }

    /// Replaces the command table (builder pattern).
    pub fn with_table(mut self, table: CommandTable) -> Self {
        self.table = table;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &TransmitterConfig {
        &self.config
    }

    /// Borrows the receiver commands are forwarded to.
    pub fn receiver(&self) -> &R {
        &self.receiver
    }

    /// Mutably borrows the receiver, e.g. to read its state directly.
    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.receiver
    }

    /// Consumes the transmitter and hands back its receiver.
    pub fn into_receiver(self) -> R {
        self.receiver
    }

    /// Parses `plateau` (see [`parse_plateau`]) and forwards the bounds to the receiver.
    pub fn init(&mut self, plateau: &str) -> Result<()> {
        let plateau = parse_plateau(plateau).inspect_err(|err| {
            warn!(%err, "Plateau rejected");
        })?;
        self.receiver.init(plateau);
        Ok(())
    }

    /// Sends a batch of command characters and returns the receiver's telemetry.
    ///
    /// The whole text is parsed before anything reaches the receiver, so a bad
    /// character rejects the batch with no effect. Once parsed, the batch goes to
    /// [`Receiver::execute`] in a single call.
    ///
    /// # Errors
    ///
    /// - [`RoverError::NullOrEmptyInput`] for empty text.
    /// - [`RoverError::CapacityExceeded`] if the text is longer than the capacity.
    /// - [`RoverError::UnsupportedCommand`] for the first unknown character.
    /// - Whatever [`Receiver::execute`] returns.
    pub fn send(&mut self, input: &str) -> Result<&[Telemetry]> {
        if input.is_empty() {
            return Err(RoverError::empty("input"));
        }

        let length = input.chars().count();
        if length > self.config.capacity {
            warn!(length, capacity = self.config.capacity, "Command batch too long");
            return Err(RoverError::capacity_exceeded(self.config.capacity, length));
        }

        self.buffer.clear();
        if let Err(err) = self.table.parse_into(input, &mut self.buffer) {
            warn!(%err, "Command batch rejected");
            return Err(err);
        }

        info!(commands = self.buffer.len(), "Dispatching command batch");
        let outcome = self.receiver.execute(&self.buffer);
        self.buffer.clear();
        outcome?;

        let state = self.receiver.state();
        info!(records = state.len(), "Telemetry ready");
        Ok(state)
    }
}
