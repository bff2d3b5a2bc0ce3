//! Pin records and the resolution state machine.
//!
//! A [`PinRecord`] comes out of the descriptor unresolved. The resolver turns
//! each one into a [`Resolution`], which either carries a fully populated
//! [`ResolvedPin`] or the original record together with the reason it could
//! not be resolved.

use std::fmt;
use std::str::FromStr;

use super::error::Diagnostic;

/// Board level information from the descriptor header. Descriptive only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceProfile {
    pub family: String,
    pub part_number: String,
    pub pin_count: u32,
}

impl fmt::Display for DeviceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} pins)", self.family, self.part_number, self.pin_count)
    }
}

/// One pin assignment as declared in the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinRecord {
    /// Function identifier, e.g. `TxD3`.
    pub id: String,
    /// Physical pin identifier, e.g. `P7_11`.
    pub port: String,
}

impl PinRecord {
    pub fn new(id: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            port: port.into(),
        }
    }

    /// A pin whose function name is its own port name is plain GPIO.
    pub fn is_gpio(&self) -> bool {
        self.id == self.port
    }
}

/// Signal direction as spelled in the alternate function table.
///
/// Rendered verbatim after `PIN_`, so unknown spellings survive as
/// [`Direction::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
    Input,
    Output,
    Io,
    Hiz,
    Other(String),
}

impl Direction {
    pub fn as_str(&self) -> &str {
        match self {
            Direction::In => "IN",
            Direction::Out => "OUT",
            Direction::Input => "INPUT",
            Direction::Output => "OUTPUT",
            Direction::Io => "IO",
            Direction::Hiz => "HIZ",
            Direction::Other(s) => s,
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s {
            "" => return Err("empty direction".to_string()),
            "IN" => Direction::In,
            "OUT" => Direction::Out,
            "INPUT" => Direction::Input,
            "OUTPUT" => Direction::Output,
            "IO" => Direction::Io,
            "HIZ" => Direction::Hiz,
            other => Direction::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A peripheral pin with its multiplexer setting filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPin {
    pub id: String,
    pub port: String,
    pub alternate: u8,
    pub direction: Direction,
}

/// Outcome of resolving one peripheral record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(ResolvedPin),
    Unresolved(PinRecord, Diagnostic),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn resolved(&self) -> Option<&ResolvedPin> {
        match self {
            Resolution::Resolved(pin) => Some(pin),
            Resolution::Unresolved(..) => None,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Resolution::Resolved(_) => None,
            Resolution::Unresolved(_, diag) => Some(diag),
        }
    }
}
