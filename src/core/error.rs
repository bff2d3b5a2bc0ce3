// This module defines the error types for sc-codegen using the thiserror crate. GenError
// covers the fatal conditions that abort a run before any output is committed: an
// unreadable or malformed descriptor, a device family without a pin map, a lookup table
// that cannot be loaded, a template that is too short, and I/O failures on the output.
// Diagnostic covers the per-record conditions that are reported and skipped so the rest
// of the header can still be generated. GenError also maps each fatal condition onto
// the process exit code used by the command line tool.

//! Error types for header generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal error. A run that hits one of these writes nothing.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Failed to parse descriptor {}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        reason: String,
    },

    #[error("Unsupported device family: {family}")]
    UnsupportedDevice {
        family: String,
    },

    #[error("Failed to load lookup table {}: {reason}", path.display())]
    Table {
        path: PathBuf,
        reason: String,
    },

    #[error("Invalid header template {}: {reason}", path.display())]
    Template {
        path: PathBuf,
        reason: String,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenError {
    /// Process exit code reported by the command line tool.
    pub fn exit_code(&self) -> u8 {
        match self {
            GenError::Parse { .. } => 1,
            GenError::UnsupportedDevice { .. } => 2,
            GenError::Table { .. } => 3,
            GenError::Template { .. } | GenError::Io { .. } => 4,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for generator operations.
pub type GenResult<T> = Result<T, GenError>;

/// Non-fatal condition attached to a single peripheral pin.
///
/// The record named by a diagnostic is left out of the generated tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("pin {port} does not exist in the alternate function table (function {id})")]
    MissingPinMapping { id: String, port: String },

    #[error("pin {port} has no alternate function {id}")]
    MissingFunctionMatch { id: String, port: String },

    #[error("no device variant lists function {id} (pin {port})")]
    MissingDeviceMapping { id: String, port: String },
}

impl Diagnostic {
    /// Function identifier of the offending record.
    pub fn id(&self) -> &str {
        match self {
            Diagnostic::MissingPinMapping { id, .. }
            | Diagnostic::MissingFunctionMatch { id, .. }
            | Diagnostic::MissingDeviceMapping { id, .. } => id,
        }
    }

    /// Pin identifier of the offending record.
    pub fn port(&self) -> &str {
        match self {
            Diagnostic::MissingPinMapping { port, .. }
            | Diagnostic::MissingFunctionMatch { port, .. }
            | Diagnostic::MissingDeviceMapping { port, .. } => port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        let parse = GenError::Parse {
            path: "board.scfg".into(),
            reason: "missing field `Family`".into(),
        };
        let device = GenError::UnsupportedDevice {
            family: "RZA2M".into(),
        };
        let table = GenError::Table {
            path: "rza1l_devices.csv".into(),
            reason: "bad row".into(),
        };
        let io = GenError::io("r_gpio_cfg.h", io::Error::from(io::ErrorKind::PermissionDenied));

        assert_eq!(parse.exit_code(), 1);
        assert_eq!(device.exit_code(), 2);
        assert_eq!(table.exit_code(), 3);
        assert_eq!(io.exit_code(), 4);
    }

    #[test]
    fn test_diagnostic_messages_name_the_record() {
        let diag = Diagnostic::MissingPinMapping {
            id: "TxD3".into(),
            port: "P9_9".into(),
        };
        let msg = diag.to_string();
        assert!(msg.contains("P9_9"));
        assert!(msg.contains("TxD3"));
        assert_eq!(diag.id(), "TxD3");
        assert_eq!(diag.port(), "P9_9");
    }
}
