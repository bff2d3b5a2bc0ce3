// This module gathers the data model shared by every stage of the generator: the device
// profile and pin records read from the descriptor, the direction and resolved pin types
// produced by the resolver, the Resolution enum that makes the resolved/unresolved state
// explicit, the fatal GenError and per-record Diagnostic types, and the ordered
// Diagnostics collector that the driver hands back to the caller.

//! Core data model and error handling.
//!
//! # Key Components
//!
//! ## Records (`record`)
//! - [`PinRecord`] and [`DeviceProfile`] as parsed from the descriptor
//! - [`Resolution`] separating resolved pins from unresolved ones
//!
//! ## Errors (`error`)
//! - [`GenError`] for conditions that abort the run
//! - [`Diagnostic`] for per-record conditions that are skipped
//!
//! ## Diagnostics (`diagnostics`)
//! - Ordered, logged collection of [`Diagnostic`]s

pub mod diagnostics;
pub mod error;
pub mod record;

pub use diagnostics::Diagnostics;

pub use error::{
    Diagnostic,
    GenError,
    GenResult,
};

pub use record::{
    DeviceProfile,
    Direction,
    PinRecord,
    Resolution,
    ResolvedPin,
};
