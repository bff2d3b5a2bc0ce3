//! sc-codegen - GPIO pin function table generator.
//!
//! Turns the pin assignment descriptor written by the Smart Configurator pin
//! tool into the `st_port_config_t` initializer tables used by the RZ/A1 GPIO
//! driver. For every pin routed to a peripheral function the generator looks
//! up the multiplexer selector and direction, groups the entries by device
//! variant and renders them into the header template.
//!
//! # Primary Usage
//!
//! ```ignore
//! use sc_codegen::codegen::{run, GeneratorConfig};
//!
//! let config = GeneratorConfig::new("board.scfg").with_table_dir("scripts");
//! let report = run(&config)?;
//! println!("{} tables written to {}", report.buckets.len(), report.output.display());
//! ```
//!
//! # Architecture
//!
//! - [`descriptor`] - descriptor parsing
//! - [`tables`] - alternate function and function/device lookup tables
//! - [`pipeline`] - classification, resolution and grouping
//! - [`templates`] - header rendering and output
//! - [`codegen`] - end to end driver
//! - [`core`] - shared records, errors and diagnostics

pub mod codegen;
pub mod core;
pub mod descriptor;
pub mod pipeline;
pub mod tables;
pub mod templates;

pub use codegen::{generate, run, Generation, GeneratorConfig, Report};
pub use crate::core::{
    DeviceProfile, Diagnostic, Diagnostics, Direction, GenError, GenResult, PinRecord, Resolution,
    ResolvedPin,
};
pub use descriptor::Descriptor;
pub use pipeline::OutputBucket;
