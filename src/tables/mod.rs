//! External lookup tables.
//!
//! - [`AlternateFunctionTable`]: per family, pin to `(function, selector, direction)`.
//! - [`FunctionDeviceTable`]: function to the device variants that provide it.
//!
//! [`DeviceFamily`] decides which alternate function table applies to a
//! descriptor. Unknown families are rejected before any table is opened.

pub mod devices;
pub mod pinmap;

pub use devices::FunctionDeviceTable;
pub use pinmap::{AltFunction, AlternateFunctionTable};

use std::fmt;

use crate::core::{GenError, GenResult};

/// Default name of the function-to-variant table.
pub const DEVICES_FILE: &str = "rza1l_devices.csv";

/// Device families with a known alternate function table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceFamily {
    Rza1lu,
}

impl DeviceFamily {
    pub const ALL: &'static [DeviceFamily] = &[DeviceFamily::Rza1lu];

    /// Map a descriptor `Family` attribute onto a supported family.
    pub fn from_name(name: &str) -> GenResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|family| family.name() == name)
            .ok_or_else(|| GenError::UnsupportedDevice {
                family: name.to_string(),
            })
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceFamily::Rza1lu => "RZA1LU",
        }
    }

    /// File name of this family's alternate function table.
    pub fn pinmap_file(self) -> &'static str {
        match self {
            DeviceFamily::Rza1lu => "rza1lu_pinmap.json",
        }
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
