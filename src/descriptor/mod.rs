//! Pin assignment descriptor parser.
//!
//! The descriptor is the XML file exported by the pin configuration tool. Only
//! two elements matter here: a single `Device` element carrying `Family`,
//! `PartNumber` and `PinCount`, and a single `Pin` collection whose children
//! each carry at least `Id` and `Port`:
//!
//! ```xml
//! <Configuration>
//!   <Device Family="RZA1LU" PartNumber="R7S721031VC" PinCount="176"/>
//!   <Pin>
//!     <Pin Id="TxD3" Port="P7_11"/>
//!   </Pin>
//! </Configuration>
//! ```
//!
//! Everything else in the file is ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::{DeviceProfile, GenError, GenResult, PinRecord};

#[derive(Debug, Deserialize)]
struct DescriptorDocument {
    #[serde(rename = "Device")]
    device: DeviceElement,
    #[serde(rename = "Pin")]
    pins: PinCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DeviceElement {
    family: String,
    part_number: String,
    pin_count: u32,
}

#[derive(Debug, Deserialize)]
struct PinCollection {
    #[serde(rename = "$value", default)]
    entries: Vec<PinElement>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PinElement {
    id: String,
    port: String,
}

/// Parsed descriptor: the board profile and the pins in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub profile: DeviceProfile,
    pub pins: Vec<PinRecord>,
}

impl Descriptor {
    /// Parse descriptor text.
    pub fn parse(text: &str) -> Result<Self, String> {
        let doc: DescriptorDocument = serde_xml_rs::from_str(text).map_err(|e| e.to_string())?;

        let family = doc.device.family.trim();
        if family.is_empty() {
            return Err("Device element has an empty Family attribute".to_string());
        }

        let mut pins = Vec::with_capacity(doc.pins.entries.len());
        for (idx, entry) in doc.pins.entries.into_iter().enumerate() {
            let id = entry.id.trim();
            let port = entry.port.trim();
            if id.is_empty() || port.is_empty() {
                return Err(format!("pin entry {} has an empty Id or Port attribute", idx));
            }
            pins.push(PinRecord::new(id, port));
        }

        Ok(Self {
            profile: DeviceProfile {
                family: family.to_string(),
                part_number: doc.device.part_number.trim().to_string(),
                pin_count: doc.device.pin_count,
            },
            pins,
        })
    }

    /// Read and parse the descriptor at `path`.
    ///
    /// A missing or unreadable file is a parse error, same as malformed XML.
    pub fn load(path: &Path) -> GenResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| GenError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let descriptor = Self::parse(&text).map_err(|reason| GenError::Parse {
            path: path.to_path_buf(),
            reason,
        })?;

        log::info!(
            "Parsed descriptor {}: {}, {} pin entries",
            path.display(),
            descriptor.profile,
            descriptor.pins.len()
        );
        Ok(descriptor)
    }
}
