//! Alternate function table (one JSON file per device family).
//!
//! ```json
//! { "P7_11": [ { "Func": "TxD3", "Alter": "5", "DIR": "OUTPUT" } ] }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::DeviceFamily;
use crate::core::{Direction, GenError, GenResult};

#[derive(Debug, Deserialize)]
struct RawAltFunction {
    #[serde(rename = "Func")]
    func: String,
    #[serde(rename = "Alter")]
    alter: RawSelector,
    #[serde(rename = "DIR")]
    dir: String,
}

/// `Alter` is normally a quoted integer, but plain numbers are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSelector {
    Number(u64),
    Text(String),
}

/// One selectable function of a pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AltFunction {
    pub function: String,
    pub alternate: u8,
    pub direction: Direction,
}

#[derive(Debug, Clone)]
pub struct AlternateFunctionTable {
    family: DeviceFamily,
    pins: HashMap<String, Vec<AltFunction>>,
}

impl AlternateFunctionTable {
    /// Build the table from JSON text.
    pub fn from_json(family: DeviceFamily, text: &str) -> Result<Self, String> {
        let raw: HashMap<String, Vec<RawAltFunction>> =
            serde_json::from_str(text).map_err(|e| e.to_string())?;

        let mut pins = HashMap::with_capacity(raw.len());
        for (pin, funcs) in raw {
            let mut entries = Vec::with_capacity(funcs.len());
            for f in funcs {
                let alternate = match &f.alter {
                    RawSelector::Number(n) => u8::try_from(*n).ok(),
                    RawSelector::Text(s) => s.trim().parse::<u8>().ok(),
                }
                .ok_or_else(|| {
                    format!("pin {}: function {} has invalid Alter {:?}", pin, f.func, f.alter)
                })?;
                let direction = f
                    .dir
                    .parse::<Direction>()
                    .map_err(|e| format!("pin {}: function {}: {}", pin, f.func, e))?;
                entries.push(AltFunction {
                    function: f.func,
                    alternate,
                    direction,
                });
            }
            pins.insert(pin, entries);
        }

        Ok(Self { family, pins })
    }

    /// Read the table for `family` from `path`.
    pub fn load(family: DeviceFamily, path: &Path) -> GenResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| GenError::Table {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let table = Self::from_json(family, &text).map_err(|reason| GenError::Table {
            path: path.to_path_buf(),
            reason,
        })?;
        log::info!(
            "Loaded {} alternate function table {} ({} pins)",
            family,
            path.display(),
            table.len()
        );
        Ok(table)
    }

    pub fn family(&self) -> DeviceFamily {
        self.family
    }

    /// Functions selectable on `pin`, in table order. `None` if the pin is unknown.
    pub fn functions(&self, pin: &str) -> Option<&[AltFunction]> {
        self.pins.get(pin).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_keeps_function_order() {
        let json = r#"{
            "P7_11": [
                { "Func": "TxD3", "Alter": "5", "DIR": "OUTPUT" },
                { "Func": "SSITxD0", "Alter": "2", "DIR": "OUT" }
            ],
            "P1_0": [ { "Func": "TXD0", "Alter": 3, "DIR": "OUT" } ]
        }"#;
        let table = AlternateFunctionTable::from_json(DeviceFamily::Rza1lu, json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.family(), DeviceFamily::Rza1lu);

        let funcs = table.functions("P7_11").unwrap();
        assert_eq!(funcs.len(), 2);
        assert_eq!(funcs[0].function, "TxD3");
        assert_eq!(funcs[0].alternate, 5);
        assert_eq!(funcs[0].direction, Direction::Output);
        assert_eq!(funcs[1].function, "SSITxD0");

        assert_eq!(table.functions("P1_0").unwrap()[0].alternate, 3);
        assert!(table.functions("P9_9").is_none());
    }

    #[test]
    fn test_non_integer_selector_is_rejected() {
        let json = r#"{ "P1_0": [ { "Func": "TXD0", "Alter": "three", "DIR": "OUT" } ] }"#;
        let err = AlternateFunctionTable::from_json(DeviceFamily::Rza1lu, json).unwrap_err();
        assert!(err.contains("TXD0"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{ "P1_0": [ { "Func": "TXD0", "Alter": "3" } ] }"#;
        assert!(AlternateFunctionTable::from_json(DeviceFamily::Rza1lu, json).is_err());
    }

    #[test]
    fn test_missing_file_is_table_error() {
        let err = AlternateFunctionTable::load(DeviceFamily::Rza1lu, Path::new("nope.json"))
            .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
