//! Function to device variant table.
//!
//! A CSV file with a `Function` and a `Device` column, one row per pairing.
//! Other columns are ignored and duplicate rows are allowed.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::core::{GenError, GenResult};

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "Function")]
    function: String,
    #[serde(rename = "Device")]
    device: String,
}

#[derive(Debug, Clone, Default)]
pub struct FunctionDeviceTable {
    rows: Vec<(String, String)>,
}

impl FunctionDeviceTable {
    /// Read the table from any CSV source with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, String> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for (line, record) in rdr.deserialize::<Row>().enumerate() {
            let row = record.map_err(|e| format!("row {}: {}", line + 1, e))?;
            if row.function.is_empty() || row.device.is_empty() {
                log::debug!("Skipping incomplete row {}: {:?}", line + 1, row);
                continue;
            }
            rows.push((row.function, row.device));
        }
        Ok(Self { rows })
    }

    pub fn load(path: &Path) -> GenResult<Self> {
        let file = File::open(path).map_err(|e| GenError::Table {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let table = Self::from_reader(file).map_err(|reason| GenError::Table {
            path: path.to_path_buf(),
            reason,
        })?;
        log::info!(
            "Loaded function device table {} ({} rows, {} variants)",
            path.display(),
            table.rows.len(),
            table.variants().len()
        );
        Ok(table)
    }

    /// Every variant listing `function`, in row order, without repeats.
    pub fn devices_for(&self, function: &str) -> Vec<&str> {
        let mut devices: Vec<&str> = Vec::new();
        for (f, d) in &self.rows {
            if f == function && !devices.contains(&d.as_str()) {
                devices.push(d);
            }
        }
        devices
    }

    /// Every distinct variant, in order of first appearance.
    pub fn variants(&self) -> Vec<&str> {
        let mut variants: Vec<&str> = Vec::new();
        for (_, d) in &self.rows {
            if !variants.contains(&d.as_str()) {
                variants.push(d);
            }
        }
        variants
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<F: Into<String>, D: Into<String>> FromIterator<(F, D)> for FunctionDeviceTable {
    fn from_iter<I: IntoIterator<Item = (F, D)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().map(|(f, d)| (f.into(), d.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICES: &str = "\
Function,Device,Comment
RxD3,SCF3,
TxD3,SCF3,
TXD0,SCF0,
TXD0,SCIF_ALT,second instance
TxD3,SCF3,duplicate
MISO0,RSPI0,
";

    #[test]
    fn test_devices_for_function() {
        let table = FunctionDeviceTable::from_reader(DEVICES.as_bytes()).unwrap();
        assert_eq!(table.len(), 6);
        assert_eq!(table.devices_for("TxD3"), ["SCF3"]);
        assert_eq!(table.devices_for("TXD0"), ["SCF0", "SCIF_ALT"]);
        assert!(table.devices_for("CTS0").is_empty());
    }

    #[test]
    fn test_variants_in_first_appearance_order() {
        let table = FunctionDeviceTable::from_reader(DEVICES.as_bytes()).unwrap();
        assert_eq!(table.variants(), ["SCF3", "SCF0", "SCIF_ALT", "RSPI0"]);
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let csv = "Function,Variant\nTxD3,SCF3\n";
        assert!(FunctionDeviceTable::from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_collect_from_pairs() {
        let table: FunctionDeviceTable = [("TXD0", "DeviceA")].into_iter().collect();
        assert_eq!(table.devices_for("TXD0"), ["DeviceA"]);
    }
}
