//! Resolve peripheral pins against the alternate function table.
//!
//! Each record becomes a [`Resolution`]. A pin missing from the table and a
//! function missing from a known pin are both reported as diagnostics; the
//! record is kept as `Unresolved` and filtered out by the grouper.
//!
//! When a pin lists the same function more than once, the last entry wins.

use crate::core::{Diagnostic, PinRecord, Resolution, ResolvedPin};
use crate::tables::AlternateFunctionTable;

/// Resolve a single peripheral record.
pub fn resolve_pin(record: PinRecord, table: &AlternateFunctionTable) -> Resolution {
    let Some(funcs) = table.functions(&record.port) else {
        let diag = Diagnostic::MissingPinMapping {
            id: record.id.clone(),
            port: record.port.clone(),
        };
        return Resolution::Unresolved(record, diag);
    };

    match funcs.iter().rev().find(|f| f.function == record.id) {
        Some(f) => {
            log::debug!(
                "Resolved {} on {}: mode {}, {}",
                record.id,
                record.port,
                f.alternate,
                f.direction
            );
            Resolution::Resolved(ResolvedPin {
                id: record.id,
                port: record.port,
                alternate: f.alternate,
                direction: f.direction.clone(),
            })
        }
        None => {
            let diag = Diagnostic::MissingFunctionMatch {
                id: record.id.clone(),
                port: record.port.clone(),
            };
            Resolution::Unresolved(record, diag)
        }
    }
}

/// Resolve every record, preserving order.
pub fn resolve<I>(records: I, table: &AlternateFunctionTable) -> Vec<Resolution>
where
    I: IntoIterator<Item = PinRecord>,
{
    let resolutions: Vec<Resolution> = records
        .into_iter()
        .map(|r| resolve_pin(r, table))
        .collect();
    log::info!(
        "Resolved {} of {} peripheral pins",
        resolutions.iter().filter(|r| r.is_resolved()).count(),
        resolutions.len()
    );
    resolutions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::tables::DeviceFamily;

    fn table() -> AlternateFunctionTable {
        let json = r#"{
            "P1_0": [ { "Func": "TXD0", "Alter": "3", "DIR": "OUT" } ],
            "P7_10": [
                { "Func": "SSIRxD0", "Alter": "2", "DIR": "IN" },
                { "Func": "RxD3", "Alter": "5", "DIR": "INPUT" }
            ]
        }"#;
        AlternateFunctionTable::from_json(DeviceFamily::Rza1lu, json).unwrap()
    }

    #[test]
    fn test_resolves_selector_and_direction() {
        let res = resolve_pin(PinRecord::new("TXD0", "P1_0"), &table());
        assert_eq!(
            res,
            Resolution::Resolved(ResolvedPin {
                id: "TXD0".into(),
                port: "P1_0".into(),
                alternate: 3,
                direction: Direction::Out,
            })
        );
    }

    #[test]
    fn test_scans_whole_function_list() {
        let res = resolve_pin(PinRecord::new("RxD3", "P7_10"), &table());
        let pin = res.resolved().unwrap();
        assert_eq!(pin.alternate, 5);
        assert_eq!(pin.direction, Direction::Input);
    }

    #[test]
    fn test_later_duplicate_entry_wins() {
        let json = r#"{
            "P1_0": [
                { "Func": "TXD0", "Alter": "3", "DIR": "OUT" },
                { "Func": "TXD0", "Alter": "6", "DIR": "IN" }
            ]
        }"#;
        let table = AlternateFunctionTable::from_json(DeviceFamily::Rza1lu, json).unwrap();
        let res = resolve_pin(PinRecord::new("TXD0", "P1_0"), &table);
        let pin = res.resolved().unwrap();
        assert_eq!(pin.alternate, 6);
        assert_eq!(pin.direction, Direction::In);
    }

    #[test]
    fn test_missing_pin_is_reported() {
        let res = resolve_pin(PinRecord::new("TXD1", "P9_9"), &table());
        assert_eq!(
            res,
            Resolution::Unresolved(
                PinRecord::new("TXD1", "P9_9"),
                Diagnostic::MissingPinMapping {
                    id: "TXD1".into(),
                    port: "P9_9".into(),
                }
            )
        );
    }

    // Behavior decision: a function absent from a known pin is reported just
    // like an absent pin instead of being dropped silently.
    #[test]
    fn test_missing_function_match_is_reported_not_silent() {
        let res = resolve_pin(PinRecord::new("CTS0", "P1_0"), &table());
        assert!(!res.is_resolved());
        assert_eq!(
            res.diagnostic(),
            Some(&Diagnostic::MissingFunctionMatch {
                id: "CTS0".into(),
                port: "P1_0".into(),
            })
        );
    }

    #[test]
    fn test_resolve_keeps_order_and_unresolved_records() {
        let records = vec![
            PinRecord::new("RxD3", "P7_10"),
            PinRecord::new("TXD1", "P9_9"),
            PinRecord::new("TXD0", "P1_0"),
        ];
        let out = resolve(records, &table());
        assert_eq!(out.len(), 3);
        assert!(out[0].is_resolved());
        assert!(!out[1].is_resolved());
        assert!(out[2].is_resolved());
    }
}
