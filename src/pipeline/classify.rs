//! Split parsed pins into plain GPIO and peripheral functions.

use crate::core::PinRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    /// Pins used as generic I/O (`id == port`).
    pub gpio: Vec<PinRecord>,
    /// Pins routed to a named peripheral function.
    pub peripherals: Vec<PinRecord>,
}

/// Partition `records`, keeping relative order inside each half.
pub fn classify<I>(records: I) -> Classified
where
    I: IntoIterator<Item = PinRecord>,
{
    let (gpio, peripherals): (Vec<_>, Vec<_>) =
        records.into_iter().partition(PinRecord::is_gpio);
    log::info!(
        "Classified pins: {} gpio, {} peripheral",
        gpio.len(),
        peripherals.len()
    );
    Classified { gpio, peripherals }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_is_exact_and_ordered() {
        let records = vec![
            PinRecord::new("RxD3", "P7_10"),
            PinRecord::new("P2_3", "P2_3"),
            PinRecord::new("TxD3", "P7_11"),
            PinRecord::new("P6_0", "P6_0"),
            PinRecord::new("MISO0", "P8_14"),
        ];

        let classified = classify(records.clone());

        assert_eq!(
            classified.gpio,
            vec![PinRecord::new("P2_3", "P2_3"), PinRecord::new("P6_0", "P6_0")]
        );
        assert_eq!(
            classified.peripherals,
            vec![
                PinRecord::new("RxD3", "P7_10"),
                PinRecord::new("TxD3", "P7_11"),
                PinRecord::new("MISO0", "P8_14"),
            ]
        );

        // Nothing lost, nothing duplicated.
        assert_eq!(
            classified.gpio.len() + classified.peripherals.len(),
            records.len()
        );
        for r in &records {
            let hits = classified.gpio.iter().filter(|g| *g == r).count()
                + classified.peripherals.iter().filter(|p| *p == r).count();
            assert_eq!(hits, 1, "{:?}", r);
        }
    }

    #[test]
    fn test_empty_input() {
        let classified = classify(Vec::<PinRecord>::new());
        assert!(classified.gpio.is_empty());
        assert!(classified.peripherals.is_empty());
    }
}
