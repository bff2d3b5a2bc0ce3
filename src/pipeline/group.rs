//! Group resolved pins by device variant.
//!
//! Every resolved pin is rendered into one initializer line and appended to
//! the bucket of each variant that lists its function. Buckets and the lines
//! inside them keep insertion order.

use indexmap::IndexMap;

use crate::core::{Diagnostic, ResolvedPin};
use crate::tables::FunctionDeviceTable;

/// Variant name to rendered initializer lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBucket {
    buckets: IndexMap<String, Vec<String>>,
}

impl OutputBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an empty bucket for each of `variants`, in the given order.
    pub fn seeded<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Self::new();
        for v in variants {
            out.buckets.entry(v.into()).or_default();
        }
        out
    }

    pub fn push(&mut self, variant: &str, line: String) {
        log::trace!("{} <- {}", variant, line.trim_end());
        match self.buckets.get_mut(variant) {
            Some(lines) => lines.push(line),
            None => {
                self.buckets.insert(variant.to_string(), vec![line]);
            }
        }
    }

    pub fn get(&self, variant: &str) -> Option<&[String]> {
        self.buckets.get(variant).map(Vec::as_slice)
    }

    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of lines across all variants.
    pub fn line_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Result of grouping: the buckets and the pins that matched no variant.
#[derive(Debug, Clone, Default)]
pub struct Grouping {
    pub buckets: OutputBucket,
    pub diagnostics: Vec<Diagnostic>,
}

/// Initializer line for one resolved pin.
pub fn render_entry(pin: &ResolvedPin) -> String {
    format!(
        "\t{{{},\tFUNCTION_MODE{},\tPIN_{}}},\t// Pin Function : {}\n",
        pin.port, pin.alternate, pin.direction, pin.id
    )
}

/// Append every pin in `pins` to the buckets of its variants.
///
/// `buckets` is usually [`OutputBucket::new`], or [`OutputBucket::seeded`]
/// when every variant should get a table even if it stays empty.
pub fn group<'a, I>(pins: I, devices: &FunctionDeviceTable, mut buckets: OutputBucket) -> Grouping
where
    I: IntoIterator<Item = &'a ResolvedPin>,
{
    let mut diagnostics = Vec::new();

    for pin in pins {
        let variants = devices.devices_for(&pin.id);
        if variants.is_empty() {
            diagnostics.push(Diagnostic::MissingDeviceMapping {
                id: pin.id.clone(),
                port: pin.port.clone(),
            });
            continue;
        }

        let line = render_entry(pin);
        for variant in variants {
            buckets.push(variant, line.clone());
        }
    }

    log::info!(
        "Grouped {} lines into {} variants",
        buckets.line_count(),
        buckets.len()
    );
    Grouping {
        buckets,
        diagnostics,
    }
}
