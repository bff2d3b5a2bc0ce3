//! End to end header generation.
//!
//! [`generate`] runs the pure part of the pipeline on already loaded inputs.
//! [`run`] loads every input named by a [`GeneratorConfig`], calls
//! [`generate`] and writes the result.
//!
//! ```ignore
//! use sc_codegen::codegen::{run, GeneratorConfig};
//!
//! let config = GeneratorConfig::new("board.scfg");
//! let report = run(&config)?;
//! for diag in &report.diagnostics {
//!     eprintln!("warning: {diag}");
//! }
//! ```

use std::path::PathBuf;

use crate::core::{DeviceProfile, Diagnostics, GenResult, PinRecord, Resolution, ResolvedPin};
use crate::descriptor::Descriptor;
use crate::pipeline::{self, OutputBucket};
use crate::tables::{self, AlternateFunctionTable, DeviceFamily, FunctionDeviceTable};
use crate::templates::{self, HeaderTemplate};

/// Where the inputs live and how the header is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub descriptor: PathBuf,
    /// Directory holding the lookup tables, template and output.
    pub table_dir: PathBuf,
    /// Overrides the family's default pin map under `table_dir`.
    pub pinmap: Option<PathBuf>,
    pub devices: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub prologue_lines: usize,
    /// Declare a table for every known variant, even empty ones.
    pub emit_empty_tables: bool,
}

impl GeneratorConfig {
    pub fn new(descriptor: impl Into<PathBuf>) -> Self {
        Self {
            descriptor: descriptor.into(),
            table_dir: PathBuf::from("scripts"),
            pinmap: None,
            devices: None,
            template: None,
            output: None,
            prologue_lines: templates::DEFAULT_PROLOGUE_LINES,
            emit_empty_tables: false,
        }
    }

    pub fn with_table_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.table_dir = dir.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn pinmap_path(&self, family: DeviceFamily) -> PathBuf {
        self.resolve(&self.pinmap, family.pinmap_file())
    }

    pub fn devices_path(&self) -> PathBuf {
        self.resolve(&self.devices, tables::DEVICES_FILE)
    }

    pub fn template_path(&self) -> PathBuf {
        self.resolve(&self.template, templates::TEMPLATE_FILE)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output, templates::OUTPUT_FILE)
    }

    fn resolve(&self, explicit: &Option<PathBuf>, default: &str) -> PathBuf {
        match explicit {
            Some(path) => path.clone(),
            None => self.table_dir.join(default),
        }
    }
}

/// Everything the pipeline produced for one descriptor.
#[derive(Debug, Clone)]
pub struct Generation {
    pub gpio: Vec<PinRecord>,
    pub resolved: Vec<ResolvedPin>,
    pub buckets: OutputBucket,
    pub diagnostics: Diagnostics,
    pub header: String,
}

/// Classify, resolve, group and render. Performs no I/O.
pub fn generate(
    descriptor: &Descriptor,
    pinmap: &AlternateFunctionTable,
    devices: &FunctionDeviceTable,
    template: &HeaderTemplate,
    emit_empty_tables: bool,
) -> Generation {
    let mut diagnostics = Diagnostics::new();

    let classified = pipeline::classify(descriptor.pins.iter().cloned());

    let mut resolved = Vec::with_capacity(classified.peripherals.len());
    for resolution in pipeline::resolve(classified.peripherals, pinmap) {
        match resolution {
            Resolution::Resolved(pin) => resolved.push(pin),
            Resolution::Unresolved(_, diag) => diagnostics.push(diag),
        }
    }

    let seed = if emit_empty_tables {
        OutputBucket::seeded(devices.variants())
    } else {
        OutputBucket::new()
    };
    let grouping = pipeline::group(&resolved, devices, seed);
    diagnostics.extend(grouping.diagnostics);

    let header = template.render(&grouping.buckets);

    Generation {
        gpio: classified.gpio,
        resolved,
        buckets: grouping.buckets,
        diagnostics,
        header,
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct Report {
    pub profile: DeviceProfile,
    pub output: PathBuf,
    pub gpio_count: usize,
    pub peripheral_count: usize,
    pub resolved_count: usize,
    pub buckets: OutputBucket,
    pub diagnostics: Diagnostics,
}

/// Load every input, generate the header and write it.
///
/// Inputs are checked in order: descriptor, device family, pin map,
/// function device table, template. The first failure aborts the run and
/// leaves any existing output untouched.
pub fn run(config: &GeneratorConfig) -> GenResult<Report> {
    let descriptor = Descriptor::load(&config.descriptor)?;
    let family = DeviceFamily::from_name(&descriptor.profile.family)?;

    let pinmap = AlternateFunctionTable::load(family, &config.pinmap_path(family))?;
    let devices = FunctionDeviceTable::load(&config.devices_path())?;
    let template = HeaderTemplate::load(&config.template_path(), config.prologue_lines)?;

    let generation = generate(
        &descriptor,
        &pinmap,
        &devices,
        &template,
        config.emit_empty_tables,
    );

    let output = config.output_path();
    templates::write_atomic(&output, &generation.header)?;

    let peripheral_count = descriptor.pins.len() - generation.gpio.len();
    Ok(Report {
        profile: descriptor.profile,
        output,
        gpio_count: generation.gpio.len(),
        peripheral_count,
        resolved_count: generation.resolved.len(),
        buckets: generation.buckets,
        diagnostics: generation.diagnostics,
    })
}
