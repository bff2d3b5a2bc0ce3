//! GPIO configuration header generator.
//!
//! Reads a pin assignment descriptor and writes `r_gpio_cfg.h` next to the
//! lookup tables.
//!
//! Exit codes: `0` success, `1` descriptor error, `2` unsupported device
//! family, `3` lookup table error, `4` template or output error, `5`
//! diagnostics reported under `--strict`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use sc_codegen::codegen::{self, GeneratorConfig};
use sc_codegen::descriptor::Descriptor;
use sc_codegen::pipeline;
use sc_codegen::templates::DEFAULT_PROLOGUE_LINES;

const EXIT_STRICT: u8 = 5;

#[derive(Parser, Debug)]
#[command(
    name = "sc-codegen",
    version,
    about = "Generate GPIO pin function tables from a Smart Configurator pin descriptor"
)]
struct Cli {
    /// Pin assignment descriptor exported by the pin configuration tool
    descriptor: PathBuf,

    /// Directory holding the lookup tables, the header template and the output
    #[arg(long, default_value = "scripts")]
    table_dir: PathBuf,

    /// Alternate function table (default: the family's pin map in TABLE_DIR)
    #[arg(long)]
    pinmap: Option<PathBuf>,

    /// Function to device variant table (default: TABLE_DIR/rza1l_devices.csv)
    #[arg(long)]
    devices: Option<PathBuf>,

    /// Header template (default: TABLE_DIR/header_template.h)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Generated header (default: TABLE_DIR/r_gpio_cfg.h)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of template lines copied before the generated tables
    #[arg(long, default_value_t = DEFAULT_PROLOGUE_LINES)]
    prologue_lines: usize,

    /// Declare a table for every device variant, including empty ones
    #[arg(long)]
    emit_empty_tables: bool,

    /// Exit with a non-zero status if any pin was skipped
    #[arg(long)]
    strict: bool,

    /// Print the parsed descriptor and exit without generating
    #[arg(long)]
    dump: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            descriptor: self.descriptor.clone(),
            table_dir: self.table_dir.clone(),
            pinmap: self.pinmap.clone(),
            devices: self.devices.clone(),
            template: self.template.clone(),
            output: self.output.clone(),
            prologue_lines: self.prologue_lines,
            emit_empty_tables: self.emit_empty_tables,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn dump(descriptor: &Descriptor) {
    println!("Device: {}", descriptor.profile);
    let classified = pipeline::classify(descriptor.pins.iter().cloned());
    println!("GPIO ({}):", classified.gpio.len());
    for pin in &classified.gpio {
        println!("  {}", pin.port);
    }
    println!("Functions ({}):", classified.peripherals.len());
    for pin in &classified.peripherals {
        println!("  {:<12} {}", pin.port, pin.id);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.dump {
        return match Descriptor::load(&cli.descriptor) {
            Ok(descriptor) => {
                dump(&descriptor);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(e.exit_code())
            }
        };
    }

    let report = match codegen::run(&cli.config()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    eprint!("{}", report.diagnostics);
    println!(
        "{}: {} peripheral pins, {} resolved, {} tables -> {}",
        report.profile,
        report.peripheral_count,
        report.resolved_count,
        report.buckets.len(),
        report.output.display()
    );

    if cli.strict && !report.diagnostics.is_empty() {
        eprintln!(
            "Error: {} pin(s) skipped (--strict)",
            report.diagnostics.len()
        );
        return ExitCode::from(EXIT_STRICT);
    }
    ExitCode::SUCCESS
}
