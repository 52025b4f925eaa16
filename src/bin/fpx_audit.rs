//! Sweep one function over its domain and print one line per sample:
//!
//!   :: x-val abs-err rel-err b-val # hex-val ticks [!a<] [!a>] [!r<] [!r>] [!t>]
//!
//! b-val is the relative error in fractional bits. The best a float
//! computation can get is -23 bits, a double -52 bits.
//! A `!a<` marker means the absolute error is smaller than all previous ones,
//! `!r>` that the relative error is greater than all previous ones, and so on.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fpx_audit::config::{AuditConfig, AxisConfig, FormatKind, OutputKind};
use fpx_audit::{AuditError, Function};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fpx-audit")]
#[command(about = "Audit precision and cost of a libm function against the host")]
#[command(version)]
struct Cli {
    /// TOML file with the sweep setup; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Function to audit (sin, sinf, pow, atan2, ...)
    #[arg(short, long)]
    function: Option<Function>,

    /// Numeric format: f32 or f64
    #[arg(long)]
    format: Option<FormatKind>,

    /// Lower bound of x
    #[arg(long, allow_negative_numbers = true)]
    x0: Option<f64>,
    /// Upper bound of x
    #[arg(long, allow_negative_numbers = true)]
    x1: Option<f64>,
    /// Number of x values
    #[arg(long)]
    xvals: Option<usize>,

    /// Lower bound of y (two-argument functions)
    #[arg(long, allow_negative_numbers = true)]
    y0: Option<f64>,
    /// Upper bound of y
    #[arg(long, allow_negative_numbers = true)]
    y1: Option<f64>,
    /// Number of y values
    #[arg(long)]
    yvals: Option<usize>,

    /// Cycles subtracted from each measurement
    #[arg(long)]
    calibration: Option<u64>,

    /// Emit JSON lines instead of `::` lines
    #[arg(long)]
    json: bool,

    /// Log more (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> Result<AuditConfig, AuditError> {
        let mut cfg = match (&self.config, self.function) {
            (Some(path), _) => AuditConfig::load(path)?,
            (None, Some(f)) => AuditConfig::for_function(f),
            (None, None) => return Err(AuditError::MissingFunction),
        };

        if let Some(f) = self.function {
            if f.arity() != cfg.function.arity() {
                cfg.y = AuditConfig::for_function(f).y;
            }
            cfg.function = f;
        }
        if let Some(format) = self.format {
            cfg.format = format;
        }

        override_axis(&mut cfg.x, self.x0, self.x1, self.xvals);
        if self.y0.is_some() || self.y1.is_some() || self.yvals.is_some() {
            let y = cfg.y.get_or_insert_with(AxisConfig::default);
            override_axis(y, self.y0, self.y1, self.yvals);
        }

        if self.calibration.is_some() {
            cfg.calibration = self.calibration;
        }
        if self.json {
            cfg.output = OutputKind::Json;
        }
        Ok(cfg)
    }
}

fn override_axis(axis: &mut AxisConfig, lo: Option<f64>, hi: Option<f64>, points: Option<usize>) {
    if let Some(lo) = lo {
        axis.lo = lo;
    }
    if let Some(hi) = hi {
        axis.hi = hi;
    }
    if let Some(points) = points {
        axis.points = points;
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = cli
        .into_config()
        .and_then(|cfg| fpx_audit::audit::run(&cfg, BufWriter::new(io::stdout().lock())));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fpx-audit: {e}");
            ExitCode::FAILURE
        }
    }
}
