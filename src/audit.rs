//! Runs a validated [`AuditConfig`] with the built-in functions.

use std::io::Write;

use serde::Serialize;
use tracing::info;

use crate::config::{AuditConfig, FormatKind, OutputKind};
use crate::core::rep::AuditFloat;
use crate::error::AuditError;
use crate::functions::{Builtin, Function, HostReference, LibmTarget};
use crate::sweep::{Axis, JsonLinesSink, Sweep, SweepSummary, TextSink};

/// Width-independent digest of a finished run.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct RunReport {
    pub function:   Function,
    pub format:     FormatKind,
    pub emitted:    usize,
    pub skipped:    usize,
    pub abs_min:    f64,
    pub abs_max:    f64,
    pub rel_min:    f64,
    pub rel_max:    f64,
    pub cycles_max: u64,
}

impl RunReport {
    fn new<F: AuditFloat>(cfg: &AuditConfig, s: &SweepSummary<F>) -> Self {
        Self {
            function: cfg.function,
            format: cfg.format,
            emitted: s.emitted,
            skipped: s.skipped,
            abs_min: s.extrema.abs_min.value.to_host(),
            abs_max: s.extrema.abs_max.value.to_host(),
            rel_min: s.extrema.rel_min.value.to_host(),
            rel_max: s.extrema.rel_max.value.to_host(),
            cycles_max: s.extrema.cycles_max.value,
        }
    }
}

pub fn run<W: Write>(cfg: &AuditConfig, out: W) -> Result<RunReport, AuditError> {
    cfg.validate()?;
    let report = match cfg.format {
        FormatKind::F32 => run_as::<f32, W>(cfg, out)?,
        FormatKind::F64 => run_as::<f64, W>(cfg, out)?,
    };
    info!(
        function = %report.function,
        format = %report.format,
        emitted = report.emitted,
        skipped = report.skipped,
        "audit complete"
    );
    Ok(report)
}

fn run_as<F: Builtin, W: Write>(cfg: &AuditConfig, out: W) -> Result<RunReport, AuditError> {
    let x = Axis::new("x", F::from_host(cfg.x.lo), F::from_host(cfg.x.hi), cfg.x.points)?;
    let sweep = match &cfg.y {
        None => Sweep::one_d(x),
        Some(y) => Sweep::two_d(x, Axis::new("y", F::from_host(y.lo), F::from_host(y.hi), y.points)?),
    }
    .with_calibration(cfg.calibration());

    let mut target = LibmTarget::<F>::new(cfg.function);
    let reference = HostReference::new(cfg.function);

    let summary = match cfg.output {
        OutputKind::Text => sweep.run(&mut target, &reference, &mut TextSink::new(out))?,
        OutputKind::Json => sweep.run(&mut target, &reference, &mut JsonLinesSink::new(out))?,
    };
    Ok(RunReport::new(cfg, &summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AxisConfig;

    fn config(function: Function, format: FormatKind, points: usize) -> AuditConfig {
        let mut cfg = AuditConfig::for_function(function);
        cfg.format = format;
        cfg.x.points = points;
        cfg
    }

    #[test]
    fn text_run_writes_one_line_per_sample() {
        let cfg = config(Function::Sin, FormatKind::F32, 11);
        let mut out = Vec::new();
        let report = run(&cfg, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        println!("{text}");

        assert_eq!(report.emitted, 11);
        assert_eq!(report.skipped, 0);
        assert_eq!(text.lines().count(), 11);
        assert!(text.lines().all(|l| l.starts_with(":: ")));
        // first sample pushes every extremum
        let first = text.lines().next().unwrap_or_default();
        assert!(first.contains(" !a< !a> !r< !r>"));
        assert!(report.rel_max.abs() < 1e-6);
    }

    #[test]
    fn infinite_results_are_skipped() {
        let cfg = config(Function::Log, FormatKind::F32, 5);
        let mut out = Vec::new();
        let report = run(&cfg, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        println!("{text}");

        assert_eq!(report.skipped, 1);
        assert_eq!(report.emitted, 4);
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn json_run_of_binary_function() {
        let mut cfg = config(Function::Hypot, FormatKind::F64, 3);
        cfg.y = Some(AxisConfig { lo: 1.0, hi: 2.0, points: 2 });
        cfg.output = OutputKind::Json;

        let mut out = Vec::new();
        let report = run(&cfg, &mut out).unwrap();
        assert_eq!(report.emitted, 6);

        let text = String::from_utf8(out).unwrap();
        let rows: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(rows.len(), 6);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row["index"], i);
            assert!(row["y_hex"].is_string());
        }
        // y is the outer loop
        assert_eq!(rows[0]["y"], 1.0);
        assert_eq!(rows[2]["y"], 1.0);
        assert_eq!(rows[3]["y"], 2.0);
        assert_eq!(rows[1]["x"], 0.5);
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let mut cfg = config(Function::Atan2, FormatKind::F32, 5);
        cfg.y = None;
        let mut out = Vec::new();
        assert!(matches!(run(&cfg, &mut out), Err(AuditError::ArityMismatch { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn report_serializes() {
        let cfg = config(Function::Cbrt, FormatKind::F64, 2);
        let report = run(&cfg, std::io::sink()).unwrap();
        let v = serde_json::to_value(report).unwrap();
        assert_eq!(v["function"], "cbrt");
        assert_eq!(v["format"], "f64");
        assert_eq!(v["emitted"], 2);
    }
}
