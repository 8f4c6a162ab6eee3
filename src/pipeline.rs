// 🔗 Pipeline - list → mapping → plans, then format
//
// Each source is read once, fully, in that order. The resolution and the rate
// table are owned by the stage that builds them and only lent to later stages.

use crate::aggregator::aggregate_silver_rates;
use crate::formatter::{build_lines, SlcspLine, OUTPUT_HEADER};
use crate::record::{PLANS_COLUMNS, TARGET_COLUMNS, ZIPS_COLUMNS};
use crate::resolver::{resolve_rate_areas, AreaResolution};
use crate::source::{read_rows, write_lines};
use crate::targets::select_targets;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File names the three sources use inside a data directory
pub const TARGETS_FILE: &str = "slcsp.csv";
pub const ZIPS_FILE: &str = "zips.csv";
pub const PLANS_FILE: &str = "plans.csv";

// ============================================================================
// INPUTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlcspInputs {
    pub targets_path: PathBuf,
    pub zips_path: PathBuf,
    pub plans_path: PathBuf,
    /// Emit `zipcode,rate` before the results
    pub header: bool,
}

impl SlcspInputs {
    /// Standard file names inside `dir`
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        SlcspInputs {
            targets_path: dir.join(TARGETS_FILE),
            zips_path: dir.join(ZIPS_FILE),
            plans_path: dir.join(PLANS_FILE),
            header: false,
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

// ============================================================================
// RUN SUMMARY
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub targets: usize,
    pub resolved: usize,
    pub ambiguous: usize,
    pub unresolved: usize,
    pub rate_areas: usize,
    pub silver_plans: usize,
    pub priced: usize,
}

impl RunSummary {
    pub fn summary(&self) -> String {
        format!(
            "{} zipcodes: {} resolved, {} ambiguous, {} unresolved; {} rate areas, {} silver plans; {} priced",
            self.targets,
            self.resolved,
            self.ambiguous,
            self.unresolved,
            self.rate_areas,
            self.silver_plans,
            self.priced
        )
    }
}

#[derive(Debug, Clone)]
pub struct SlcspReport {
    pub lines: Vec<SlcspLine>,
    pub summary: RunSummary,
}

// ============================================================================
// RUN
// ============================================================================

/// Read the three sources and compute one line per target zipcode
pub fn compute(inputs: &SlcspInputs) -> Result<SlcspReport> {
    let target_rows = read_rows(&inputs.targets_path, TARGET_COLUMNS)
        .with_context(|| format!("Failed to read {}", inputs.targets_path.display()))?;
    let zipcodes = select_targets(&target_rows)
        .with_context(|| format!("Failed to select zipcodes from {}", inputs.targets_path.display()))?;

    let zip_rows = read_rows(&inputs.zips_path, ZIPS_COLUMNS)
        .with_context(|| format!("Failed to read {}", inputs.zips_path.display()))?;
    let resolution = resolve_rate_areas(&zipcodes, &zip_rows)
        .with_context(|| format!("Failed to resolve rate areas from {}", inputs.zips_path.display()))?;

    let plan_rows = read_rows(&inputs.plans_path, PLANS_COLUMNS)
        .with_context(|| format!("Failed to read {}", inputs.plans_path.display()))?;
    let table = aggregate_silver_rates(&plan_rows, &resolution)
        .with_context(|| format!("Failed to aggregate plans from {}", inputs.plans_path.display()))?;

    let lines = build_lines(&zipcodes, &resolution, &table);

    let mut summary = RunSummary {
        targets: zipcodes.len(),
        rate_areas: table.len(),
        silver_plans: table.silver_plans(),
        priced: lines.iter().filter(|l| l.has_rate()).count(),
        ..RunSummary::default()
    };
    for zip in &zipcodes {
        match resolution.get(zip) {
            AreaResolution::Resolved(_) => summary.resolved += 1,
            AreaResolution::Ambiguous => summary.ambiguous += 1,
            AreaResolution::Unresolved => summary.unresolved += 1,
        }
    }

    if summary.unresolved > 0 {
        warn!(
            count = summary.unresolved,
            "zipcodes missing from {}",
            inputs.zips_path.display()
        );
    }
    info!("{}", summary.summary());

    Ok(SlcspReport { lines, summary })
}

/// Compute and write the report to `out`
pub fn run<W: Write>(inputs: &SlcspInputs, out: W) -> Result<RunSummary> {
    let report = compute(inputs)?;

    let header = inputs.header.then_some(OUTPUT_HEADER.to_string());
    let lines = header
        .into_iter()
        .chain(report.lines.iter().map(SlcspLine::to_string));
    write_lines(out, lines).context("Failed to write results")?;

    Ok(report.summary)
}

// ============================================================================
// TESTS
// ============================================================================
