// SLCSP - Core Library
// Second-lowest-cost Silver plan per zipcode, from three CSV sources.
//
// Stages: targets → resolver → aggregator → formatter. `source` and
// `pipeline` are the I/O glue used by the CLI and by tests.

pub mod aggregator;
pub mod cli;
pub mod error;
pub mod formatter;
pub mod money;
pub mod pipeline;
pub mod record;
pub mod resolver;
pub mod source;
pub mod targets;

// Re-export commonly used types
pub use aggregator::{aggregate_silver_rates, RateTable, TopTwoRates, SILVER};
pub use error::{SlcspError, SlcspResult};
pub use formatter::{build_lines, format_slcsps, SlcspLine, OUTPUT_HEADER};
pub use money::Money;
pub use pipeline::{compute, run, RunSummary, SlcspInputs, SlcspReport};
pub use record::{Record, Row};
pub use resolver::{resolve_rate_areas, AreaResolution, RateArea, RateAreaResolution};
pub use source::{read_rows, read_rows_from, write_lines};
pub use targets::select_targets;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
