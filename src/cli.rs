use crate::pipeline::SlcspInputs;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slcsp")]
#[command(about = "Second-lowest-cost Silver plan rate for each zipcode in slcsp.csv")]
#[command(version)]
pub struct Cli {
    /// Directory holding slcsp.csv, zips.csv and plans.csv
    #[arg(default_value = ".")]
    pub data_dir: PathBuf,

    /// Target zipcodes file (overrides DATA_DIR/slcsp.csv)
    #[arg(long)]
    pub slcsp: Option<PathBuf>,

    /// Zipcode to rate area mapping (overrides DATA_DIR/zips.csv)
    #[arg(long)]
    pub zips: Option<PathBuf>,

    /// Plan catalog (overrides DATA_DIR/plans.csv)
    #[arg(long)]
    pub plans: Option<PathBuf>,

    /// Print a `zipcode,rate` header line first
    #[arg(long)]
    pub header: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn inputs(&self) -> SlcspInputs {
        let mut inputs = SlcspInputs::from_dir(&self.data_dir).with_header(self.header);
        if let Some(path) = &self.slcsp {
            inputs.targets_path = path.clone();
        }
        if let Some(path) = &self.zips {
            inputs.zips_path = path.clone();
        }
        if let Some(path) = &self.plans {
            inputs.plans_path = path.clone();
        }
        inputs
    }

    /// Default filter directive when RUST_LOG is unset
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["slcsp"]);
        let inputs = cli.inputs();
        assert_eq!(inputs, SlcspInputs::from_dir("."));
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_data_dir_and_overrides() {
        let cli = Cli::parse_from([
            "slcsp",
            "data",
            "--plans",
            "other/plans-2024.csv",
            "--header",
            "-vv",
        ]);
        let inputs = cli.inputs();
        assert_eq!(inputs.targets_path, Path::new("data").join("slcsp.csv"));
        assert_eq!(inputs.zips_path, Path::new("data").join("zips.csv"));
        assert_eq!(inputs.plans_path, PathBuf::from("other/plans-2024.csv"));
        assert!(inputs.header);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
