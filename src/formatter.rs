// 🧾 Formatter - one "<zipcode>,<rate>" line per target zipcode

use crate::aggregator::RateTable;
use crate::money::Money;
use crate::resolver::{AreaResolution, RateAreaResolution};
use std::fmt;

/// Header matching the column layout of the target file
pub const OUTPUT_HEADER: &str = "zipcode,rate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlcspLine {
    pub zipcode: String,
    /// `None` when no unambiguous second Silver rate exists
    pub rate: Option<Money>,
}

impl SlcspLine {
    pub fn has_rate(&self) -> bool {
        self.rate.is_some()
    }
}

impl fmt::Display for SlcspLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rate {
            Some(rate) => write!(f, "{},{}", self.zipcode, rate),
            None => write!(f, "{},", self.zipcode),
        }
    }
}

/// Rate to report for one zipcode
fn slcsp_for(zipcode: &str, resolution: &RateAreaResolution, table: &RateTable) -> Option<Money> {
    match resolution.get(zipcode) {
        AreaResolution::Resolved(area) => table.second_lowest_cost(area.as_str()),
        AreaResolution::Ambiguous | AreaResolution::Unresolved => None,
    }
}

/// Join zipcodes with their rate, in the order given
pub fn build_lines<S: AsRef<str>>(
    zipcodes: &[S],
    resolution: &RateAreaResolution,
    table: &RateTable,
) -> Vec<SlcspLine> {
    zipcodes
        .iter()
        .map(|zip| {
            let zipcode = zip.as_ref();
            SlcspLine {
                zipcode: zipcode.to_string(),
                rate: slcsp_for(zipcode, resolution, table),
            }
        })
        .collect()
}

pub fn format_slcsps<S: AsRef<str>>(
    zipcodes: &[S],
    resolution: &RateAreaResolution,
    table: &RateTable,
) -> Vec<String> {
    build_lines(zipcodes, resolution, table)
        .iter()
        .map(SlcspLine::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate_silver_rates;
    use crate::record::{row, Row};
    use crate::resolver::{resolve_rate_areas, RateArea};

    fn fixture(zips: &[(&str, &str)], plans: &[(&str, &str)], targets: &[&str]) -> Vec<String> {
        let zip_rows: Vec<Row> = zips
            .iter()
            .map(|&(z, a)| row(&[("zipcode", z), ("rate_area", a)]))
            .collect();
        let plan_rows: Vec<Row> = plans
            .iter()
            .map(|&(a, r)| row(&[("rate_area", a), ("metal_level", "Silver"), ("rate", r)]))
            .collect();
        let resolution = resolve_rate_areas(targets, zip_rows).unwrap();
        let table = aggregate_silver_rates(plan_rows, &resolution).unwrap();
        format_slcsps(targets, &resolution, &table)
    }

    #[test]
    fn test_line_display() {
        let with_rate = SlcspLine {
            zipcode: "23456".to_string(),
            rate: Some("400".parse().unwrap()),
        };
        let without = SlcspLine {
            zipcode: "12345".to_string(),
            rate: None,
        };
        assert_eq!(with_rate.to_string(), "23456,400.00");
        assert_eq!(without.to_string(), "12345,");
        assert!(with_rate.has_rate());
        assert!(!without.has_rate());
    }

    #[test]
    fn test_format_in_input_order() {
        let lines = fixture(
            &[("12345", "1"), ("23456", "2")],
            &[("1", "500"), ("2", "500"), ("2", "400")],
            &["12345", "23456"],
        );
        assert_eq!(lines, vec!["12345,", "23456,400.00"]);
    }

    #[test]
    fn test_format_ambiguous_is_empty() {
        let lines = fixture(
            &[("Z2", "5"), ("Z2", "6")],
            &[("5", "300"), ("5", "200"), ("6", "300"), ("6", "200")],
            &["Z2"],
        );
        assert_eq!(lines, vec!["Z2,"]);
    }

    #[test]
    fn test_format_unknown_zipcode_is_empty() {
        let lines = fixture(&[("11111", "1")], &[("1", "300"), ("1", "200")], &["99999", "11111"]);
        assert_eq!(lines, vec!["99999,", "11111,200.00"]);
    }

    #[test]
    fn test_format_duplicates_repeat() {
        let lines = fixture(
            &[("11111", "1")],
            &[("1", "300"), ("1", "245.5")],
            &["11111", "11111"],
        );
        assert_eq!(lines, vec!["11111,245.50", "11111,245.50"]);
    }

    #[test]
    fn test_format_without_table_entry_is_empty() {
        let resolution: RateAreaResolution = [(
            "55555".to_string(),
            AreaResolution::Resolved(RateArea::new("77")),
        )]
        .into_iter()
        .collect();
        let table = RateTable::default();
        assert_eq!(format_slcsps(&["55555"], &resolution, &table), vec!["55555,"]);
    }
}
