// 🗂️ Record - field-named rows as consumed by every stage
// A record is anything that can hand back a string value by column name.

use crate::error::{SlcspError, SlcspResult};
use std::collections::{BTreeMap, HashMap};

// ============================================================================
// FIELD NAMES
// ============================================================================

pub const ZIPCODE: &str = "zipcode";
pub const RATE_AREA: &str = "rate_area";
pub const METAL_LEVEL: &str = "metal_level";
pub const RATE: &str = "rate";

/// Columns each source must declare in its header row
pub const TARGET_COLUMNS: &[&str] = &[ZIPCODE];
pub const ZIPS_COLUMNS: &[&str] = &[ZIPCODE, RATE_AREA];
pub const PLANS_COLUMNS: &[&str] = &[METAL_LEVEL, RATE, RATE_AREA];

/// Row as produced by the CSV source: header name → cell value
pub type Row = HashMap<String, String>;

// ============================================================================
// RECORD TRAIT
// ============================================================================

pub trait Record {
    /// Raw lookup, `None` when the record has no such field
    fn get_field(&self, name: &str) -> Option<&str>;

    /// Lookup that treats an absent field as a structural error
    fn field(&self, name: &str) -> SlcspResult<&str> {
        self.get_field(name)
            .ok_or_else(|| SlcspError::missing_field(name))
    }
}

impl Record for HashMap<String, String> {
    fn get_field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Record for BTreeMap<String, String> {
    fn get_field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn get_field(&self, name: &str) -> Option<&str> {
        (**self).get_field(name)
    }
}

/// Build a row from literal pairs
#[cfg(test)]
pub(crate) fn row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
