// 🎯 Target Selector - zipcodes to report on, in input order

use crate::error::SlcspResult;
use crate::record::{Record, ZIPCODE};

/// Zipcodes in the order they appear, duplicates kept verbatim
pub fn select_targets<I, R>(rows: I) -> SlcspResult<Vec<String>>
where
    I: IntoIterator<Item = R>,
    R: Record,
{
    rows.into_iter()
        .map(|row| row.field(ZIPCODE).map(str::to_string))
        .collect()
}
