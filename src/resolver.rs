// 🗺️ Rate-Area Resolver - zipcode → single rate area, or Ambiguous
//
// A zipcode may span several counties and therefore several rate areas.
// Once two rows disagree the zipcode is Ambiguous for good: a later row
// repeating an earlier value does not bring it back.

use crate::error::SlcspResult;
use crate::record::{Record, RATE_AREA, ZIPCODE};
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::debug;

// ============================================================================
// CORE TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RateArea(String);

impl RateArea {
    pub fn new(id: impl Into<String>) -> Self {
        RateArea(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets tables keyed by RateArea be queried with the raw &str from a row
impl Borrow<str> for RateArea {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RateArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaResolution {
    /// No mapping row mentioned the zipcode
    Unresolved,
    Resolved(RateArea),
    /// Mapping rows disagree on the rate area
    Ambiguous,
}

impl AreaResolution {
    pub fn rate_area(&self) -> Option<&RateArea> {
        match self {
            AreaResolution::Resolved(area) => Some(area),
            AreaResolution::Unresolved | AreaResolution::Ambiguous => None,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, AreaResolution::Ambiguous)
    }
}

static UNRESOLVED: AreaResolution = AreaResolution::Unresolved;

// ============================================================================
// RESOLUTION
// ============================================================================

/// Immutable zipcode → rate area mapping for the target zipcodes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateAreaResolution {
    entries: HashMap<String, AreaResolution>,
}

impl RateAreaResolution {
    /// Resolution for a zipcode; zipcodes never seen are `Unresolved`
    pub fn get(&self, zipcode: &str) -> &AreaResolution {
        self.entries.get(zipcode).unwrap_or(&UNRESOLVED)
    }

    pub fn rate_area(&self, zipcode: &str) -> Option<&RateArea> {
        self.get(zipcode).rate_area()
    }

    /// Distinct rate areas that some zipcode resolved to unambiguously
    pub fn relevant_rate_areas(&self) -> HashSet<&RateArea> {
        self.entries
            .values()
            .filter_map(AreaResolution::rate_area)
            .collect()
    }

    pub fn ambiguous_count(&self) -> usize {
        self.entries.values().filter(|r| r.is_ambiguous()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fold one mapping row into the entry for `zipcode`
    fn observe(&mut self, zipcode: &str, rate_area: &str) {
        match self.entries.get_mut(zipcode) {
            None => {
                self.entries.insert(
                    zipcode.to_string(),
                    AreaResolution::Resolved(RateArea::new(rate_area)),
                );
            }
            Some(entry) => {
                if let AreaResolution::Resolved(existing) = entry {
                    if existing.as_str() != rate_area {
                        debug!(
                            zipcode,
                            first = existing.as_str(),
                            second = rate_area,
                            "zipcode spans several rate areas"
                        );
                        *entry = AreaResolution::Ambiguous;
                    }
                }
            }
        }
    }
}

impl FromIterator<(String, AreaResolution)> for RateAreaResolution {
    fn from_iter<T: IntoIterator<Item = (String, AreaResolution)>>(iter: T) -> Self {
        RateAreaResolution {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Build the resolution for `targets` from (zipcode, rate_area) rows
pub fn resolve_rate_areas<S, I, R>(targets: &[S], rows: I) -> SlcspResult<RateAreaResolution>
where
    S: AsRef<str>,
    I: IntoIterator<Item = R>,
    R: Record,
{
    let wanted: HashSet<&str> = targets.iter().map(AsRef::as_ref).collect();
    let mut resolution = RateAreaResolution::default();

    for row in rows {
        let zipcode = row.field(ZIPCODE)?;
        let rate_area = row.field(RATE_AREA)?;
        if wanted.contains(zipcode) {
            resolution.observe(zipcode, rate_area);
        }
    }

    Ok(resolution)
}

// ============================================================================
// TESTS
// ============================================================================
