// 🥈 SLCSP Aggregator - top-two Silver rates per relevant rate area
//
// Plan rows are scanned once. Only Silver plans whose rate area some target
// zipcode resolved to are kept; everything else is skipped before the rate
// is parsed.

use crate::error::SlcspResult;
use crate::money::Money;
use crate::record::{Record, METAL_LEVEL, RATE, RATE_AREA};
use crate::resolver::{RateArea, RateAreaResolution};
use std::collections::HashMap;
use tracing::debug;

/// Metal level the aggregator keeps (exact, case-sensitive match)
pub const SILVER: &str = "Silver";

// ============================================================================
// TOP TWO RATES
// ============================================================================

/// Two largest Silver rates seen so far; zero means "no plan seen"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopTwoRates {
    pub highest: Money,
    pub second_highest: Money,
}

impl TopTwoRates {
    pub fn new(highest: Money, second_highest: Money) -> Self {
        TopTwoRates {
            highest,
            second_highest,
        }
    }

    /// Fold one rate in. Both comparisons are strict, and values are not
    /// deduplicated: a second plan tied with `highest` lands in
    /// `second_highest`.
    pub fn observe(&mut self, rate: Money) {
        if rate > self.highest {
            self.second_highest = self.highest;
            self.highest = rate;
        } else if rate > self.second_highest {
            self.second_highest = rate;
        }
    }

    /// The rate reported for the area, `None` when fewer than two plans counted
    pub fn second_lowest_cost(&self) -> Option<Money> {
        if self.second_highest.is_zero() {
            None
        } else {
            Some(self.second_highest)
        }
    }
}

// ============================================================================
// RATE TABLE
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<RateArea, TopTwoRates>,
    silver_plans: usize,
}

impl RateTable {
    /// Table with every area at (0, 0)
    pub fn for_areas<'a, I>(areas: I) -> Self
    where
        I: IntoIterator<Item = &'a RateArea>,
    {
        RateTable {
            rates: areas
                .into_iter()
                .map(|area| (area.clone(), TopTwoRates::default()))
                .collect(),
            silver_plans: 0,
        }
    }

    pub fn get(&self, rate_area: &str) -> Option<&TopTwoRates> {
        self.rates.get(rate_area)
    }

    pub fn second_lowest_cost(&self, rate_area: &str) -> Option<Money> {
        self.get(rate_area).and_then(TopTwoRates::second_lowest_cost)
    }

    /// Number of Silver plans that landed in a relevant area
    pub fn silver_plans(&self) -> usize {
        self.silver_plans
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Record a rate for an area; areas outside the table are ignored
    fn observe(&mut self, rate_area: &str, rate: Money) {
        if let Some(top) = self.rates.get_mut(rate_area) {
            top.observe(rate);
            self.silver_plans += 1;
        }
    }

    fn contains(&self, rate_area: &str) -> bool {
        self.rates.contains_key(rate_area)
    }
}

/// Scan plan rows and build the top-two table for the resolved rate areas
pub fn aggregate_silver_rates<I, R>(
    plans: I,
    resolution: &RateAreaResolution,
) -> SlcspResult<RateTable>
where
    I: IntoIterator<Item = R>,
    R: Record,
{
    let mut table = RateTable::for_areas(resolution.relevant_rate_areas());

    for plan in plans {
        if plan.field(METAL_LEVEL)? != SILVER {
            continue;
        }
        let rate_area = plan.field(RATE_AREA)?;
        if !table.contains(rate_area) {
            continue;
        }

        let rate: Money = plan.field(RATE)?.parse()?;
        table.observe(rate_area, rate);
    }

    debug!(
        rate_areas = table.len(),
        silver_plans = table.silver_plans(),
        "aggregated silver rates"
    );

    Ok(table)
}

// ============================================================================
// TESTS
// ============================================================================
