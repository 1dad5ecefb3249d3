// Price-based outlier trimming for matched groups.
//
// A group can pick up accessories for a very specific camera (a battery or
// a case that names the model), and those sit far below the real product's
// price. The trim drops listings more than two deviations under the group
// mean. On real feeds it also drops legitimate listings, which is why the
// pipeline leaves it switched off unless configured on.

use crate::model::{FilterError, Grouping, Listing};
use std::collections::HashMap;

/// Running sums for one group's prices. Mean and deviation derive from the
/// sums, so the individual prices are never retained.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceStats {
    sum: f64,
    sum_sq: f64,
    count: u32,
}

impl PriceStats {
    pub fn add(&mut self, price: f64) {
        self.sum += price;
        self.sum_sq += price * price;
        self.count += 1;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / f64::from(self.count)
    }

    /// Population standard deviation. The variance is clamped at zero, float
    /// rounding can push it slightly negative for near-constant prices.
    pub fn std_dev(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let mean = self.mean();
        let variance = (self.sum_sq / f64::from(self.count) - mean * mean).max(0.0);
        variance.sqrt()
    }
}

/// Trims per-group price outliers using a static conversion table keyed by
/// currency code.
pub struct PriceFilter {
    conversion: HashMap<String, f64>,
}

impl PriceFilter {
    pub fn new(conversion: HashMap<String, f64>) -> Self {
        PriceFilter { conversion }
    }

    /// Converts a listing price to the reference currency. A currency code
    /// missing from the table is an error; skipping it silently would bias
    /// the group mean.
    fn convert(&self, listing: &Listing) -> Result<f64, FilterError> {
        let rate = self
            .conversion
            .get(&listing.currency)
            .ok_or_else(|| FilterError::UnknownCurrency(listing.currency.clone()))?;
        let price = listing.price.parse::<f64>().unwrap_or(0.0);
        Ok(price * rate)
    }

    /// Removes every listing whose converted price falls strictly below
    /// `mean - 2 * std_dev` of its group. Survivors keep their order; the
    /// removed listings come back in input order. A group containing an
    /// unknown currency is left exactly as it was.
    pub fn trim(&self, grouping: &mut Grouping) -> Result<Vec<Listing>, FilterError> {
        let mut removed = Vec::new();
        for entry in grouping.entries_mut() {
            self.trim_group(&mut entry.listings, &mut removed)?;
        }
        Ok(removed)
    }

    fn trim_group(
        &self,
        listings: &mut Vec<Listing>,
        removed: &mut Vec<Listing>,
    ) -> Result<(), FilterError> {
        // Convert everything up front: an unknown currency must surface
        // before any listing is dropped from the group.
        let converted = listings
            .iter()
            .map(|l| self.convert(l))
            .collect::<Result<Vec<f64>, FilterError>>()?;

        let mut stats = PriceStats::default();
        for &price in &converted {
            stats.add(price);
        }
        let cutoff = stats.mean() - 2.0 * stats.std_dev();

        let mut kept = Vec::with_capacity(listings.len());
        for (listing, price) in listings.drain(..).zip(converted) {
            if price < cutoff {
                removed.push(listing);
            } else {
                kept.push(listing);
            }
        }
        *listings = kept;
        Ok(())
    }
}
