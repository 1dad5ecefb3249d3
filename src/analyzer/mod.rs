// Analyzer module: price statistics and outlier trimming.

pub mod price_filter;

// Re-export the filter types for ease of use.
pub use price_filter::{PriceFilter, PriceStats};
