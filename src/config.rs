use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

/// Run configuration: file locations, the currency table, and the outlier
/// trim switch. Everything has a default so the stock batch runs with no
/// config file at all, and a partial file overrides selectively.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub products_file: String,
    pub listings_file: String,
    /// Labeled fixture checked before the main batch when the file exists.
    pub labeled_listings_file: String,
    pub results_file: String,
    pub report_file: String,
    /// The two-sigma trim removes too many genuine listings on real feeds,
    /// so it stays off unless switched on here.
    pub trim_outliers: bool,
    /// Multipliers to the reference currency (CAD), keyed by currency code.
    pub currency_rates: HashMap<String, f64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            products_file: "products.txt".to_string(),
            listings_file: "listings.txt".to_string(),
            labeled_listings_file: "labeled_listings.txt".to_string(),
            results_file: "results.txt".to_string(),
            report_file: "hr_results.txt".to_string(),
            trim_outliers: false,
            // Rate snapshot matching the shipped data files.
            currency_rates: HashMap::from([
                ("CAD".to_string(), 1.0),
                ("USD".to_string(), 1.34),
                ("EUR".to_string(), 1.48),
                ("GBP".to_string(), 1.66),
            ]),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
