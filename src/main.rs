mod analyzer;
mod config;
mod matcher;
mod model;
mod normalizer;
mod parser;
mod report;

use analyzer::PriceFilter;
use config::{AppConfig, load_config};
use matcher::MatchEngine;
use parser::{JsonLinesSource, RecordSource, record_parser::open_listings};
use std::path::Path;
use tracing::{error, info, warn};

const CONFIG_FILE: &str = "config.json";

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = if Path::new(CONFIG_FILE).exists() {
        match load_config(CONFIG_FILE) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config load error: {}", e);
                return;
            }
        }
    } else {
        AppConfig::default()
    };

    let source = JsonLinesSource::new(&config.products_file, &config.listings_file);

    info!("Loading catalog from {}...", config.products_file);
    let products = match source.load_products() {
        Ok(p) => p,
        Err(e) => {
            error!("Catalog load error: {}", e);
            return;
        }
    };
    info!("Loaded {} products", products.len());

    let engine = MatchEngine::new(products);

    // Labeled fixtures are a developer aid; check them when present.
    if Path::new(&config.labeled_listings_file).exists() {
        evaluate(&engine, &config.labeled_listings_file);
    }

    info!("Matching listings from {}...", config.listings_file);
    let listings = match source.stream_listings() {
        Ok(stream) => stream,
        Err(e) => {
            error!("Listing open error: {}", e);
            return;
        }
    };
    let mut grouping = match engine.group(listings) {
        Ok(g) => g,
        Err(e) => {
            error!("Listing stream error: {}", e);
            return;
        }
    };
    info!(
        "Matched {} listings, {} unmatched",
        grouping.matched_count(),
        grouping.unmatched.len()
    );

    let mut removed = Vec::new();
    if config.trim_outliers {
        info!("Trimming price outliers...");
        let filter = PriceFilter::new(config.currency_rates.clone());
        match filter.trim(&mut grouping) {
            Ok(r) => {
                info!("Price trim removed {} listings", r.len());
                removed = r;
            }
            Err(e) => {
                error!("Price trim error: {}", e);
                return;
            }
        }
    }

    if let Err(e) = report::write_results(&grouping, &config.results_file) {
        error!("Result write error: {}", e);
        return;
    }
    if let Err(e) = report::write_report(&grouping, &removed, &config.report_file) {
        error!("Report write error: {}", e);
        return;
    }
    info!(
        "Results written to {}, report to {}",
        config.results_file, config.report_file
    );
}

/// Runs the engine over labeled listings and logs every disagreement with
/// the ground truth. The label "Unmatched" marks listings that should match
/// nothing.
fn evaluate(engine: &MatchEngine, path: &str) {
    let stream = match open_listings(Path::new(path)) {
        Ok(stream) => stream,
        Err(e) => {
            warn!("Labeled listing open error: {}", e);
            return;
        }
    };

    let mut total = 0usize;
    let mut correct = 0usize;
    for listing in stream {
        let listing = match listing {
            Ok(l) => l,
            Err(e) => {
                warn!("Labeled listing skipped: {}", e);
                continue;
            }
        };
        total += 1;
        let expected = listing.product_name.as_deref().unwrap_or("Unmatched");
        let got = engine.assign(&listing).unwrap_or("Unmatched");
        if got == expected {
            correct += 1;
        } else {
            warn!(
                "\"{}\" classified as {}, expected {}",
                listing.title, got, expected
            );
        }
    }
    info!("Evaluation: {}/{} labeled listings correct", correct, total);
}
