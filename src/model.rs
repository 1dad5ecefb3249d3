// Core structs: Product, Listing, Grouping
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// One canonical catalog entry. `product_name` is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub product_name: String,
    pub manufacturer: String,
    pub model: String,
    #[serde(default)]
    pub family: Option<String>,
}

/// One free-text commerce listing. `price` stays a decimal string as read;
/// `product_name` is the ground-truth label carried only by labeled fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub manufacturer: String,
    pub currency: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

/// A product's bucket of matched listings, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupEntry {
    pub product_name: String,
    pub listings: Vec<Listing>,
}

/// The result of one batch run: one bucket per catalog product, in catalog
/// order, plus the unmatched bucket. Every input listing lands in exactly
/// one place.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    entries: Vec<GroupEntry>,
    index: HashMap<String, usize>,
    pub unmatched: Vec<Listing>,
}

impl Grouping {
    /// Empty buckets for the given products. A duplicated name keeps its
    /// first bucket.
    pub fn new(product_names: impl IntoIterator<Item = String>) -> Self {
        let mut entries = Vec::new();
        let mut index = HashMap::new();
        for name in product_names {
            if index.contains_key(&name) {
                continue;
            }
            index.insert(name.clone(), entries.len());
            entries.push(GroupEntry {
                product_name: name,
                listings: Vec::new(),
            });
        }
        Grouping {
            entries,
            index,
            unmatched: Vec::new(),
        }
    }

    /// Files the listing under the named product, or under unmatched when
    /// the name is not in the catalog, so no listing is ever dropped.
    pub fn push(&mut self, product_name: &str, listing: Listing) {
        match self.index.get(product_name) {
            Some(&i) => self.entries[i].listings.push(listing),
            None => self.unmatched.push(listing),
        }
    }

    pub fn entries(&self) -> &[GroupEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut GroupEntry> {
        self.entries.iter_mut()
    }

    /// Total listings filed under products (unmatched excluded).
    pub fn matched_count(&self) -> usize {
        self.entries.iter().map(|e| e.listings.len()).sum()
    }
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("line {line}: malformed record: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}
