// Matcher module: assigns each listing to at most one catalog product.

pub mod index;

pub use index::{IndexedProduct, index_catalog};

use crate::model::{Grouping, Listing, ParserError, Product};
use crate::normalizer::simplify;

/// The assignment engine. Holds the indexed catalog, immutable for the run.
pub struct MatchEngine {
    products: Vec<IndexedProduct>,
}

impl MatchEngine {
    pub fn new(catalog: Vec<Product>) -> Self {
        MatchEngine {
            products: index_catalog(catalog),
        }
    }

    /// Returns the product this listing describes, or `None` when nothing in
    /// the catalog fits. Products are scanned in catalog order and the first
    /// hit wins; when two entries could both match, catalog order decides.
    pub fn assign<'a>(&'a self, listing: &Listing) -> Option<&'a str> {
        let manufacturer = listing.manufacturer.to_lowercase();
        let title = simplify(&listing.title);
        for p in &self.products {
            // Containment, not equality: "Fujifilm CA" and "FUJIFILM" both
            // cover the fujifilm catalog entries.
            if !manufacturer.contains(&p.manufacturer_norm) {
                continue;
            }
            if p.pattern.is_match(&title) {
                return Some(&p.product.product_name);
            }
        }
        None
    }

    /// Folds a listing stream into a grouping. Stream errors abort the fold
    /// and surface to the caller.
    pub fn group(
        &self,
        listings: impl IntoIterator<Item = Result<Listing, ParserError>>,
    ) -> Result<Grouping, ParserError> {
        let mut grouping = Grouping::new(
            self.products
                .iter()
                .map(|p| p.product.product_name.clone()),
        );
        for listing in listings {
            let listing = listing?;
            match self.assign(&listing) {
                Some(name) => grouping.push(name, listing),
                None => grouping.unmatched.push(listing),
            }
        }
        Ok(grouping)
    }
}
