// Record ingestion: one JSON object per line, catalogs read eagerly,
// listings streamed lazily.
use crate::model::{Listing, ParserError, Product};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// What the engine needs from its record files.
pub trait RecordSource {
    fn load_products(&self) -> Result<Vec<Product>, ParserError>;
    fn stream_listings(&self) -> Result<ListingStream<BufReader<File>>, ParserError>;
}

/// Record files in the line-delimited JSON layout.
pub struct JsonLinesSource {
    products_path: PathBuf,
    listings_path: PathBuf,
}

impl JsonLinesSource {
    pub fn new(products_path: impl Into<PathBuf>, listings_path: impl Into<PathBuf>) -> Self {
        JsonLinesSource {
            products_path: products_path.into(),
            listings_path: listings_path.into(),
        }
    }
}

impl RecordSource for JsonLinesSource {
    fn load_products(&self) -> Result<Vec<Product>, ParserError> {
        let file = File::open(&self.products_path)?;
        read_products(BufReader::new(file))
    }

    fn stream_listings(&self) -> Result<ListingStream<BufReader<File>>, ParserError> {
        open_listings(&self.listings_path)
    }
}

/// Parses a whole catalog. Any line that does not decode into a product,
/// including one missing a required field, fails the load.
pub fn read_products(reader: impl BufRead) -> Result<Vec<Product>, ParserError> {
    let mut products = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        products.push(parse_record(&line?, i + 1)?);
    }
    Ok(products)
}

/// Opens a listing file as a lazy stream.
pub fn open_listings(path: &Path) -> Result<ListingStream<BufReader<File>>, ParserError> {
    let file = File::open(path)?;
    Ok(ListingStream {
        lines: BufReader::new(file).lines(),
        line_no: 0,
    })
}

/// Single-pass listing iterator. A malformed line turns into an `Err` item
/// when it is reached; the stream itself stays advanceable, so the caller
/// chooses between skipping the record and aborting the run.
pub struct ListingStream<R: BufRead> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> ListingStream<R> {
    pub fn from_reader(reader: R) -> Self {
        ListingStream {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for ListingStream<R> {
    type Item = Result<Listing, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_no += 1;
        let line_no = self.line_no;
        Some(
            line.map_err(ParserError::from)
                .and_then(|l| parse_record(&l, line_no)),
        )
    }
}

fn parse_record<T: DeserializeOwned>(line: &str, line_no: usize) -> Result<T, ParserError> {
    serde_json::from_str(line).map_err(|source| ParserError::MalformedRecord {
        line: line_no,
        source,
    })
}
