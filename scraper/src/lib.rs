//! BDJobs job-listing scraper.
//!
//! Fetches search result pages from jobs.bdjobs.com, extracts each listing,
//! romanizes Bengali text, and exports the rows to a spreadsheet.

pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod logging;
pub mod parse;
pub mod pipeline;
pub mod transliterate;

pub use common::{Listing, NOT_AVAILABLE};
pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};
pub use fetch::{HttpSource, PageSource};
pub use parse::ListingParser;
pub use pipeline::{ScrapeReport, Scraper};
