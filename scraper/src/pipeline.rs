use std::thread;

use common::Listing;
use tracing::{error, info};

use crate::config::ScrapeConfig;
use crate::fetch::PageSource;
use crate::parse::ListingParser;
use crate::transliterate::romanize_listing;

/// Outcome of one scraping run.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub listings: Vec<Listing>,
    pub pages_fetched: u32,
    pub failed_pages: Vec<u32>,
}

pub struct Scraper<S> {
    source: S,
    parser: ListingParser,
    config: ScrapeConfig,
}

impl<S: PageSource> Scraper<S> {
    pub fn new(source: S, parser: ListingParser, config: ScrapeConfig) -> Self {
        Self {
            source,
            parser,
            config,
        }
    }

    /// Fetches pages `1..=pages` in order. A page that fails to download is
    /// logged and recorded, and the run moves on to the next page.
    pub fn run(&self) -> ScrapeReport {
        let mut report = ScrapeReport::default();

        for page in 1..=self.config.pages {
            if page > 1 && !self.config.delay.is_zero() {
                thread::sleep(self.config.delay);
            }

            let url = self.config.page_url(page);
            info!(page, %url, "scraping page");

            let html = match self.source.fetch(&url) {
                Ok(html) => html,
                Err(e) => {
                    error!(page, error = %e, "failed to retrieve page");
                    report.failed_pages.push(page);
                    continue;
                }
            };
            report.pages_fetched += 1;

            let listings = self.parser.parse_page(&html);
            info!(page, count = listings.len(), "extracted listings");
            report
                .listings
                .extend(listings.into_iter().map(romanize_listing));
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, ScrapeError};
    use std::cell::RefCell;
    use std::time::Duration;

    /// Serves pages in order and remembers which URLs were asked for.
    struct Recorder {
        requested: RefCell<Vec<String>>,
    }

    impl PageSource for Recorder {
        fn fetch(&self, url: &str) -> Result<String> {
            self.requested.borrow_mut().push(url.to_string());
            if url.ends_with("pg=2") {
                return Err(ScrapeError::Status {
                    url: url.to_string(),
                    status: 503,
                });
            }
            Ok(r#"<div class="featured-job"><div class="company">ঢাকা ব্যাংক</div></div>"#
                .to_string())
        }
    }

    #[test]
    fn test_requests_every_page_in_order() {
        let config = ScrapeConfig {
            pages: 3,
            delay: Duration::ZERO,
            ..ScrapeConfig::default()
        };
        let parser = ListingParser::new(&config.link_base).unwrap();
        let source = Recorder {
            requested: RefCell::new(Vec::new()),
        };
        let scraper = Scraper::new(source, parser, config);

        let report = scraper.run();

        let requested = scraper.source.requested.borrow();
        assert_eq!(requested.len(), 3);
        assert!(requested[0].ends_with("pg=1"));
        assert!(requested[2].ends_with("pg=3"));
        assert_eq!(report.failed_pages, vec![2]);
        assert_eq!(report.pages_fetched, 2);
        assert_eq!(report.listings.len(), 2);
        assert_eq!(report.listings[0].company, "DhAkA byAMka");
    }
}
