//! BDJobs Job Scraper
//!
//! Scrapes job listings from jobs.bdjobs.com and saves them to a spreadsheet.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use bdjobs_scraper::config::{
    DEFAULT_DELAY_SECS, DEFAULT_OUTPUT, DEFAULT_PAGES, DEFAULT_USER_AGENT,
};
use bdjobs_scraper::{export, logging, HttpSource, ListingParser, ScrapeConfig, Scraper};
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "bdjobs_scraper")]
#[command(about = "Scrape BDJobs listings into a spreadsheet")]
#[command(version)]
struct Cli {
    #[arg(short, long, default_value_t = DEFAULT_PAGES, help = "Number of result pages to fetch")]
    pages: u32,

    #[arg(long, default_value_t = DEFAULT_DELAY_SECS, help = "Seconds to wait between page requests")]
    delay_secs: u64,

    #[arg(short, long, default_value = DEFAULT_OUTPUT, help = "Spreadsheet to write")]
    output: PathBuf,

    #[arg(long, help = "Also write the rows as JSON to this path")]
    json: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_USER_AGENT, help = "User-Agent header sent with every request")]
    user_agent: String,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> ScrapeConfig {
        ScrapeConfig {
            pages: self.pages,
            delay: Duration::from_secs(self.delay_secs),
            user_agent: self.user_agent,
            output: self.output,
            json_output: self.json,
            ..ScrapeConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = cli.into_config();
    info!(pages = config.pages, "starting BDJobs scraper");

    let source = HttpSource::new(&config.user_agent).context("failed to build HTTP client")?;
    let parser = ListingParser::new(&config.link_base).context("failed to build listing parser")?;
    let scraper = Scraper::new(source, parser, config.clone());

    let report = scraper.run();
    if !report.failed_pages.is_empty() {
        warn!(pages = ?report.failed_pages, "some pages could not be retrieved");
    }
    info!(
        total = report.listings.len(),
        pages_fetched = report.pages_fetched,
        "scraping complete"
    );

    let rows = export::write_xlsx(&config.output, &report.listings)
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    if let Some(json_path) = &config.json_output {
        export::write_json(json_path, &report.listings)
            .with_context(|| format!("failed to write {}", json_path.display()))?;
    }

    println!("💾 Data successfully saved to {} ({rows} rows)", config.output.display());
    Ok(())
}
