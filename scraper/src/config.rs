//! Run settings. Defaults reproduce a plain five-page scrape of BDJobs.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://jobs.bdjobs.com/jobsearch.asp?log=stats&pg=";
pub const DEFAULT_LINK_BASE: &str = "https://jobs.bdjobs.com/";
pub const DEFAULT_PAGES: u32 = 5;
pub const DEFAULT_DELAY_SECS: u64 = 2;
pub const DEFAULT_OUTPUT: &str = "bd_jobs_fixed.xlsx";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Listing URL without the page number.
    pub base_url: String,
    /// Base that relative job links are resolved against.
    pub link_base: String,
    /// Pages `1..=pages` are fetched.
    pub pages: u32,
    /// Pause between consecutive page requests.
    pub delay: Duration,
    pub user_agent: String,
    pub output: PathBuf,
    pub json_output: Option<PathBuf>,
}

impl ScrapeConfig {
    pub fn page_url(&self, page: u32) -> String {
        format!("{}{}", self.base_url, page)
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            link_base: DEFAULT_LINK_BASE.to_string(),
            pages: DEFAULT_PAGES,
            delay: Duration::from_secs(DEFAULT_DELAY_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            json_output: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_appends_page_number() {
        let config = ScrapeConfig::default();
        assert_eq!(
            config.page_url(3),
            "https://jobs.bdjobs.com/jobsearch.asp?log=stats&pg=3"
        );
    }

    #[test]
    fn test_defaults() {
        let config = ScrapeConfig::default();
        assert_eq!(config.pages, 5);
        assert_eq!(config.delay, Duration::from_secs(2));
        assert_eq!(config.output, PathBuf::from("bd_jobs_fixed.xlsx"));
        assert!(config.json_output.is_none());
    }
}
