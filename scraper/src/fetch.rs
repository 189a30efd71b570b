use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;

use crate::error::{Result, ScrapeError};

/// Anything that can turn a page URL into its HTML body.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain blocking GET with a fixed browser user-agent.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        debug!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_USER_AGENT;

    #[test]
    fn test_client_builds_with_browser_user_agent() {
        assert!(HttpSource::new(DEFAULT_USER_AGENT).is_ok());
    }

    #[test]
    fn test_status_error_names_url() {
        let err = ScrapeError::Status {
            url: "https://jobs.bdjobs.com/jobsearch.asp?pg=4".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "unexpected HTTP status 503 from https://jobs.bdjobs.com/jobsearch.asp?pg=4"
        );
    }
}
